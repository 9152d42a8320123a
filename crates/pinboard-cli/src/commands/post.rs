//! Post command handlers

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use pinboard_core::{Backend, Board, ListQuery, NewPost, PostPatch, SortKey};

use crate::output::Output;

/// List posts with optional board filter, search, sort, and paging
#[allow(clippy::too_many_arguments)]
pub async fn list(
    backend: &dyn Backend,
    board: Option<String>,
    query: Option<String>,
    sort: String,
    page: usize,
    size: usize,
    output: &Output,
) -> Result<()> {
    if page == 0 {
        bail!("Page numbering starts at 1");
    }
    if size == 0 {
        bail!("Page size must be positive");
    }

    let list_query = ListQuery {
        board: board.as_deref().map(parse_board).transpose()?,
        q: query.unwrap_or_default(),
        sort: parse_sort(&sort)?,
        page,
        size,
    };

    let result = backend.list_posts(&list_query).await?;
    output.print_page(&result);
    Ok(())
}

/// Show a single post; counts a view on the record
pub async fn show(backend: &dyn Backend, id: String, output: &Output) -> Result<()> {
    let id = parse_post_id(&id)?;

    let post = backend
        .get_post(id)
        .await?
        .ok_or_else(|| anyhow!("Post not found: {}", id))?;

    output.print_post(&post);
    Ok(())
}

/// Create a new post
#[allow(clippy::too_many_arguments)]
pub async fn create(
    backend: &dyn Backend,
    board: String,
    title: String,
    author: String,
    content: String,
    tags: Vec<String>,
    event_start: Option<String>,
    event_end: Option<String>,
    output: &Output,
) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Title must not be empty");
    }

    let payload = NewPost {
        board: parse_board(&board)?,
        title,
        author,
        content,
        tags,
        event_start: event_start.as_deref().map(parse_instant).transpose()?,
        event_end: event_end.as_deref().map(parse_instant).transpose()?,
    };

    let post = backend.create_post(payload).await?;

    output.success(&format!("Created post {}", post.id));
    output.print_post(&post);
    Ok(())
}

/// Edit fields of an existing post
#[allow(clippy::too_many_arguments)]
pub async fn edit(
    backend: &dyn Backend,
    id: String,
    board: Option<String>,
    title: Option<String>,
    author: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    output: &Output,
) -> Result<()> {
    let id = parse_post_id(&id)?;

    let patch = PostPatch {
        board: board.as_deref().map(parse_board).transpose()?,
        title,
        author,
        content,
        tags: if tags.is_empty() { None } else { Some(tags) },
        event_start: None,
        event_end: None,
    };

    if patch.board.is_none()
        && patch.title.is_none()
        && patch.author.is_none()
        && patch.content.is_none()
        && patch.tags.is_none()
    {
        bail!("Nothing to edit; pass at least one field to change");
    }

    let post = backend.update_post(id, patch).await?;

    output.success("Post updated");
    output.print_post(&post);
    Ok(())
}

/// Like a post
pub async fn like(backend: &dyn Backend, id: String, output: &Output) -> Result<()> {
    let id = parse_post_id(&id)?;

    let post = backend.like_post(id).await?;

    output.success(&format!("Liked post {} ({} likes)", post.id, post.likes));
    Ok(())
}

fn parse_post_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("Invalid post id: {}", id))
}

fn parse_board(s: &str) -> Result<Board> {
    s.parse::<Board>().map_err(|e| anyhow!(e))
}

fn parse_sort(s: &str) -> Result<SortKey> {
    s.parse::<SortKey>().map_err(|e| anyhow!(e))
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .with_context(|| format!("Invalid timestamp '{}' (expected RFC 3339)", s))
}
