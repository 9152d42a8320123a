//! Post query engine
//!
//! Filter, search, sort, and paginate the posts collection. The whole
//! pipeline is a pure function over an owned snapshot of the
//! collection, so both the local store and tests drive it directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Board, Post};

/// Sort order for post listings
///
/// Exactly one key is active per query. There is no secondary tiebreak:
/// ties keep their stored relative order (the sort is stable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first, by `created_at`
    #[default]
    New,
    /// Most viewed first
    View,
    /// Most liked first
    Like,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::New => "new",
            SortKey::View => "view",
            SortKey::Like => "like",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(SortKey::New),
            "view" => Ok(SortKey::View),
            "like" => Ok(SortKey::Like),
            _ => Err(format!(
                "unknown sort key '{}' (expected new, view, or like)",
                s
            )),
        }
    }
}

/// Parameters for a post listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Exact-match board filter; `None` matches all boards
    pub board: Option<Board>,
    /// Case-insensitive search over title, content, and tags; empty
    /// string means no search filtering
    pub q: String,
    pub sort: SortKey,
    /// 1-based page index
    pub page: usize,
    /// Page size, must be positive
    pub size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            board: None,
            q: String::new(),
            sort: SortKey::New,
            page: 1,
            size: 10,
        }
    }
}

/// One page of results plus the filtered total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Count of records passing the board+search filter, independent of
    /// `page`/`size`
    pub total: usize,
}

/// Run the full filter, search, sort, and paginate pipeline
pub fn select(posts: Vec<Post>, query: &ListQuery) -> Page<Post> {
    let mut rows: Vec<Post> = match query.board {
        Some(board) => posts.into_iter().filter(|p| p.board == board).collect(),
        None => posts,
    };

    if !query.q.is_empty() {
        let needle = query.q.to_lowercase();
        rows.retain(|p| matches(p, &needle));
    }

    // sort_by is stable: posts tied on the active key keep their stored
    // relative order.
    match query.sort {
        SortKey::New => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::View => rows.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Like => rows.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }

    let total = rows.len();
    let start = query.page.saturating_sub(1) * query.size;
    let data = if start >= total {
        // Out-of-range pages are empty, never an error
        Vec::new()
    } else {
        rows.into_iter().skip(start).take(query.size).collect()
    };

    Page { data, total }
}

/// Case-insensitive substring match over title, content, and tags
fn matches(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
        || post.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPost;
    use chrono::{Duration, Utc};

    fn post(board: Board, title: &str, content: &str, tags: &[&str]) -> Post {
        Post::new(NewPost {
            board,
            title: title.to_string(),
            author: "tester".to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            event_start: None,
            event_end: None,
        })
    }

    fn sample_posts() -> Vec<Post> {
        let base = Utc::now();
        let mut posts = vec![
            post(Board::Notice, "Maintenance window", "Servers down", &["ops"]),
            post(Board::Community, "Rust tips", "Borrow checker notes", &["rust"]),
            post(Board::Community, "Weekend plans", "Anyone hiking?", &["outdoors"]),
            post(Board::Event, "Spring sale", "20% off subscriptions", &["sale"]),
        ];
        // Deterministic creation order: index 0 is oldest
        for (i, p) in posts.iter_mut().enumerate() {
            p.created_at = base + Duration::seconds(i as i64);
            p.updated_at = p.created_at;
        }
        posts
    }

    #[test]
    fn test_board_filter_keeps_only_matching_records() {
        let page = select(
            sample_posts(),
            &ListQuery {
                board: Some(Board::Community),
                ..ListQuery::default()
            },
        );

        assert_eq!(page.total, 2);
        assert!(page.data.iter().all(|p| p.board == Board::Community));
    }

    #[test]
    fn test_no_board_filter_matches_all() {
        let page = select(sample_posts(), &ListQuery::default());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let posts = sample_posts();

        // Title hit
        let page = select(
            posts.clone(),
            &ListQuery {
                q: "RUST".to_string(),
                ..ListQuery::default()
            },
        );
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].title, "Rust tips");

        // Content hit
        let page = select(
            posts.clone(),
            &ListQuery {
                q: "hiking".to_string(),
                ..ListQuery::default()
            },
        );
        assert_eq!(page.total, 1);

        // Tag substring hit
        let page = select(
            posts,
            &ListQuery {
                q: "door".to_string(),
                ..ListQuery::default()
            },
        );
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].title, "Weekend plans");
    }

    #[test]
    fn test_empty_query_string_does_not_filter() {
        let page = select(
            sample_posts(),
            &ListQuery {
                q: String::new(),
                ..ListQuery::default()
            },
        );
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_sort_new_is_created_at_descending() {
        let page = select(sample_posts(), &ListQuery::default());
        let times: Vec<_> = page.data.iter().map(|p| p.created_at).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_sort_by_views_descending() {
        let mut posts = sample_posts();
        posts[0].views = 5;
        posts[1].views = 20;
        posts[2].views = 1;
        posts[3].views = 9;

        let page = select(
            posts,
            &ListQuery {
                sort: SortKey::View,
                ..ListQuery::default()
            },
        );
        let views: Vec<_> = page.data.iter().map(|p| p.views).collect();
        assert_eq!(views, vec![20, 9, 5, 1]);
    }

    #[test]
    fn test_sort_ties_preserve_stored_order() {
        let mut posts = sample_posts();
        for p in posts.iter_mut() {
            p.likes = 3;
        }
        let titles_before: Vec<_> = posts.iter().map(|p| p.title.clone()).collect();

        let page = select(
            posts,
            &ListQuery {
                sort: SortKey::Like,
                ..ListQuery::default()
            },
        );
        let titles_after: Vec<_> = page.data.iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles_after, titles_before);
    }

    #[test]
    fn test_total_is_independent_of_pagination() {
        let posts = sample_posts();
        for page_no in 1..=5 {
            let page = select(
                posts.clone(),
                &ListQuery {
                    page: page_no,
                    size: 2,
                    ..ListQuery::default()
                },
            );
            assert_eq!(page.total, 4);
        }
    }

    #[test]
    fn test_concatenated_pages_reconstruct_full_sequence() {
        let posts = sample_posts();
        let full = select(posts.clone(), &ListQuery::default());

        let mut collected = Vec::new();
        let mut page_no = 1;
        loop {
            let page = select(
                posts.clone(),
                &ListQuery {
                    page: page_no,
                    size: 3,
                    ..ListQuery::default()
                },
            );
            if page.data.is_empty() {
                break;
            }
            collected.extend(page.data);
            page_no += 1;
        }

        assert_eq!(collected, full.data);
    }

    #[test]
    fn test_out_of_range_page_is_empty_with_same_total() {
        let page = select(
            sample_posts(),
            &ListQuery {
                page: 99,
                size: 10,
                ..ListQuery::default()
            },
        );
        assert!(page.data.is_empty());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_community_view_sort_scenario() {
        // Three COMMUNITY posts with views [5, 20, 1]; page 1 of size 2
        // sorted by views returns the top two, total 3.
        let mut posts = vec![
            post(Board::Community, "a", "", &[]),
            post(Board::Community, "b", "", &[]),
            post(Board::Community, "c", "", &[]),
        ];
        posts[0].views = 5;
        posts[1].views = 20;
        posts[2].views = 1;

        let page = select(
            posts,
            &ListQuery {
                board: Some(Board::Community),
                sort: SortKey::View,
                page: 1,
                size: 2,
                ..ListQuery::default()
            },
        );

        assert_eq!(page.total, 3);
        let views: Vec<_> = page.data.iter().map(|p| p.views).collect();
        assert_eq!(views, vec![20, 5]);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in [SortKey::New, SortKey::View, SortKey::Like] {
            let parsed: SortKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
        assert!("hot".parse::<SortKey>().is_err());
    }
}
