//! Backend selection
//!
//! One uniform contract over the board operations with two
//! implementations: the embedded local store and a remote HTTP API.
//! Which one serves a process is decided once, at construction, from
//! the configuration. Callers hold a `Box<dyn Backend>` and never
//! branch on the mode themselves.

pub mod local;
pub mod remote;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::error::BoardResult;
use crate::models::{Faq, Inquiry, NewInquiry, NewPost, Post, PostPatch};
use crate::query::{ListQuery, Page};

pub use local::LocalBackend;
pub use remote::RemoteBackend;

/// The board operation contract
///
/// Both implementations return the same shapes and fail with the same
/// error taxonomy, so callers are oblivious to which one is active.
/// Independent calls may complete in any order; callers must not
/// assume results arrive in call order.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Filtered, sorted, paginated post listing
    async fn list_posts(&self, query: &ListQuery) -> BoardResult<Page<Post>>;

    /// Fetch one post by id
    ///
    /// A successful lookup counts a view (see [`crate::store::Store::get_post`]).
    async fn get_post(&self, id: Uuid) -> BoardResult<Option<Post>>;

    /// Create a post from a payload; the backend assigns id, counters,
    /// and timestamps
    async fn create_post(&self, payload: NewPost) -> BoardResult<Post>;

    /// Partial update; fails with `NotFound` for an unknown id
    async fn update_post(&self, id: Uuid, patch: PostPatch) -> BoardResult<Post>;

    /// Increment the like counter by one; fails with `NotFound` for an
    /// unknown id
    async fn like_post(&self, id: Uuid) -> BoardResult<Post>;

    /// The full FAQ collection
    async fn list_faqs(&self) -> BoardResult<Vec<Faq>>;

    /// Record a new inquiry
    async fn create_inquiry(&self, payload: NewInquiry) -> BoardResult<Inquiry>;
}

/// Build the backend selected by the configuration
///
/// Local mode opens (and seeds) the embedded store; remote mode builds
/// the HTTP client. The choice happens here and nowhere else.
pub fn from_config(config: &Config) -> Result<Box<dyn Backend>> {
    if config.remote_enabled {
        let Some(url) = &config.api_url else {
            bail!("remote_enabled is set but api_url is not configured");
        };
        info!("using remote backend at {}", url);
        Ok(Box::new(RemoteBackend::new(url.as_str())?))
    } else {
        info!("using local store at {}", config.data_dir.display());
        Ok(Box::new(LocalBackend::open(config)?))
    }
}
