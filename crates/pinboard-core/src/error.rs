//! Operation error taxonomy
//!
//! Every backend operation fails with a [`BoardError`], whichever
//! implementation is active. The remote backend maps transport and
//! non-success responses onto the per-operation variants; the local
//! store surfaces `NotFound` and storage failures directly. Failures
//! propagate synchronously to the caller; there is no retry anywhere.

use thiserror::Error;
use uuid::Uuid;

use crate::storage::StorageError;

/// The primary error type for all board operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// Update/like target does not exist
    #[error("post not found: {0}")]
    NotFound(Uuid),

    /// Listing posts failed (remote transport/response failure)
    #[error("failed to list posts: {0}")]
    ListFailed(String),

    /// Fetching a single post failed for a reason other than absence
    #[error("failed to fetch post: {0}")]
    FetchFailed(String),

    /// Creating a post failed
    #[error("failed to create post: {0}")]
    CreateFailed(String),

    /// Updating a post failed
    #[error("failed to update post: {0}")]
    UpdateFailed(String),

    /// Liking a post failed
    #[error("failed to like post: {0}")]
    LikeFailed(String),

    /// Fetching the FAQ list failed
    #[error("failed to fetch FAQs: {0}")]
    FaqFetchFailed(String),

    /// Submitting an inquiry failed
    #[error("failed to submit inquiry: {0}")]
    InquiryCreateFailed(String),

    /// Local persistence failure, including corrupt blobs
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A specialized Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
