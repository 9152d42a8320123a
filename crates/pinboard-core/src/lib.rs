//! Pinboard Core Library
//!
//! Data-access layer for a small bulletin board: three persisted
//! collections (posts, FAQs, inquiries), a filtered/sorted/paginated
//! query engine over posts, and the mutations the board needs, all
//! behind one backend contract served either by the embedded local
//! store or by a remote HTTP API.
//!
//! # Architecture
//!
//! - Collections are stored as whole named blobs through a minimal
//!   key/value persistence port.
//! - The `Store` is the single writer; every mutation is one
//!   load-modify-store cycle over an owned snapshot of a collection.
//! - `backend::from_config` picks the local or remote implementation
//!   once at startup; callers hold a `Box<dyn Backend>` and never
//!   branch on the mode.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let backend = backend::from_config(&config)?;
//!
//! let page = backend.list_posts(&ListQuery::default()).await?;
//! ```
//!
//! # Modules
//!
//! - `backend`: the operation contract and its two implementations
//! - `store`: typed collection store over the persistence port
//! - `query`: filter/search/sort/paginate pipeline for posts
//! - `models`: record types and operation payloads
//! - `storage`: persistence port (file-backed and in-memory)
//! - `config`: application configuration

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
mod seed;
pub mod storage;
pub mod store;

pub use backend::{Backend, LocalBackend, RemoteBackend};
pub use config::Config;
pub use error::{BoardError, BoardResult};
pub use models::{
    Board, Faq, Inquiry, InquiryStatus, NewInquiry, NewPost, Post, PostPatch,
};
pub use query::{ListQuery, Page, SortKey};
pub use storage::{FileStore, MemoryStore, Persistence, StorageError};
pub use store::Store;
