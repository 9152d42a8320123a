//! Storage layer
//!
//! The persistence port and its implementations. Collections are stored
//! as whole named blobs; the typed load/save cycle lives in
//! [`crate::store`].

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{FileStore, MemoryStore, Persistence};
