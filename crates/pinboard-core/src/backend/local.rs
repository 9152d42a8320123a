//! Local backend over the embedded store

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::Backend;
use crate::config::Config;
use crate::error::BoardResult;
use crate::models::{Faq, Inquiry, NewInquiry, NewPost, Post, PostPatch};
use crate::query::{ListQuery, Page};
use crate::store::Store;

/// Embedded-store implementation of [`Backend`]
///
/// The mutex serializes whole operations: each one runs its full
/// load-modify-store cycle under the lock, and no method holds the
/// lock across an await point. Overlapping mutations can therefore
/// never interleave, which is what keeps the view/like counters exact
/// under concurrent callers.
pub struct LocalBackend {
    store: Mutex<Store>,
}

impl LocalBackend {
    /// Open the store on the configured data directory, seeding
    /// default content on first run
    pub fn open(config: &Config) -> BoardResult<Self> {
        Ok(Self::new(Store::open(config)?))
    }

    /// Wrap an existing store (e.g. one built over custom persistence)
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // Poisoning only records that a panic happened while locked;
        // the collections live in persistence, not in the guard.
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Backend for LocalBackend {
    async fn list_posts(&self, query: &ListQuery) -> BoardResult<Page<Post>> {
        self.lock().list_posts(query)
    }

    async fn get_post(&self, id: Uuid) -> BoardResult<Option<Post>> {
        self.lock().get_post(id)
    }

    async fn create_post(&self, payload: NewPost) -> BoardResult<Post> {
        self.lock().create_post(payload)
    }

    async fn update_post(&self, id: Uuid, patch: PostPatch) -> BoardResult<Post> {
        self.lock().update_post(id, patch)
    }

    async fn like_post(&self, id: Uuid) -> BoardResult<Post> {
        self.lock().like_post(id)
    }

    async fn list_faqs(&self) -> BoardResult<Vec<Faq>> {
        self.lock().list_faqs()
    }

    async fn create_inquiry(&self, payload: NewInquiry) -> BoardResult<Inquiry> {
        self.lock().create_inquiry(payload)
    }
}
