//! Unified collection store
//!
//! The `Store` owns the persistence port and is the single writer for
//! all three collections. Every operation runs one load-modify-store
//! cycle: read the whole collection, compute on the owned snapshot,
//! write the full replacement back if anything changed. There is no
//! separate read-only fast path.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open(&config)?;  // seeds on first run
//!
//! let page = store.list_posts(&ListQuery::default())?;
//! let post = store.get_post(id)?;        // counts a view
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{BoardError, BoardResult};
use crate::models::{Faq, Inquiry, NewInquiry, NewPost, Post, PostPatch};
use crate::query::{self, ListQuery, Page};
use crate::seed;
use crate::storage::{FileStore, Persistence, StorageError, StorageResult};

/// Blob name for the posts collection
pub(crate) const POSTS: &str = "posts.json";
/// Blob name for the FAQ collection
pub(crate) const FAQS: &str = "faqs.json";
/// Blob name for the inquiries collection
pub(crate) const INQUIRIES: &str = "inquiries.json";

/// Typed store over the three board collections
///
/// Constructed once and passed by reference; there is no ambient
/// singleton. Mutating operations take `&mut self` so exclusive access
/// is enforced by the type system; concurrent callers go through the
/// mutex in [`crate::backend::LocalBackend`].
pub struct Store {
    persistence: Box<dyn Persistence>,
}

impl Store {
    /// Open the store on the configured data directory, seeding
    /// default content on first run
    pub fn open(config: &Config) -> BoardResult<Self> {
        debug!("opening store at {}", config.data_dir.display());
        let mut store = Self::with_persistence(Box::new(FileStore::new(&config.data_dir)));
        store.ensure_seeded()?;
        Ok(store)
    }

    /// Build a store over an explicit persistence implementation
    ///
    /// Does not seed; callers that want default content call
    /// [`Store::ensure_seeded`] themselves.
    pub fn with_persistence(persistence: Box<dyn Persistence>) -> Self {
        Self { persistence }
    }

    /// Seed any collection whose blob has never been written
    ///
    /// An existing blob is left untouched even when it holds an empty
    /// array, so the check-then-write is idempotent: after the first
    /// successful call, later calls change nothing.
    pub fn ensure_seeded(&mut self) -> StorageResult<()> {
        if self.persistence.read(POSTS)?.is_none() {
            let posts = seed::default_posts(Utc::now());
            self.write_collection(POSTS, &posts)?;
            info!("seeded posts collection with {} default posts", posts.len());
        }
        if self.persistence.read(FAQS)?.is_none() {
            let faqs = seed::default_faqs();
            self.write_collection(FAQS, &faqs)?;
            info!("seeded FAQ collection with {} entries", faqs.len());
        }
        if self.persistence.read(INQUIRIES)?.is_none() {
            // Inquiries start out empty; the blob still has to exist so
            // later runs can tell "seeded" from "never written".
            self.write_collection::<Inquiry>(INQUIRIES, &[])?;
            info!("initialized empty inquiry collection");
        }
        Ok(())
    }

    // ==================== Collection IO ====================

    /// Load the full posts collection (empty if never written)
    pub fn load_posts(&self) -> StorageResult<Vec<Post>> {
        self.read_collection(POSTS)
    }

    /// Replace the posts collection wholesale
    pub fn save_posts(&mut self, posts: &[Post]) -> StorageResult<()> {
        self.write_collection(POSTS, posts)
    }

    /// Load the full FAQ collection
    pub fn load_faqs(&self) -> StorageResult<Vec<Faq>> {
        self.read_collection(FAQS)
    }

    /// Replace the FAQ collection wholesale
    pub fn save_faqs(&mut self, faqs: &[Faq]) -> StorageResult<()> {
        self.write_collection(FAQS, faqs)
    }

    /// Load the full inquiry collection
    pub fn load_inquiries(&self) -> StorageResult<Vec<Inquiry>> {
        self.read_collection(INQUIRIES)
    }

    /// Replace the inquiry collection wholesale
    pub fn save_inquiries(&mut self, inquiries: &[Inquiry]) -> StorageResult<()> {
        self.write_collection(INQUIRIES, inquiries)
    }

    fn read_collection<T: DeserializeOwned>(&self, name: &str) -> StorageResult<Vec<T>> {
        match self.persistence.read(name)? {
            // Absent blob reads as an empty collection; seeding is the
            // only place that distinguishes the two.
            None => Ok(Vec::new()),
            Some(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt {
                    name: name.to_string(),
                    details: e.to_string(),
                })
            }
        }
    }

    fn write_collection<T: Serialize>(&self, name: &str, records: &[T]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(records).map_err(|e| StorageError::Encode {
            name: name.to_string(),
            source: e,
        })?;
        self.persistence.write(name, &bytes)
    }

    // ==================== Post Operations ====================

    /// List posts: board filter, search, sort, paginate
    pub fn list_posts(&self, query: &ListQuery) -> BoardResult<Page<Post>> {
        let posts = self.load_posts()?;
        Ok(query::select(posts, query))
    }

    /// Look up a post by id, counting a view
    ///
    /// Every successful lookup increments `views` by one and persists
    /// the collection before returning. This side effect is deliberate
    /// and part of the contract. `updated_at` is not touched.
    pub fn get_post(&mut self, id: Uuid) -> BoardResult<Option<Post>> {
        let mut posts = self.load_posts()?;
        let snapshot = match posts.iter_mut().find(|p| p.id == id) {
            Some(found) => {
                found.views += 1;
                found.clone()
            }
            None => return Ok(None),
        };
        self.save_posts(&posts)?;
        Ok(Some(snapshot))
    }

    /// Create a post and prepend it to the collection
    ///
    /// The stored order is most-recent-first, independent of any sort a
    /// later listing applies.
    pub fn create_post(&mut self, payload: NewPost) -> BoardResult<Post> {
        let mut posts = self.load_posts()?;
        let post = Post::new(payload);
        posts.insert(0, post.clone());
        self.save_posts(&posts)?;
        debug!("created post {}", post.id);
        Ok(post)
    }

    /// Shallow-merge a patch onto an existing post
    ///
    /// Fields absent from the patch are preserved; `updated_at` is set
    /// to now. Fails with `NotFound` if no post matches.
    pub fn update_post(&mut self, id: Uuid, patch: PostPatch) -> BoardResult<Post> {
        let mut posts = self.load_posts()?;
        let found = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BoardError::NotFound(id))?;
        found.apply_patch(patch);
        let snapshot = found.clone();
        self.save_posts(&posts)?;
        Ok(snapshot)
    }

    /// Increment a post's like counter by exactly one
    pub fn like_post(&mut self, id: Uuid) -> BoardResult<Post> {
        let mut posts = self.load_posts()?;
        let found = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BoardError::NotFound(id))?;
        found.likes += 1;
        let snapshot = found.clone();
        self.save_posts(&posts)?;
        Ok(snapshot)
    }

    // ==================== FAQ / Inquiry Operations ====================

    /// The full FAQ collection, insertion order
    pub fn list_faqs(&self) -> BoardResult<Vec<Faq>> {
        Ok(self.load_faqs()?)
    }

    /// Record an inquiry and prepend it to the collection
    pub fn create_inquiry(&mut self, payload: NewInquiry) -> BoardResult<Inquiry> {
        let mut inquiries = self.load_inquiries()?;
        let inquiry = Inquiry::new(payload);
        inquiries.insert(0, inquiry.clone());
        self.save_inquiries(&inquiries)?;
        debug!("recorded inquiry {}", inquiry.id);
        Ok(inquiry)
    }

    // ==================== Stats ====================

    pub fn post_count(&self) -> BoardResult<usize> {
        Ok(self.load_posts()?.len())
    }

    pub fn faq_count(&self) -> BoardResult<usize> {
        Ok(self.load_faqs()?.len())
    }

    pub fn inquiry_count(&self) -> BoardResult<usize> {
        Ok(self.load_inquiries()?.len())
    }
}
