//! Named-blob persistence
//!
//! The persistence port is a minimal key/value byte store: collections
//! are read and written as whole named blobs. Absence of a blob is
//! distinct from an empty blob, which is what seeding keys on.
//!
//! Two implementations:
//! - [`FileStore`]: one file per blob under the data directory, written
//!   atomically (write to temp file, then rename) so a blob is never
//!   left half-written.
//! - [`MemoryStore`]: an in-memory map, for tests and ephemeral use.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::error::{StorageError, StorageResult};

/// Key/value byte-store contract for named collection blobs
pub trait Persistence: Send + Sync {
    /// Read a named blob, `None` if it has never been written
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Write a named blob, replacing any previous contents
    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()>;
}

/// Filesystem-backed persistence, one file per blob
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given data directory
    ///
    /// The directory itself is created lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn blob_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

impl Persistence for FileStore {
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.blob_path(name);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(StorageError::PermissionDenied { path, source: e })
            }
            Err(e) => Err(StorageError::ReadError { path, source: e }),
        }
    }

    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        atomic_write(&self.blob_path(name), bytes)
    }
}

/// In-memory persistence backed by a shared map
///
/// Clones share the same underlying map, which lets a test keep a
/// handle to the blobs a store is writing through.
#[derive(Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned lock only means another thread panicked mid-write;
        // the map itself is still usable.
        self.blobs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Persistence for MemoryStore {
    fn read(&self, name: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.lock().get(name).cloned())
    }

    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<()> {
        self.lock().insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// The target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_absent_blob_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.read("posts.json").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.write("posts.json", b"[1,2,3]").unwrap();
        assert_eq!(store.read("posts.json").unwrap().unwrap(), b"[1,2,3]");

        // Overwrite replaces the whole blob
        store.write("posts.json", b"[]").unwrap();
        assert_eq!(store.read("posts.json").unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_empty_blob_is_not_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.write("inquiries.json", b"[]").unwrap();
        assert_eq!(store.read("inquiries.json").unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_write_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStore::new(&nested);

        store.write("faqs.json", b"[]").unwrap();
        assert!(nested.join("faqs.json").exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.write("posts.json", b"[]").unwrap();
        assert!(!temp_dir.path().join("posts.tmp").exists());
    }

    #[test]
    fn test_memory_store_blobs_are_independent() {
        let store = MemoryStore::new();

        store.write("posts.json", b"a").unwrap();
        store.write("faqs.json", b"b").unwrap();

        assert_eq!(store.read("posts.json").unwrap().unwrap(), b"a");
        assert_eq!(store.read("faqs.json").unwrap().unwrap(), b"b");
        assert!(store.read("inquiries.json").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_clones_share_blobs() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.write("posts.json", b"shared").unwrap();
        assert_eq!(handle.read("posts.json").unwrap().unwrap(), b"shared");
    }
}
