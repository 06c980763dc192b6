//! # Key-Value Stores
//!
//! Named string slots that survive between sessions, the storefront's
//! equivalent of a browser's local storage.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KeyValueStore                                        │
//! │                                                                         │
//! │  ┌──────────────────────────┐    ┌──────────────────────────────────┐  │
//! │  │  MemoryStore             │    │  FileStore                       │  │
//! │  │                          │    │                                  │  │
//! │  │  HashMap<String, String> │    │  <data_dir>/<key>.json           │  │
//! │  │  Lives as long as the    │    │  Written to .<key>.json.tmp      │  │
//! │  │  process (tests, --ephe- │    │  then renamed over the slot,     │  │
//! │  │  meral sessions)         │    │  so a slot is never half-written │  │
//! │  └──────────────────────────┘    └──────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// A durable map from slot names to serialized values.
///
/// The trait is object safe so a cell can hold any backend behind a
/// `Box<dyn KeyValueStore + Send>`.
pub trait KeyValueStore {
    /// Returns the raw value under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Empties the slot. Removing an empty slot is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Checks that `key` can name a slot on every backend.
///
/// Allowed: ASCII letters, digits, `-` and `_`.
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-process store. Contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.slots.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// One JSON file per slot inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates, if needed) the data directory.
    ///
    /// ## Example
    /// ```rust,no_run
    /// use storefront_storage::{FileStore, KeyValueStore};
    ///
    /// let mut store = FileStore::open("./data")?;
    /// store.set("shopping-cart", "[]")?;
    /// # Ok::<(), storefront_storage::StorageError>(())
    /// ```
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!(dir = %dir.display(), "file store opened");
        Ok(FileStore { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    pub fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        let tmp = self.temp_path(key);

        fs::write(&tmp, value).map_err(|e| StorageError::io(key, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(key, e));
        }

        debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("shopping-cart").is_ok());
        assert!(validate_key("cart_v2").is_ok());

        for bad in ["", "../cart", "a/b", "cart.json", "has space"] {
            assert!(
                matches!(validate_key(bad), Err(StorageError::InvalidKey(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("nested")).unwrap();

        assert_eq!(store.get("shopping-cart").unwrap(), None);

        store.set("shopping-cart", r#"[{"id":1,"quantity":3}]"#).unwrap();
        store.set("shopping-cart", r#"[{"id":1,"quantity":4}]"#).unwrap();

        let reopened = FileStore::open(dir.path().join("nested")).unwrap();
        assert_eq!(
            reopened.get("shopping-cart").unwrap().as_deref(),
            Some(r#"[{"id":1,"quantity":4}]"#)
        );
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("cart", "[]").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["cart.json".to_string()]);
    }

    #[test]
    fn test_failed_replace_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        // A directory where the slot file should go makes the rename fail.
        fs::create_dir(dir.path().join("cart.json")).unwrap();
        fs::write(dir.path().join("cart.json").join("keep"), "x").unwrap();

        let err = store.set("cart", "[]").unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(!dir.path().join(".cart.json.tmp").exists());
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        store.remove("cart").unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
