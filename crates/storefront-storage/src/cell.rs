//! # Persisted Cell
//!
//! A typed value bound to one named slot of a [`KeyValueStore`]. Reads come
//! from memory; every update is written back before it returns.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PersistedCell<T>                                     │
//! │                                                                         │
//! │  load(store, key, default)                                             │
//! │     │                                                                   │
//! │     ├── slot empty ───────────────────────► default()                  │
//! │     ├── slot unreadable (I/O) ── warn ────► default()                  │
//! │     ├── JSON doesn't parse ───── warn ────► default()                  │
//! │     ├── parses, rejected ─────── warn ────► default()                  │
//! │     └── parses, accepted ─────────────────► stored value               │
//! │                                                                         │
//! │  get()      → &T (memory only)                                         │
//! │  update(f)  → f(&mut T), then serialize + store.set(key) synchronously │
//! │  set(v)     → update(|t| *t = v)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::store::KeyValueStore;

/// Boxed store a cell writes through to.
pub type BoxedStore = Box<dyn KeyValueStore + Send>;

/// A value of type `T` mirrored into a single storage slot.
pub struct PersistedCell<T> {
    key: String,
    value: T,
    store: BoxedStore,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Reads the slot under `key`, falling back to `default()` when the slot
    /// is empty, unreadable or unparsable. Never fails.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_storage::{MemoryStore, PersistedCell};
    ///
    /// let cell: PersistedCell<Vec<u32>> =
    ///     PersistedCell::load(Box::new(MemoryStore::new()), "ids", Vec::new);
    /// assert!(cell.get().is_empty());
    /// ```
    pub fn load(store: BoxedStore, key: impl Into<String>, default: impl FnOnce() -> T) -> Self {
        Self::load_validated(store, key, default, |_| Ok::<(), std::convert::Infallible>(()))
    }

    /// Like [`PersistedCell::load`], but a parsed value must also pass
    /// `validate`; a rejected value is treated the same as a corrupt one.
    pub fn load_validated<E, V>(
        store: BoxedStore,
        key: impl Into<String>,
        default: impl FnOnce() -> T,
        validate: V,
    ) -> Self
    where
        E: fmt::Display,
        V: FnOnce(&T) -> Result<(), E>,
    {
        let key = key.into();
        let value = match read_slot(store.as_ref(), &key, validate) {
            Some(value) => {
                debug!(key = %key, "slot rehydrated");
                value
            }
            None => default(),
        };

        PersistedCell { key, value, store }
    }

    /// Current value (memory only, no storage access).
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Slot this cell is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Applies `f` to the value, then writes the whole value to the slot.
    ///
    /// The in-memory value keeps the change even if the write fails; the
    /// error tells the caller the slot is now behind.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> StorageResult<R> {
        let result = f(&mut self.value);
        self.flush()?;
        Ok(result)
    }

    /// Replaces the value and writes it.
    pub fn set(&mut self, value: T) -> StorageResult<()> {
        self.update(|current| *current = value)
    }

    /// Writes the current value to the slot.
    pub fn flush(&mut self) -> StorageResult<()> {
        let json = serde_json::to_string(&self.value).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, &json)
    }

    /// Gives back the underlying store, dropping the in-memory value.
    pub fn into_store(self) -> BoxedStore {
        self.store
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedCell")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Reads and decodes one slot, logging why it was unusable.
fn read_slot<T, E, V>(store: &(dyn KeyValueStore + Send), key: &str, validate: V) -> Option<T>
where
    T: DeserializeOwned,
    E: fmt::Display,
    V: FnOnce(&T) -> Result<(), E>,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "slot unreadable, using default");
            return None;
        }
    };

    let value: T = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "slot corrupt, using default");
            return None;
        }
    };

    if let Err(e) = validate(&value) {
        warn!(key, error = %e, "slot rejected, using default");
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        theme: String,
        visits: u32,
    }

    fn store_with(key: &str, raw: &str) -> BoxedStore {
        let mut store = MemoryStore::new();
        store.set(key, raw).unwrap();
        Box::new(store)
    }

    #[test]
    fn test_empty_slot_uses_default() {
        let cell = PersistedCell::load(Box::new(MemoryStore::new()), "prefs", || Prefs {
            theme: "light".to_string(),
            visits: 0,
        });

        assert_eq!(cell.get().theme, "light");
    }

    #[test]
    fn test_corrupt_slot_uses_default() {
        let cell: PersistedCell<Vec<u32>> =
            PersistedCell::load(store_with("ids", "{{not json"), "ids", || vec![7]);
        assert_eq!(cell.get(), &vec![7]);

        let cell: PersistedCell<Vec<u32>> =
            PersistedCell::load(store_with("ids", r#"{"wrong":"shape"}"#), "ids", Vec::new);
        assert!(cell.get().is_empty());
    }

    #[test]
    fn test_rejected_value_uses_default() {
        let cell: PersistedCell<Vec<u32>> = PersistedCell::load_validated(
            store_with("ids", "[1,2,3]"),
            "ids",
            Vec::new,
            |ids: &Vec<u32>| if ids.len() > 2 { Err("too many") } else { Ok(()) },
        );

        assert!(cell.get().is_empty());
    }

    #[test]
    fn test_update_writes_through() {
        let mut cell = PersistedCell::load(Box::new(MemoryStore::new()), "prefs", || Prefs {
            theme: "light".to_string(),
            visits: 0,
        });

        let visits = cell
            .update(|p| {
                p.visits += 1;
                p.visits
            })
            .unwrap();
        assert_eq!(visits, 1);

        let store = cell.into_store();
        assert_eq!(
            store.get("prefs").unwrap().as_deref(),
            Some(r#"{"theme":"light","visits":1}"#)
        );
    }

    #[test]
    fn test_reload_sees_last_write() {
        let mut cell: PersistedCell<Vec<u32>> =
            PersistedCell::load(Box::new(MemoryStore::new()), "ids", Vec::new);
        cell.set(vec![4, 5]).unwrap();
        cell.update(|ids| ids.push(6)).unwrap();

        let reloaded: PersistedCell<Vec<u32>> =
            PersistedCell::load(cell.into_store(), "ids", Vec::new);
        assert_eq!(reloaded.get(), &vec![4, 5, 6]);
    }

    #[test]
    fn test_invalid_key_surfaces_on_write() {
        let mut cell: PersistedCell<u32> =
            PersistedCell::load(Box::new(MemoryStore::new()), "bad key", || 0);

        let err = cell.set(1).unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        assert_eq!(*cell.get(), 1);
    }
}
