//! # storefront-storage: Persisted State for the Storefront
//!
//! Durable single-slot storage that survives between sessions, and the typed
//! cell the cart is kept in.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  increase_cart_quantity(id)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                storefront-storage (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────┐        ┌──────────────────────────┐ │   │
//! │  │   │  PersistedCell<T>    │───────►│  KeyValueStore           │ │   │
//! │  │   │  (cell.rs)           │  set   │  (store.rs)              │ │   │
//! │  │   │  typed value + key   │◄───────│  MemoryStore / FileStore │ │   │
//! │  │   └──────────────────────┘  get   └──────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   ~/.local/share/storefront/shopping-cart.json                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The `KeyValueStore` trait and its backends
//! - [`cell`] - `PersistedCell`, a typed value bound to one slot
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use storefront_storage::{MemoryStore, PersistedCell};
//!
//! let mut cell: PersistedCell<Vec<u32>> =
//!     PersistedCell::load(Box::new(MemoryStore::new()), "recent", Vec::new);
//! cell.update(|ids| ids.push(3))?;
//!
//! // Simulate a reload: a new cell over the same store sees the write.
//! let reloaded: PersistedCell<Vec<u32>> =
//!     PersistedCell::load(cell.into_store(), "recent", Vec::new);
//! assert_eq!(reloaded.get(), &vec![3]);
//! # Ok::<(), storefront_storage::StorageError>(())
//! ```

pub mod cell;
pub mod error;
pub mod store;

pub use cell::{BoxedStore, PersistedCell};
pub use error::{StorageError, StorageResult};
pub use store::{FileStore, KeyValueStore, MemoryStore};
