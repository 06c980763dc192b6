//! # State Module
//!
//! Application state owned by the composition root.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   ShoppingCartProvider::mount                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                     │                          │                        │
//! │                     ▼                          ▼                        │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────┐        │
//! │  │  CartState                   │  │  ConfigState             │        │
//! │  │  Arc<Mutex<ShoppingCart>>    │  │  store name, cart key,   │        │
//! │  │  ├── PersistedCell<Cart>     │  │  data dir, currency      │        │
//! │  │  └── is_open                 │  │                          │        │
//! │  └──────────────────────────────┘  └──────────────────────────┘        │
//! │                                                                         │
//! │  • CartState: one per run, shared by handle, Mutex for exclusive edits │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartState, ShoppingCart, ShoppingCartContext};
pub use config::ConfigState;
