//! # Commands Module
//!
//! Everything a UI event can ask of the storefront.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart queries and mutations
//! ├── store.rs    ◄─── Navigation and store listing
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Commands never reach for the cart themselves; the caller resolves it
//! from its scope and passes it in:
//! ```rust,ignore
//! let cart = scope.use_shopping_cart()?;
//! commands::cart::increase_cart_quantity(cart, &catalog, id)?;
//! ```

pub mod cart;
pub mod config;
pub mod store;
