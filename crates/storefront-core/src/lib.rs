//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds the cart and catalog rules as pure functions with zero
//! I/O dependencies. Persistence lives in `storefront-storage`, wiring and
//! rendering in the `storefront` app.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Pages (Home / Store / About) + Cart Panel            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ use_shopping_cart()                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ShoppingCartProvider (apps/storefront)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  catalog  │  │   money   │  │ validation│  │   │
//! │  │   │   Cart    │  │ StoreItem │  │   Money   │  │   rules   │  │   │
//! │  │   │ CartItem  │  │  Catalog  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Line items and the four cart mutations
//! - [`catalog`] - Store items and cart totals
//! - [`money`] - Integer cents with display formatting
//! - [`route`] - The three navigable pages
//! - [`validation`] - Invariant checks for persisted carts and catalogs
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::Cart;
//!
//! let mut cart = Cart::new();
//! cart.increase(5);
//! cart.increase(5);
//! cart.increase(7);
//!
//! assert_eq!(cart.quantity_of(5), 2);
//! assert_eq!(cart.total_quantity(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod route;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, ItemId};
pub use catalog::{Catalog, StoreItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use route::Route;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart slot lives under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "shopping-cart";
