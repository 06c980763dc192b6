//! # Cart State
//!
//! The shopping-cart store: line items kept in a persisted cell, the derived
//! quantity, and the transient open/closed flag of the cart panel.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Event                 Store Operation             Slot Write        │
//! │  ────────                 ───────────────             ──────────        │
//! │                                                                         │
//! │  Click "+ Add to Cart" ──► increase_cart_quantity ──► full list         │
//! │                                                                         │
//! │  Click "-" ──────────────► decrease_cart_quantity ──► full list         │
//! │                                                                         │
//! │  Click "×" ──────────────► remove_from_cart ────────► full list         │
//! │                                                                         │
//! │  Click cart button ──────► open_cart / close_cart ──► (none)            │
//! │                                                                         │
//! │  Render badge ───────────► cart_quantity ───────────► (none, summed)    │
//! │                                                                         │
//! │  NOTE: The lock is held until the slot write returns, so mutations     │
//! │        never interleave.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_core::validation::validate_line_items;
use storefront_core::{Cart, CartItem, ItemId};
use storefront_storage::{BoxedStore, PersistedCell, StorageResult};
use tracing::debug;

/// The eight cart members pages and views are written against.
///
/// Views take `&dyn ShoppingCartContext` and see nothing else. Commands get
/// the concrete [`CartState`] from the provider's scope, which adds
/// `is_open` (reported in command responses) and the `with_cart` /
/// `with_cart_mut` accessors.
pub trait ShoppingCartContext {
    /// Quantity of `id` in the cart, 0 when absent.
    fn get_item_quantity(&self, id: ItemId) -> u32;

    /// Adds one unit of `id`, creating its line item if needed.
    fn increase_cart_quantity(&self, id: ItemId) -> StorageResult<()>;

    /// Takes one unit of `id` away; the last unit removes the line item.
    /// No-op for ids not in the cart.
    fn decrease_cart_quantity(&self, id: ItemId) -> StorageResult<()>;

    /// Drops the line item for `id`. No-op for ids not in the cart.
    fn remove_from_cart(&self, id: ItemId) -> StorageResult<()>;

    /// Shows the cart panel.
    fn open_cart(&self);

    /// Hides the cart panel.
    fn close_cart(&self);

    /// Snapshot of the line items in insertion order.
    fn cart_items(&self) -> Vec<CartItem>;

    /// Sum of every line item's quantity.
    fn cart_quantity(&self) -> u32;
}

/// The cart store: persisted line items plus the panel flag.
///
/// ## Invariants
/// - Items are unique by id, quantity >= 1 (kept by [`Cart`])
/// - The slot holds the full list as of the last mutation
/// - `is_open` is never persisted and starts `false`
#[derive(Debug)]
pub struct ShoppingCart {
    items: PersistedCell<Cart>,
    is_open: bool,
}

impl ShoppingCart {
    /// Rehydrates the cart from the slot `key` of `store`.
    ///
    /// An empty, unparsable or invariant-breaking slot yields an empty cart.
    pub fn load(store: BoxedStore, key: &str) -> Self {
        let items = PersistedCell::load_validated(store, key, Cart::new, |cart: &Cart| {
            validate_line_items(cart.items())
        });

        ShoppingCart {
            items,
            is_open: false,
        }
    }

    /// Current line items.
    pub fn cart(&self) -> &Cart {
        self.items.get()
    }

    pub fn get_item_quantity(&self, id: ItemId) -> u32 {
        self.cart().quantity_of(id)
    }

    /// Returns the resulting quantity of `id`.
    pub fn increase_cart_quantity(&mut self, id: ItemId) -> StorageResult<u32> {
        let quantity = self.items.update(|cart| cart.increase(id))?;
        debug!(id, quantity, "cart quantity increased");
        Ok(quantity)
    }

    /// Returns the resulting quantity of `id` (0 once removed or if absent).
    pub fn decrease_cart_quantity(&mut self, id: ItemId) -> StorageResult<u32> {
        let quantity = self.items.update(|cart| cart.decrease(id))?;
        debug!(id, quantity, "cart quantity decreased");
        Ok(quantity)
    }

    /// Returns whether a line item was removed.
    pub fn remove_from_cart(&mut self, id: ItemId) -> StorageResult<bool> {
        let removed = self.items.update(|cart| cart.remove(id))?;
        debug!(id, removed, "removed from cart");
        Ok(removed)
    }

    pub fn cart_quantity(&self) -> u32 {
        self.cart().total_quantity()
    }

    pub fn open_cart(&mut self) {
        self.is_open = true;
    }

    pub fn close_cart(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Releases the backing store, e.g. to mount a fresh cart over it.
    pub fn into_store(self) -> BoxedStore {
        self.items.into_store()
    }
}

/// Shared handle to the one [`ShoppingCart`] of a running app.
///
/// Cloning the handle never clones the cart; every clone reaches the same
/// store through `Arc<Mutex<_>>`.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<ShoppingCart>>,
}

impl CartState {
    pub fn new(cart: ShoppingCart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.cart().item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShoppingCart) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShoppingCart) -> R,
    {
        f(&mut self.lock())
    }

    /// Whether the cart panel is showing.
    pub fn is_open(&self) -> bool {
        self.with_cart(ShoppingCart::is_open)
    }

    // A panic inside a mutation happens before or after a single list edit,
    // never in the middle of one, so a poisoned cart is still consistent.
    fn lock(&self) -> MutexGuard<'_, ShoppingCart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ShoppingCartContext for CartState {
    fn get_item_quantity(&self, id: ItemId) -> u32 {
        self.with_cart(|c| c.get_item_quantity(id))
    }

    fn increase_cart_quantity(&self, id: ItemId) -> StorageResult<()> {
        self.with_cart_mut(|c| c.increase_cart_quantity(id).map(drop))
    }

    fn decrease_cart_quantity(&self, id: ItemId) -> StorageResult<()> {
        self.with_cart_mut(|c| c.decrease_cart_quantity(id).map(drop))
    }

    fn remove_from_cart(&self, id: ItemId) -> StorageResult<()> {
        self.with_cart_mut(|c| c.remove_from_cart(id).map(drop))
    }

    fn open_cart(&self) {
        self.with_cart_mut(ShoppingCart::open_cart);
    }

    fn close_cart(&self) {
        self.with_cart_mut(ShoppingCart::close_cart);
    }

    fn cart_items(&self) -> Vec<CartItem> {
        self.with_cart(|c| c.cart().items().to_vec())
    }

    fn cart_quantity(&self) -> u32 {
        self.with_cart(ShoppingCart::cart_quantity)
    }
}
