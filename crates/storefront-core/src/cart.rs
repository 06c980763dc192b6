//! # Cart
//!
//! The authoritative list of cart line items and the four operations that
//! mutate it.
//!
//! ## Line-Item Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation        id absent              id present                     │
//! │  ─────────        ─────────              ──────────                     │
//! │  increase(id) ──► push {id, 1}           quantity += 1                  │
//! │  decrease(id) ──► no-op                  qty == 1 → remove              │
//! │                                          qty  > 1 → quantity -= 1       │
//! │  remove(id)   ──► no-op                  remove line item               │
//! │  quantity_of  ──► 0                      quantity                       │
//! │                                                                         │
//! │  INVARIANTS: at most one line item per id, quantity >= 1               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a store item.
pub type ItemId = u32;

/// One product's id paired with how many units are in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub id: ItemId,
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line item holding a single unit.
    pub const fn single(id: ItemId) -> Self {
        CartItem { id, quantity: 1 }
    }
}

/// The shopping cart's line items, in insertion order.
///
/// Serializes as a bare JSON array of `{id, quantity}` records, which is
/// exactly the layout of the persisted cart slot.
///
/// ## Invariants
/// - Items are unique by `id` (increasing an id already present bumps it)
/// - Quantity is always >= 1 (a decrease from 1 removes the item)
/// - There is no stored total; [`Cart::total_quantity`] sums on every call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the quantity held for `id`, or 0 when it is not in the cart.
    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Adds one unit of `id`, appending a new line item if needed.
    ///
    /// Returns the resulting quantity.
    pub fn increase(&mut self, id: ItemId) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }

        self.items.push(CartItem::single(id));
        1
    }

    /// Takes one unit of `id` away.
    ///
    /// ## Behavior
    /// - Quantity 1: the line item is removed
    /// - Quantity > 1: decremented
    /// - Not in cart: nothing happens
    ///
    /// Returns the resulting quantity (0 when absent afterwards).
    pub fn decrease(&mut self, id: ItemId) -> u32 {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return 0;
        };

        if self.items[pos].quantity <= 1 {
            self.items.remove(pos);
            return 0;
        }

        self.items[pos].quantity -= 1;
        self.items[pos].quantity
    }

    /// Drops the line item for `id` whatever its quantity.
    ///
    /// Returns `true` if a line item was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Returns the number of distinct items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<CartItem>> for Cart {
    /// Wraps a raw item list without checking it.
    ///
    /// Use [`crate::validation::validate_line_items`] first when the list
    /// comes from outside (e.g. a persisted slot).
    fn from(items: Vec<CartItem>) -> Self {
        Cart { items }
    }
}
