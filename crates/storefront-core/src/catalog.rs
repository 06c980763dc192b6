//! # Store Catalog
//!
//! The items listed on the store page and the price lookups the cart panel
//! uses to turn quantities into money.
//!
//! The cart itself only knows ids and quantities. Prices are joined in here,
//! at read time, so a catalog change never leaves a stale total behind.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, ItemId};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_store_items;

/// Catalog shipped with the storefront.
const BUILTIN_CATALOG: &str = include_str!("../data/items.json");

/// One product on the store page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoreItem {
    pub id: ItemId,
    pub name: String,
    pub price_cents: i64,
    pub img_url: String,
}

impl StoreItem {
    /// Unit price as [`Money`].
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// The store's items, unique by id, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<StoreItem>,
}

impl Catalog {
    /// Builds a catalog from already-constructed items, validating them.
    pub fn new(items: Vec<StoreItem>) -> CoreResult<Self> {
        validate_store_items(&items)?;
        Ok(Catalog { items })
    }

    /// Parses a catalog document (a JSON array of store items).
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<StoreItem> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Catalog::new(items)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> CoreResult<Self> {
        Catalog::from_json(BUILTIN_CATALOG)
    }

    /// Items in display order.
    pub fn items(&self) -> &[StoreItem] {
        &self.items
    }

    /// Looks up a store item by id.
    pub fn get(&self, id: ItemId) -> Option<&StoreItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Like [`Catalog::get`] but fails with [`CoreError::ItemNotFound`].
    pub fn require(&self, id: ItemId) -> CoreResult<&StoreItem> {
        self.get(id).ok_or(CoreError::ItemNotFound(id))
    }

    /// Price × quantity for one cart line; zero if the id is unknown.
    pub fn line_total(&self, id: ItemId, quantity: u32) -> Money {
        self.get(id)
            .map_or(Money::zero(), |item| item.price().multiply_quantity(quantity))
    }

    /// Sum of every line total in `cart`.
    ///
    /// Line items whose id is not in the catalog contribute nothing.
    pub fn cart_total(&self, cart: &Cart) -> Money {
        cart.items()
            .iter()
            .map(|line| self.line_total(line.id, line.quantity))
            .sum()
    }
}
