//! # Cart Commands
//!
//! What UI events invoke on the cart. Each takes the cart handle obtained
//! from [`crate::provider::Scope::use_shopping_cart`] and answers with the
//! updated cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐ increase ┌──────────┐ decrease (last unit) ┌──────────┐  │
//! │  │  Empty   │─────────►│ In Cart  │─────────────────────►│  Empty   │  │
//! │  │  Cart    │          │          │ remove               │  Cart    │  │
//! │  └──────────┘          └──────────┘─────────────────────►└──────────┘  │
//! │                          │      ▲                                       │
//! │                          └──────┘                                       │
//! │                    increase / decrease (> 1)                            │
//! │                                                                         │
//! │  Every arrow writes the full list to the cart slot before returning.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartItem, Catalog, ItemId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, ShoppingCartContext};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub cart_quantity: u32,
    pub total_cents: i64,
    pub is_open: bool,
}

impl CartResponse {
    pub fn build(cart: &CartState, catalog: &Catalog) -> Self {
        let items = cart.cart_items();
        let total_cents = catalog.cart_total(&Cart::from(items.clone())).cents();

        CartResponse {
            items,
            cart_quantity: cart.cart_quantity(),
            total_cents,
            is_open: cart.is_open(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, catalog: &Catalog) -> CartResponse {
    debug!("get_cart command");
    CartResponse::build(cart, catalog)
}

/// Gets the quantity of one store item in the cart (0 if absent).
pub fn get_item_quantity(cart: &CartState, id: ItemId) -> u32 {
    debug!(id, "get_item_quantity command");
    cart.get_item_quantity(id)
}

/// Adds one unit of a store item to the cart.
///
/// ## Behavior
/// - Not in cart: added with quantity 1
/// - In cart: quantity + 1
/// - Unknown to the catalog: rejected, so the cart only ever holds
///   purchasable items
pub fn increase_cart_quantity(
    cart: &CartState,
    catalog: &Catalog,
    id: ItemId,
) -> Result<CartResponse, ApiError> {
    debug!(id, "increase_cart_quantity command");
    catalog.require(id)?;
    cart.increase_cart_quantity(id)?;
    Ok(CartResponse::build(cart, catalog))
}

/// Takes one unit of an item out of the cart.
///
/// ## Behavior
/// - Quantity 1: the item leaves the cart
/// - Not in cart: nothing changes
pub fn decrease_cart_quantity(
    cart: &CartState,
    catalog: &Catalog,
    id: ItemId,
) -> Result<CartResponse, ApiError> {
    debug!(id, "decrease_cart_quantity command");
    cart.decrease_cart_quantity(id)?;
    Ok(CartResponse::build(cart, catalog))
}

/// Removes an item from the cart whatever its quantity.
pub fn remove_from_cart(
    cart: &CartState,
    catalog: &Catalog,
    id: ItemId,
) -> Result<CartResponse, ApiError> {
    debug!(id, "remove_from_cart command");
    cart.remove_from_cart(id)?;
    Ok(CartResponse::build(cart, catalog))
}

/// Shows the cart panel.
pub fn open_cart(cart: &CartState, catalog: &Catalog) -> CartResponse {
    debug!("open_cart command");
    cart.open_cart();
    CartResponse::build(cart, catalog)
}

/// Hides the cart panel.
pub fn close_cart(cart: &CartState, catalog: &Catalog) -> CartResponse {
    debug!("close_cart command");
    cart.close_cart();
    CartResponse::build(cart, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ShoppingCart;
    use storefront_storage::MemoryStore;

    fn setup() -> (CartState, Catalog) {
        let cart = CartState::new(ShoppingCart::load(Box::new(MemoryStore::new()), "cart"));
        (cart, Catalog::builtin().unwrap())
    }

    #[test]
    fn test_increase_returns_totals() {
        let (cart, catalog) = setup();

        increase_cart_quantity(&cart, &catalog, 1).unwrap();
        let response = increase_cart_quantity(&cart, &catalog, 3).unwrap();

        assert_eq!(
            response.items,
            vec![CartItem { id: 1, quantity: 1 }, CartItem { id: 3, quantity: 1 }]
        );
        assert_eq!(response.cart_quantity, 2);
        assert_eq!(response.total_cents, 1099 + 105);
        assert!(!response.is_open);
    }

    #[test]
    fn test_increase_unknown_item_is_rejected() {
        let (cart, catalog) = setup();

        let err = increase_cart_quantity(&cart, &catalog, 77).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart, &catalog).items.is_empty());
    }

    #[test]
    fn test_decrease_and_remove_absent_are_noops() {
        let (cart, catalog) = setup();
        increase_cart_quantity(&cart, &catalog, 2).unwrap();

        let before = get_cart(&cart, &catalog);
        assert_eq!(decrease_cart_quantity(&cart, &catalog, 9).unwrap(), before);
        assert_eq!(remove_from_cart(&cart, &catalog, 9).unwrap(), before);
    }

    #[test]
    fn test_decrease_last_unit_removes() {
        let (cart, catalog) = setup();
        increase_cart_quantity(&cart, &catalog, 4).unwrap();

        let response = decrease_cart_quantity(&cart, &catalog, 4).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(get_item_quantity(&cart, 4), 0);
    }

    #[test]
    fn test_open_close() {
        let (cart, catalog) = setup();
        assert!(open_cart(&cart, &catalog).is_open);
        assert!(!close_cart(&cart, &catalog).is_open);
    }

    #[test]
    fn test_response_json_shape() {
        let (cart, catalog) = setup();
        let response = increase_cart_quantity(&cart, &catalog, 3).unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cartQuantity"], 1);
        assert_eq!(json["totalCents"], 105);
        assert_eq!(json["items"][0]["id"], 3);
        assert_eq!(json["items"][0]["quantity"], 1);
    }
}
