//! # Store Commands
//!
//! Page navigation and the store listing.

use storefront_core::{Catalog, Route};
use tracing::debug;

use crate::error::ApiError;
use crate::provider::ShoppingCartProvider;
use crate::state::ShoppingCartContext;
use crate::view::{Screen, StoreListing};

/// Lists every store item with its current cart quantity.
pub fn list_store_items(cart: &dyn ShoppingCartContext, catalog: &Catalog) -> Vec<StoreListing> {
    debug!("list_store_items command");
    catalog
        .items()
        .iter()
        .map(|item| StoreListing {
            item: item.clone(),
            quantity: cart.get_item_quantity(item.id),
        })
        .collect()
}

/// Navigates to `path` and renders the resulting screen.
///
/// ## Returns
/// - The screen for `/`, `/store` or `/about`
/// - `NOT_FOUND` for any other path
pub fn navigate(
    provider: &ShoppingCartProvider,
    catalog: &Catalog,
    path: &str,
) -> Result<Screen, ApiError> {
    debug!(path, "navigate command");
    let route = Route::resolve(path)?;
    Ok(provider.render(route, catalog))
}
