//! # Shopping Cart Provider
//!
//! The composition root of the cart: it builds the one [`ShoppingCart`] of a
//! running app and hands it to descendants through a [`Scope`], so no
//! consumer has to have the cart passed down to it by hand.
//!
//! ## Provider / Consumer Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Provider Pattern                                     │
//! │                                                                         │
//! │  ShoppingCartProvider::mount(store, &config)                           │
//! │     │  rehydrates ShoppingCart from config.cart_key                    │
//! │     │                                                                   │
//! │     ├──► provider.scope() ──► Scope { cart: Some(&CartState) }         │
//! │     │                             │                                     │
//! │     │                             ▼                                     │
//! │     │                  scope.use_shopping_cart() ──► Ok(&CartState)    │
//! │     │                                                                   │
//! │     └──► provider.render(route, &catalog)                              │
//! │              Screen { navbar, page, cart_panel (if open) }             │
//! │                                                                         │
//! │  Scope::root() ──► Scope { cart: None }                                │
//! │                        │                                                │
//! │                        ▼                                                │
//! │             scope.use_shopping_cart() ──► Err(MISSING_PROVIDER)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{Catalog, Route};
use storefront_storage::BoxedStore;
use tracing::info;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, ShoppingCart, ShoppingCartContext};
use crate::view::{CartPanel, Navbar, Page, Screen};

/// Owns the app's single cart for as long as the app runs.
#[derive(Debug)]
pub struct ShoppingCartProvider {
    cart: CartState,
    config: ConfigState,
}

impl ShoppingCartProvider {
    /// Mounts the provider: rehydrates the cart from `store` under the
    /// configured key. A missing or corrupt slot gives an empty cart.
    pub fn mount(store: BoxedStore, config: &ConfigState) -> Self {
        let cart = ShoppingCart::load(store, &config.cart_key);
        info!(
            key = %config.cart_key,
            items = cart.cart().item_count(),
            quantity = cart.cart_quantity(),
            "shopping cart mounted"
        );

        ShoppingCartProvider {
            cart: CartState::new(cart),
            config: config.clone(),
        }
    }

    /// The scope descendants of this provider run in.
    pub fn scope(&self) -> Scope<'_> {
        Scope {
            cart: Some(&self.cart),
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Renders `route` with the navbar, and the cart panel beside it when
    /// the cart is open, whatever page is showing.
    pub fn render(&self, route: Route, catalog: &Catalog) -> Screen {
        let cart: &dyn ShoppingCartContext = &self.cart;

        Screen {
            navbar: Navbar::build(cart, route, &self.config),
            page: Page::build(route, cart, catalog, &self.config),
            cart_panel: self
                .cart
                .is_open()
                .then(|| CartPanel::build(cart, catalog)),
        }
    }
}

/// Where a consumer runs: inside a provider, or not.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    cart: Option<&'a CartState>,
}

impl<'a> Scope<'a> {
    /// A scope outside any provider.
    pub fn root() -> Self {
        Scope { cart: None }
    }

    /// The cart of the enclosing provider.
    ///
    /// Fails with [`crate::error::ErrorCode::MissingProvider`] outside a
    /// provider. That is a wiring bug, not something to recover from at
    /// runtime.
    pub fn use_shopping_cart(&self) -> Result<&'a CartState, ApiError> {
        self.cart.ok_or_else(ApiError::missing_provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_storage::{KeyValueStore, MemoryStore};

    fn provider_with_slot(raw: Option<&str>) -> ShoppingCartProvider {
        let config = ConfigState::default();
        let mut store = MemoryStore::new();
        if let Some(raw) = raw {
            store.set(&config.cart_key, raw).unwrap();
        }
        ShoppingCartProvider::mount(Box::new(store), &config)
    }

    #[test]
    fn test_accessor_outside_provider_fails() {
        let err = Scope::root().use_shopping_cart().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingProvider);
    }

    #[test]
    fn test_scopes_share_the_one_cart() {
        let provider = provider_with_slot(None);
        let page_scope = provider.scope();
        let panel_scope = provider.scope();

        page_scope
            .use_shopping_cart()
            .unwrap()
            .increase_cart_quantity(1)
            .unwrap();

        let panel_cart = panel_scope.use_shopping_cart().unwrap();
        assert_eq!(panel_cart.get_item_quantity(1), 1);
        assert_eq!(panel_cart.cart_quantity(), 1);
    }

    #[test]
    fn test_mount_rehydrates_slot() {
        let provider = provider_with_slot(Some(r#"[{"id":2,"quantity":4}]"#));
        let cart = provider.scope().use_shopping_cart().unwrap();
        assert_eq!(cart.get_item_quantity(2), 4);
    }

    #[test]
    fn test_mount_over_corrupt_slot_is_empty() {
        let provider = provider_with_slot(Some("[[[["));
        let cart = provider.scope().use_shopping_cart().unwrap();
        assert!(cart.cart_items().is_empty());
    }

    #[test]
    fn test_render_shows_panel_only_when_open() {
        let provider = provider_with_slot(Some(r#"[{"id":1,"quantity":1}]"#));
        let catalog = Catalog::builtin().unwrap();
        let cart = provider.scope().use_shopping_cart().unwrap();

        assert!(provider.render(Route::About, &catalog).cart_panel.is_none());

        cart.open_cart();
        for route in Route::ALL {
            let screen = provider.render(route, &catalog);
            let panel = screen.cart_panel.expect("panel renders on every page");
            assert_eq!(panel.total.cents(), 1099);
        }

        cart.close_cart();
        assert!(provider.render(Route::Store, &catalog).cart_panel.is_none());
    }
}
