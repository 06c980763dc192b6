//! # Views
//!
//! What a screen shows: the navbar, the page for the current route and, when
//! open, the cart panel on top of it. Views read the cart through
//! [`ShoppingCartContext`] only.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront | [Home] Store About                          Cart (3)      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                 ┌─────────────────────┐ │
//! │  Page (Home / Store / About)                    │  Cart panel         │ │
//! │                                                 │  Book     x2 $21.98 │ │
//! │                                                 │  Banana   x1  $1.05 │ │
//! │                                                 │  Total       $23.03 │ │
//! │                                                 └─────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write;

use serde::Serialize;
use storefront_core::{Cart, Catalog, Money, Route, StoreItem};

use crate::commands::store::list_store_items;
use crate::state::{ConfigState, ShoppingCartContext};

/// Everything visible for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub navbar: Navbar,
    pub page: Page,
    /// Present only while the cart is open
    pub cart_panel: Option<CartPanel>,
}

/// Links to every route plus the cart badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    pub store_name: String,
    pub links: Vec<NavLink>,
    /// Badge count; the cart button is hidden when this is 0
    pub cart_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub route: Route,
    pub active: bool,
}

/// Page body for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Page {
    Home { store_name: String },
    Store { listings: Vec<StoreListing> },
    About,
}

/// A store item card: the item and how many are already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListing {
    pub item: StoreItem,
    pub quantity: u32,
}

/// The open cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPanel {
    pub lines: Vec<CartLine>,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item: StoreItem,
    pub quantity: u32,
    pub line_total: Money,
}

impl Navbar {
    pub fn build(cart: &dyn ShoppingCartContext, active: Route, config: &ConfigState) -> Self {
        Navbar {
            store_name: config.store_name.clone(),
            links: Route::ALL
                .into_iter()
                .map(|route| NavLink {
                    route,
                    active: route == active,
                })
                .collect(),
            cart_quantity: cart.cart_quantity(),
        }
    }
}

impl Page {
    pub fn build(
        route: Route,
        cart: &dyn ShoppingCartContext,
        catalog: &Catalog,
        config: &ConfigState,
    ) -> Self {
        match route {
            Route::Home => Page::Home {
                store_name: config.store_name.clone(),
            },
            Route::Store => Page::Store {
                listings: list_store_items(cart, catalog),
            },
            Route::About => Page::About,
        }
    }
}

impl CartPanel {
    /// Joins the cart's line items with the catalog.
    ///
    /// Line items with no catalog entry are not listed and add nothing to the
    /// total, but they still count toward the navbar badge.
    pub fn build(cart: &dyn ShoppingCartContext, catalog: &Catalog) -> Self {
        let items = Cart::from(cart.cart_items());

        let lines = items
            .items()
            .iter()
            .filter_map(|line| {
                catalog.get(line.id).map(|item| CartLine {
                    item: item.clone(),
                    quantity: line.quantity,
                    line_total: item.price().multiply_quantity(line.quantity),
                })
            })
            .collect();

        CartPanel {
            lines,
            total: catalog.cart_total(&items),
        }
    }
}

/// Renders a screen as plain text.
pub fn render_text(screen: &Screen, config: &ConfigState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_screen(&mut out, screen, config);
    out
}

fn write_screen(out: &mut String, screen: &Screen, config: &ConfigState) -> std::fmt::Result {
    let navbar = &screen.navbar;
    write!(out, "{} |", navbar.store_name)?;
    for link in &navbar.links {
        if link.active {
            write!(out, " [{}]", link.route.title())?;
        } else {
            write!(out, " {}", link.route.title())?;
        }
    }
    if navbar.cart_quantity > 0 {
        write!(out, " | Cart ({})", navbar.cart_quantity)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(40))?;

    match &screen.page {
        Page::Home { store_name } => {
            writeln!(out, "# Home")?;
            writeln!(out, "Welcome to {store_name}.")?;
        }
        Page::Store { listings } => {
            writeln!(out, "# Store")?;
            for listing in listings {
                let action = if listing.quantity == 0 {
                    "+ Add To Cart".to_string()
                } else {
                    format!("{} in cart", listing.quantity)
                };
                writeln!(
                    out,
                    "  #{:<3} {:<12} {:>12}  {}",
                    listing.item.id,
                    listing.item.name,
                    config.format_currency(listing.item.price()),
                    action
                )?;
            }
        }
        Page::About => {
            writeln!(out, "# About")?;
        }
    }

    if let Some(panel) = &screen.cart_panel {
        writeln!(out)?;
        writeln!(out, "== Cart ==")?;
        if panel.lines.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for line in &panel.lines {
            writeln!(
                out,
                "  {:<12} x{:<4} {:>12}",
                line.item.name,
                line.quantity,
                config.format_currency(line.line_total)
            )?;
        }
        writeln!(out, "  Total {:>24}", config.format_currency(panel.total))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CartState, ShoppingCart};
    use storefront_storage::MemoryStore;

    fn cart_state() -> CartState {
        CartState::new(ShoppingCart::load(Box::new(MemoryStore::new()), "cart"))
    }

    #[test]
    fn test_store_page_lists_quantities() {
        let cart = cart_state();
        let catalog = Catalog::builtin().unwrap();
        cart.increase_cart_quantity(2).unwrap();

        let Page::Store { listings } =
            Page::build(Route::Store, &cart, &catalog, &ConfigState::default())
        else {
            panic!("expected store page");
        };

        assert_eq!(listings.len(), catalog.items().len());
        let quantities: Vec<(u32, u32)> =
            listings.iter().map(|l| (l.item.id, l.quantity)).collect();
        assert_eq!(quantities, vec![(1, 0), (2, 1), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_cart_panel_skips_unknown_items() {
        let cart = cart_state();
        let catalog = Catalog::builtin().unwrap();
        cart.increase_cart_quantity(3).unwrap();
        cart.increase_cart_quantity(3).unwrap();
        cart.increase_cart_quantity(42).unwrap();

        let panel = CartPanel::build(&cart, &catalog);

        assert_eq!(panel.lines.len(), 1);
        assert_eq!(panel.lines[0].item.name, "Banana");
        assert_eq!(panel.lines[0].line_total.cents(), 210);
        assert_eq!(panel.total.cents(), 210);
        assert_eq!(cart.cart_quantity(), 3);
    }

    #[test]
    fn test_navbar_marks_active_route() {
        let cart = cart_state();
        let navbar = Navbar::build(&cart, Route::About, &ConfigState::default());

        let active: Vec<Route> = navbar
            .links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.route)
            .collect();
        assert_eq!(active, vec![Route::About]);
        assert_eq!(navbar.cart_quantity, 0);
    }

    #[test]
    fn test_render_text_hides_empty_badge() {
        let cart = cart_state();
        let config = ConfigState::default();
        let catalog = Catalog::builtin().unwrap();
        let screen = Screen {
            navbar: Navbar::build(&cart, Route::Home, &config),
            page: Page::build(Route::Home, &cart, &catalog, &config),
            cart_panel: None,
        };

        let text = render_text(&screen, &config);
        assert!(text.starts_with("Storefront | [Home] Store About\n"));
        assert!(text.contains("Welcome to Storefront."));
        assert!(!text.contains("Cart ("));
    }

    #[test]
    fn test_render_text_with_panel() {
        let cart = cart_state();
        let config = ConfigState::default();
        let catalog = Catalog::builtin().unwrap();
        cart.increase_cart_quantity(1).unwrap();
        cart.increase_cart_quantity(1).unwrap();

        let screen = Screen {
            navbar: Navbar::build(&cart, Route::Store, &config),
            page: Page::build(Route::Store, &cart, &catalog, &config),
            cart_panel: Some(CartPanel::build(&cart, &catalog)),
        };

        let text = render_text(&screen, &config);
        assert!(text.contains("| Cart (2)"));
        assert!(text.contains("2 in cart"));
        assert!(text.contains("== Cart =="));
        assert!(text.contains("$21.98"));
    }
}
