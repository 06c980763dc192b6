//! # Routes
//!
//! The three navigable pages. The cart knows nothing about these; they only
//! decide which page is rendered beside the cart panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// A page of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Route {
    #[default]
    Home,
    Store,
    About,
}

impl Route {
    /// Every route, in navbar order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Store, Route::About];

    /// Path this route is served at.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Store => "/store",
            Route::About => "/about",
        }
    }

    /// Label shown in the navbar.
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Store => "Store",
            Route::About => "About",
        }
    }

    /// Maps a path to its route. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Like [`Route::from_path`] but fails with [`CoreError::UnknownRoute`].
    pub fn resolve(path: &str) -> CoreResult<Route> {
        Route::from_path(path).ok_or_else(|| CoreError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/store"), Some(Route::Store));
        assert_eq!(Route::from_path("/store/"), Some(Route::Store));
        assert_eq!(Route::from_path("/about"), Some(Route::About));
        assert_eq!(Route::from_path("/checkout"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let err = Route::resolve("/cart").unwrap_err();
        assert!(matches!(err, CoreError::UnknownRoute(p) if p == "/cart"));
    }
}
