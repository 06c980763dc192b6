//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-dir`, `--cart-key`)
//! 2. Environment variables (`STOREFRONT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup, so no mutex.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use storefront_core::{Catalog, Money, DEFAULT_CART_KEY};

use crate::error::ApiError;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the navbar and on the home page
    pub store_name: String,

    /// Storage slot the cart is persisted under
    pub cart_key: String,

    /// Directory holding persisted slots.
    /// `None` means the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Catalog document to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            data_dir: None,
            catalog_path: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CART_KEY`: Override the cart's storage slot
    /// - `STOREFRONT_DATA_DIR`: Override the data directory
    /// - `STOREFRONT_CATALOG_PATH`: Load the catalog from this file
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ConfigState::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(cart_key) = lookup("STOREFRONT_CART_KEY") {
            config.cart_key = cart_key;
        }

        if let Some(dir) = lookup("STOREFRONT_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Loads the catalog named by `catalog_path`, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, ApiError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::builtin()?);
        };

        let json = fs::read_to_string(path).map_err(|e| {
            ApiError::config(format!("Cannot read catalog {}: {e}", path.display()))
        })?;
        Ok(Catalog::from_json(&json)?)
    }

    /// Formats money for display using the configured currency.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_app::state::ConfigState;
    /// use storefront_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals > 0 {
            format!(
                "{sign}{}{whole}.{frac:0width$}",
                self.currency_symbol,
                width = usize::from(self.currency_decimals)
            )
        } else {
            format!("{sign}{}{whole}", self.currency_symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(105)), "$1.05");
        assert_eq!(config.format_currency(Money::from_cents(0)), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(
            config.format_currency(Money::from_cents(1_400_000)),
            "$14000.00"
        );
    }

    #[test]
    fn test_format_currency_no_decimals() {
        let config = ConfigState {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(1500)), "¥1500");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_STORE_NAME", "Corner Shop"),
            ("STOREFRONT_CART_KEY", "cart-v2"),
            ("STOREFRONT_DATA_DIR", "/tmp/shop"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.cart_key, "cart-v2");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/shop")));
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.cart_key, "shopping-cart");
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(
            &path,
            r#"[{"id": 10, "name": "Lamp", "priceCents": 2500, "imgUrl": "/imgs/lamp.jpg"}]"#,
        )
        .unwrap();

        let config = ConfigState {
            catalog_path: Some(path),
            ..ConfigState::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.get(10).unwrap().name, "Lamp");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..ConfigState::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }
}
