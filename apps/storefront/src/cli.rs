//! # Command Line
//!
//! Each invocation is one page load: mount the provider, run one command,
//! print, exit. The cart carries over between invocations through its slot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_core::ItemId;

use crate::state::ConfigState;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront pages and shopping cart")]
pub struct Cli {
    /// Directory holding the persisted cart (default: platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Storage slot the cart lives under
    #[arg(long)]
    pub cart_key: Option<String>,

    /// Keep the cart in memory for this run only
    #[arg(long)]
    pub ephemeral: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render a page: /, /store or /about
    Page {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Open the cart panel over a page
    Cart {
        #[arg(long, default_value = "/store")]
        path: String,
    },
    /// Hide the cart panel and show the page under it
    Close {
        #[arg(long, default_value = "/store")]
        path: String,
    },
    /// Add one unit of a store item
    Increase { id: ItemId },
    /// Take one unit of an item out of the cart
    Decrease { id: ItemId },
    /// Remove an item from the cart entirely
    Remove { id: ItemId },
    /// Print how many of an item are in the cart
    Quantity { id: ItemId },
    /// List the cart lines and total
    Items,
    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply_to(&self, mut config: ConfigState) -> ConfigState {
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(key) = &self.cart_key {
            config.cart_key = key.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mutation() {
        let cli = Cli::parse_from(["storefront", "--data-dir", "/tmp/x", "increase", "3"]);
        assert_eq!(cli.command, Command::Increase { id: 3 });
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_page_defaults_to_home() {
        let cli = Cli::parse_from(["storefront", "page"]);
        assert_eq!(cli.command, Command::Page { path: "/".to_string() });
    }

    #[test]
    fn test_parse_close() {
        let cli = Cli::parse_from(["storefront", "close", "--path", "/about"]);
        assert_eq!(
            cli.command,
            Command::Close {
                path: "/about".to_string()
            }
        );
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["storefront", "--cart-key", "cart-b", "config"]);
        let config = cli.apply_to(ConfigState::default());
        assert_eq!(config.cart_key, "cart-b");
        assert_eq!(config.data_dir, None);
    }
}
