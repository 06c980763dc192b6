//! # Storefront App Library
//!
//! Composition root of the storefront: configuration, the shopping-cart
//! provider, commands, views and the command line.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── Command-line definition
//! ├── provider.rs     ◄─── ShoppingCartProvider + Scope accessor
//! ├── view.rs         ◄─── Navbar, pages, cart panel
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store + ShoppingCartContext
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart queries and mutations
//! │   ├── store.rs    ◄─── Navigation and store listing
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod provider;
pub mod state;
pub mod view;

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Serialize;
use storefront_core::{Catalog, Money, Route};
use storefront_storage::{BoxedStore, FileStore, MemoryStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use error::ApiError;
use provider::ShoppingCartProvider;
use state::{ConfigState, ShoppingCartContext};

/// Runs one command line invocation and returns what to print.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults → STOREFRONT_* env → --flags                             │
/// │                                                                         │
/// │  2. Open Storage ─────────────────────────────────────────────────────► │
/// │     • --ephemeral: MemoryStore                                          │
/// │     • otherwise FileStore in the data directory                         │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Mount ShoppingCartProvider ───────────────────────────────────────► │
/// │     • rehydrate cart from its slot (corrupt → empty)                    │
/// │                                                                         │
/// │  5. Execute Command in the provider's scope ──────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<String, ApiError> {
    let config = cli.apply_to(ConfigState::from_env());

    let store = open_store(&config, cli.ephemeral)?;
    let catalog = config.load_catalog()?;
    let provider = ShoppingCartProvider::mount(store, &config);

    execute(&provider, &catalog, &cli.command, cli.json)
}

/// Executes `command` against a mounted provider.
pub fn execute(
    provider: &ShoppingCartProvider,
    catalog: &Catalog,
    command: &Command,
    json: bool,
) -> Result<String, ApiError> {
    let scope = provider.scope();
    let cart = scope.use_shopping_cart()?;
    let config = provider.config();

    let response = match command {
        Command::Page { path } => {
            let screen = commands::store::navigate(provider, catalog, path)?;
            return output(&screen, json, || view::render_text(&screen, config));
        }
        Command::Cart { path } => {
            let route = Route::resolve(path)?;
            let response = commands::cart::open_cart(cart, catalog);
            return output(&response, json, || {
                view::render_text(&provider.render(route, catalog), config)
            });
        }
        Command::Close { path } => {
            let route = Route::resolve(path)?;
            let response = commands::cart::close_cart(cart, catalog);
            return output(&response, json, || {
                view::render_text(&provider.render(route, catalog), config)
            });
        }
        Command::Quantity { id } => {
            let quantity = commands::cart::get_item_quantity(cart, *id);
            return output(&quantity, json, || quantity.to_string());
        }
        Command::Items => {
            let response = commands::cart::get_cart(cart, catalog);
            return output(&response, json, || {
                let mut out = String::new();
                for item in &response.items {
                    out.push_str(&format!("{} x{}\n", item.id, item.quantity));
                }
                out.push_str(&format!(
                    "total {}",
                    config.format_currency(Money::from_cents(response.total_cents))
                ));
                out
            });
        }
        Command::Config => {
            let config = commands::config::get_config(provider);
            return output(&config, true, String::new);
        }
        Command::Increase { id } => commands::cart::increase_cart_quantity(cart, catalog, *id)?,
        Command::Decrease { id } => commands::cart::decrease_cart_quantity(cart, catalog, *id)?,
        Command::Remove { id } => commands::cart::remove_from_cart(cart, catalog, *id)?,
    };

    if json {
        return output(&response, json, String::new);
    }

    // Show the mutation the way a shopper would see it: store page with the
    // cart open.
    cart.open_cart();
    Ok(view::render_text(&provider.render(Route::Store, catalog), config))
}

fn output<T: Serialize>(
    value: &T,
    json: bool,
    text: impl FnOnce() -> String,
) -> Result<String, ApiError> {
    if json {
        serde_json::to_string_pretty(value).map_err(|e| ApiError::internal(e.to_string()))
    } else {
        Ok(text())
    }
}

fn open_store(config: &ConfigState, ephemeral: bool) -> Result<BoxedStore, ApiError> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }

    let dir = data_dir(config)?;
    info!(dir = %dir.display(), "using data directory");
    Ok(Box::new(FileStore::open(dir)?))
}

/// Determines the directory the cart slot is kept in.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.storefront.storefront/`
/// - **Windows**: `%APPDATA%\storefront\storefront\data\`
/// - **Linux**: `~/.local/share/storefront/`
fn data_dir(config: &ConfigState) -> Result<PathBuf, ApiError> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "storefront", "storefront")
        .ok_or_else(|| ApiError::config("Could not determine app data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_app=trace` - Trace the app crate only
/// - Default: WARN, INFO for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,storefront_app=info,storefront_storage=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
