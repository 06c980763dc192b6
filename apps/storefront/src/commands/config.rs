//! # Config Commands
//!
//! Read access to the application configuration.

use tracing::debug;

use crate::provider::ShoppingCartProvider;
use crate::state::ConfigState;

/// Gets the current application configuration.
///
/// ## When Used
/// - Rendering the navbar (store name)
/// - Currency formatting
pub fn get_config(provider: &ShoppingCartProvider) -> ConfigState {
    debug!("get_config command");
    provider.config().clone()
}
