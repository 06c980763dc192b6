//! # API Error Type
//!
//! Unified error type for commands, the provider accessor and the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  storefront page /checkout                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── StorageError::Io("...") ──────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Domain Error? ──── CoreError::UnknownRoute ───── ApiError ────► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Outside provider? ─ ApiError::missing_provider() ─────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: [NotFound] No page at path: /checkout                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not on this list: an item id missing from the cart. Cart mutations define
//! a result for every id.

use serde::Serialize;
use storefront_core::CoreError;
use storefront_storage::StorageError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No page at path: /checkout"
/// }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource (page, store item) not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Persisted slot could not be written
    StorageError,

    /// Cart accessor used outside the provider's scope.
    ///
    /// An integration bug: a consumer was wired up without the provider.
    MissingProvider,

    /// Configuration could not be resolved
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ConfigError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// The error `use_shopping_cart` fails with outside the provider.
    pub fn missing_provider() -> Self {
        ApiError::new(
            ErrorCode::MissingProvider,
            "use_shopping_cart must be called inside a ShoppingCartProvider scope",
        )
    }
}

/// Converts storage errors to API errors.
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(key) => {
                ApiError::config(format!("Invalid cart storage key: '{key}'"))
            }
            StorageError::CreateDir { path, source } => {
                tracing::error!(path = %path.display(), error = %source, "data directory unavailable");
                ApiError::config(format!("Cannot use data directory {}", path.display()))
            }
            err @ (StorageError::Io { .. } | StorageError::Serialize { .. }) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "cart slot write failed");
                ApiError::new(ErrorCode::StorageError, "Cart could not be saved")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Store item", &id.to_string()),
            CoreError::UnknownRoute(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::InvalidCatalog(reason) => {
                ApiError::config(format!("Invalid catalog: {reason}"))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_value(ApiError::missing_provider()).unwrap();
        assert_eq!(json["code"], "MISSING_PROVIDER");
        assert!(json["message"].as_str().unwrap().contains("ShoppingCartProvider"));
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::UnknownRoute("/cart".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NotFound] No page at path: /cart");

        let err: ApiError = CoreError::ItemNotFound(8).into();
        assert_eq!(err.message, "Store item not found: 8");
    }

    #[test]
    fn test_from_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = StorageError::io("shopping-cart", io).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.message, "Cart could not be saved");

        let err: ApiError = StorageError::InvalidKey("a/b".to_string()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
