//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Invariant / input validation failures          │
//! │                                                                         │
//! │  storefront-storage errors (separate crate)                            │
//! │  └── StorageError     - Durable slot read/write failures               │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What commands and the CLI report               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: an id missing from the cart is never an error.
//! Decrease and remove are no-ops for absent ids, increase creates them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A store item id has no catalog entry.
    #[error("Store item not found: {0}")]
    ItemNotFound(u32),

    /// A path does not map to any page.
    #[error("No page at path: {0}")]
    UnknownRoute(String),

    /// The catalog document could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Validation errors.
///
/// Raised when a catalog or a rehydrated cart breaks one of its invariants.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., two line items with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
