//! # Validation Module
//!
//! Invariant checks for data that enters the storefront from outside:
//! a rehydrated cart slot and a catalog document.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Persisted cart slot ──► parse JSON ──► validate_line_items ──► Cart   │
//! │                              │                  │                       │
//! │                              └── fail ──────────┴──► empty cart         │
//! │                                                                         │
//! │  Catalog document   ──► parse JSON ──► validate_store_items ──► Catalog│
//! │                                                 │                       │
//! │                                                 └──► CoreError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations never need validation: [`crate::Cart`] keeps its
//! invariants by construction.

use std::collections::HashSet;

use crate::cart::CartItem;
use crate::catalog::StoreItem;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a line-item list could have been produced by the cart
/// operations: unique ids, every quantity at least 1.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_line_items;
/// use storefront_core::CartItem;
///
/// assert!(validate_line_items(&[CartItem { id: 1, quantity: 2 }]).is_ok());
/// assert!(validate_line_items(&[CartItem { id: 1, quantity: 0 }]).is_err());
/// ```
pub fn validate_line_items(items: &[CartItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if item.quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("quantity of item {}", item.id),
            });
        }
        if !seen.insert(item.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.to_string(),
            });
        }
    }

    Ok(())
}

/// Checks a catalog: unique ids, non-empty names, non-negative prices.
pub fn validate_store_items(items: &[StoreItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if item.name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: format!("name of item {}", item.id),
            });
        }
        if item.price_cents < 0 {
            return Err(ValidationError::Negative {
                field: format!("price of item {}", item.id),
            });
        }
        if !seen.insert(item.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.to_string(),
            });
        }
    }

    Ok(())
}
