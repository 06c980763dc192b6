//! # Storage Error Types
//!
//! Error types for durable slot operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds the slot key as context             │
//! │       │                                                                 │
//! │       ├──► on READ:  logged, cell falls back to its default            │
//! │       │                                                                 │
//! │       └──► on WRITE: returned to the caller                            │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            ApiError (in app) ← What the CLI prints                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Key contains characters that cannot name a slot.
    ///
    /// ## When This Occurs
    /// - Empty key
    /// - Key with path separators, dots or whitespace
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// The data directory could not be created.
    #[error("Cannot create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a slot failed.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// A value could not be serialized for storage.
    #[error("Cannot serialize value for slot '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Wraps an I/O error with the slot key it happened on.
    pub fn io(key: impl Into<String>, source: io::Error) -> Self {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
