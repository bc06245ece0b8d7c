//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the underlying file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON, or could not be rendered as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is valid JSON but not shaped like an address book
    #[error("Malformed address book: {0}")]
    Malformed(String),

    /// A stored contact no longer passes validation
    #[error("Invalid stored contact `{key}`: {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: ValidationError,
    },

    /// Two stored contacts share a name
    #[error("Duplicate stored contact name: {0}")]
    DuplicateName(String),

    /// An unrecognized entry is stored under a key that a contact's name would take on save
    #[error("Stored entry `{0}` collides with a contact of the same name")]
    KeyCollision(String),

    /// The destination path has no file name to write to
    #[error("Invalid storage path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Errors from misuse of address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Batched iteration needs at least one record per batch
    #[error("Batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
