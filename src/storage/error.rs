//! Storage-specific error types
//!
//! Errors are only surfaced by the key-value backend; the file backend logs
//! its failures and degrades to "operation did not take effect".

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents an I/O error on the backing files
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Stored content is not valid JSON for the expected shape
    #[error("Error while decoding stored data: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Stored value for '{0}' is not valid UTF-8")]
    Utf8Error(String),

    /// The data directory cannot be determined or used
    #[error("Invalid storage path: {0}")]
    PathError(String),
}
