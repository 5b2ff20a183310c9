//! Error types for storage operations.

use thiserror::Error;

/// Errors that can occur against the durable store.
///
/// Callers in the state containers treat every variant the same way: log
/// and carry on. A failed write never rolls back the in-memory mutation
/// that triggered it, and a failed read is treated as "no stored data".
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium failed at the I/O level.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend rejected the operation or is in a broken state.
    #[error("storage backend error: {0}")]
    Backend(String),
}
