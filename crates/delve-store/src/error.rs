//! Error types for the save store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while writing or clearing a save.
///
/// Reads deliberately never error: a missing or corrupt record reads as
/// "no prior save".
#[derive(Debug, Error)]
pub enum StoreError {
    /// An underlying filesystem operation failed.
    #[error("save file i/o: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded as JSON.
    #[error("save file encoding: {0}")]
    Encode(#[from] serde_json::Error),
}
