//! Core error types.

use thiserror::Error;

/// Error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An action key did not match any built-in action.
    #[error("Unknown action key: {0}")]
    UnknownActionKey(String),

    /// A reversal reason did not match any known reason.
    #[error("Unknown reversal reason: {0}")]
    UnknownReversalReason(String),

    /// A sort direction was neither "asc" nor "desc".
    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
