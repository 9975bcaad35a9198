//! API error types.
//!
//! Every failure below the model layer surfaces through [`ApiError`]. Models
//! never catch or reinterpret these; they propagate to the caller verbatim.

use thiserror::Error;

/// Error type for API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported an application-level failure.
    #[error("API error {code}: {message}")]
    Api {
        /// Status code from the response envelope.
        code: i64,
        /// Human-readable message from the service.
        message: String,
    },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Unexpected response from the service.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] affilia_core::CoreError),
}
