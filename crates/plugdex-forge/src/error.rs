//! Internal error types for forge operations.
//!
//! These errors are mapped to core port errors at the boundary (see `port.rs`).

use thiserror::Error;

/// Result type alias for forge operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Errors related to forge API operations.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// API request failed with an HTTP error status.
    #[error("Could not load [{url}]: status {status}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Response body was not valid JSON, or not the shape we expected.
    #[error("JSON parsing error [{url}] (status {status}): {source}")]
    JsonParse {
        status: u16,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// API answered with a well-formed body that carries no usable data.
    #[error("Invalid response from forge API (status {status}): {message}")]
    InvalidResponse { status: u16, message: String },

    /// The forge reported no such user or repository.
    #[error("Repository '{id}' not found")]
    RepositoryNotFound { id: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
