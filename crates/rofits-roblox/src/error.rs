//! Error types for Roblox API operations.
//!
//! These errors are internal to `rofits-roblox` and are mapped to core port
//! errors at the boundary. Only client construction surfaces them directly.

use thiserror::Error;

/// Result type alias for Roblox API operations.
pub type RobloxResult<T> = Result<T, RobloxError>;

/// Errors related to Roblox API operations.
#[derive(Debug, Error)]
pub enum RobloxError {
    /// API request failed with an HTTP error status.
    #[error("Roblox API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
