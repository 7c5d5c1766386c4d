//! Error types for Roblox port operations.

use thiserror::Error;

/// Errors from Roblox port operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these at the
/// adapter boundary. Every variant is treated as transient by the resolver.
#[derive(Debug, Error)]
pub enum RobloxPortError {
    /// The endpoint answered with a non-success status.
    #[error("{endpoint} responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Which endpoint failed (URL without query)
        endpoint: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The endpoint answered with a body we could not decode.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter was configured with unusable values.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for Roblox port operations.
pub type RobloxPortResult<T> = Result<T, RobloxPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RobloxPortError::Status {
            status: 503,
            endpoint: "https://avatar.roblox.com/v1/users/1/outfits".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("avatar.roblox.com"));

        let err = RobloxPortError::Network {
            message: "connection reset".to_string(),
        };
        assert!(err.to_string().contains("connection reset"));
    }
}
