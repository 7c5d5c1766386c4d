//! Roblox client for the users, avatar and thumbnails APIs.
//!
//! This module provides the main client interface. One submodule per API.

mod avatar;
mod thumbnails;
mod users;

use crate::config::RobloxClientConfig;
use crate::error::RobloxResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::RobloxConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Roblox client using the reqwest HTTP backend.
pub type DefaultRobloxClient = RobloxClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Roblox web APIs.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultRobloxClient` for production code.
pub struct RobloxClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: RobloxConfig,
}

impl DefaultRobloxClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if a base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &RobloxClientConfig) -> RobloxResult<Self> {
        let internal_config = RobloxConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> RobloxResult<Self> {
        Self::new(&RobloxClientConfig::default())
    }
}

impl<B: HttpBackend> RobloxClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: RobloxConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn test_config() -> RobloxConfig {
        RobloxConfig::default()
    }

    pub fn fake_user_json(id: u64, name: &str) -> serde_json::Value {
        json!({
            "requestedUsername": name,
            "hasVerifiedBadge": false,
            "id": id,
            "name": name,
            "displayName": name
        })
    }

    pub fn fake_outfit_json(id: u64, name: &str, is_editable: bool) -> serde_json::Value {
        json!({"id": id, "name": name, "isEditable": is_editable, "outfitType": "Avatar"})
    }

    pub fn fake_thumbnail_json(target_id: u64, state: &str) -> serde_json::Value {
        let image_url = (state == "Completed")
            .then(|| format!("https://tr.rbxcdn.com/{target_id}/420/420/Avatar/Png"));
        json!({"targetId": target_id, "state": state, "imageUrl": image_url, "version": "TN3"})
    }

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultRobloxClient::default_client().is_ok());
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let config = RobloxClientConfig::new().with_users_base_url("not a url");
        assert!(DefaultRobloxClient::new(&config).is_err());
    }
}
