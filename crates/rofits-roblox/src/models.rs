//! Internal API request/response types for the Roblox web APIs.
//!
//! These types are internal to `rofits-roblox` and are not exposed to
//! consumers. External consumers use the port DTOs defined in `rofits-core`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{RobloxClientConfig, ThumbnailFormat};
use crate::error::RobloxResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration with parsed base URLs.
#[derive(Debug, Clone)]
pub struct RobloxConfig {
    pub users_base_url: Url,
    pub avatar_base_url: Url,
    pub thumbnails_base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub thumbnail_size: String,
    pub thumbnail_format: ThumbnailFormat,
}

impl RobloxConfig {
    /// Validate and convert the public configuration.
    pub fn from_public(config: &RobloxClientConfig) -> RobloxResult<Self> {
        Ok(Self {
            users_base_url: Url::parse(&config.users_base_url)?,
            avatar_base_url: Url::parse(&config.avatar_base_url)?,
            thumbnails_base_url: Url::parse(&config.thumbnails_base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            thumbnail_size: config.thumbnail_size.clone(),
            thumbnail_format: config.thumbnail_format,
        })
    }
}

impl Default for RobloxConfig {
    fn default() -> Self {
        Self::from_public(&RobloxClientConfig::default())
            .expect("default Roblox API URLs are valid")
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// The `{ "data": [...] }` envelope shared by all three endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

// ============================================================================
// Users API
// ============================================================================

/// Body of `POST /v1/usernames/users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameLookupRequest<'a> {
    pub usernames: Vec<&'a str>,
    pub exclude_banned_users: bool,
}

impl<'a> UsernameLookupRequest<'a> {
    /// Look up a single username, skipping banned accounts.
    pub fn single(username: &'a str) -> Self {
        Self {
            usernames: vec![username],
            exclude_banned_users: true,
        }
    }
}

/// A user matched by the username lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

// ============================================================================
// Avatar API
// ============================================================================

/// Entry of `GET /v1/users/{id}/outfits`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOutfit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_editable: bool,
}

// ============================================================================
// Thumbnails API
// ============================================================================

/// Entry of `GET /v1/users/outfits`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiThumbnail {
    pub target_id: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
