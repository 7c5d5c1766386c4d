//! Public configuration for the Roblox client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config (with parsed URLs) is derived from this.

use std::fmt;
use std::time::Duration;

/// Image format requested from the thumbnails API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ThumbnailFormat {
    /// Get the value expected by the `format` query parameter.
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::Png => "Png",
            Self::Jpeg => "Jpeg",
            Self::Webp => "Webp",
        }
    }
}

impl fmt::Display for ThumbnailFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_param())
    }
}

/// Configuration for the Roblox client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use rofits_roblox::RobloxClientConfig;
/// use std::time::Duration;
///
/// let config = RobloxClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct RobloxClientConfig {
    /// Base URL of the users API
    pub(crate) users_base_url: String,
    /// Base URL of the avatar API
    pub(crate) avatar_base_url: String,
    /// Base URL of the thumbnails API
    pub(crate) thumbnails_base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Thumbnail dimensions, e.g. `420x420`
    pub(crate) thumbnail_size: String,
    pub(crate) thumbnail_format: ThumbnailFormat,
}

impl Default for RobloxClientConfig {
    fn default() -> Self {
        Self {
            users_base_url: "https://users.roblox.com".to_string(),
            avatar_base_url: "https://avatar.roblox.com".to_string(),
            thumbnails_base_url: "https://thumbnails.roblox.com".to_string(),
            user_agent: concat!("rofits/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            thumbnail_size: "420x420".to_string(),
            thumbnail_format: ThumbnailFormat::Png,
        }
    }
}

impl RobloxClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the users API.
    ///
    /// Defaults to `https://users.roblox.com`.
    #[must_use]
    pub fn with_users_base_url(mut self, url: impl Into<String>) -> Self {
        self.users_base_url = url.into();
        self
    }

    /// Set the base URL of the avatar API.
    ///
    /// Defaults to `https://avatar.roblox.com`.
    #[must_use]
    pub fn with_avatar_base_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_base_url = url.into();
        self
    }

    /// Set the base URL of the thumbnails API.
    ///
    /// Defaults to `https://thumbnails.roblox.com`.
    #[must_use]
    pub fn with_thumbnails_base_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnails_base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the requested thumbnail size.
    ///
    /// Defaults to `420x420`.
    #[must_use]
    pub fn with_thumbnail_size(mut self, size: impl Into<String>) -> Self {
        self.thumbnail_size = size.into();
        self
    }

    /// Set the requested thumbnail format.
    #[must_use]
    pub const fn with_thumbnail_format(mut self, format: ThumbnailFormat) -> Self {
        self.thumbnail_format = format;
        self
    }

    pub fn users_base_url(&self) -> &str {
        &self.users_base_url
    }

    pub fn avatar_base_url(&self) -> &str {
        &self.avatar_base_url
    }

    pub fn thumbnails_base_url(&self) -> &str {
        &self.thumbnails_base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn thumbnail_size(&self) -> &str {
        &self.thumbnail_size
    }

    pub const fn thumbnail_format(&self) -> ThumbnailFormat {
        self.thumbnail_format
    }
}
