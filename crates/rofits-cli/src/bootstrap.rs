//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the reqwest-backed Roblox client is created here
//! and injected into the core resolver as a `RobloxApiPort`.

use std::sync::Arc;
use std::time::Duration;

use rofits_core::{OutfitResolver, PollPolicy};
use rofits_roblox::{DefaultRobloxClient, RobloxClientConfig, ThumbnailFormat};
use tracing::debug;

use crate::error::CliError;
use crate::parser::{Cli, ImageFormat};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// HTTP client settings.
    pub client: RobloxClientConfig,
    /// Thumbnail polling bounds.
    pub poll: PollPolicy,
}

impl CliConfig {
    /// Build the configuration from parsed arguments (flags win over env).
    pub fn from_cli(cli: &Cli) -> Self {
        let mut client = RobloxClientConfig::new()
            .with_timeout(Duration::from_secs(cli.timeout_secs))
            .with_thumbnail_size(cli.thumbnail_size.clone())
            .with_thumbnail_format(cli.thumbnail_format.into());
        if let Some(url) = &cli.users_url {
            client = client.with_users_base_url(url.clone());
        }
        if let Some(url) = &cli.avatar_url {
            client = client.with_avatar_base_url(url.clone());
        }
        if let Some(url) = &cli.thumbnails_url {
            client = client.with_thumbnails_base_url(url.clone());
        }

        Self {
            client,
            poll: PollPolicy::new().with_max_attempts(cli.poll_attempts),
        }
    }
}

impl From<ImageFormat> for ThumbnailFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => Self::Png,
            ImageFormat::Jpeg => Self::Jpeg,
            ImageFormat::Webp => Self::Webp,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    resolver: OutfitResolver,
}

impl CliContext {
    /// Wrap an already-composed resolver.
    pub const fn new(resolver: OutfitResolver) -> Self {
        Self { resolver }
    }

    /// Access the outfit resolver.
    pub const fn resolver(&self) -> &OutfitResolver {
        &self.resolver
    }
}

/// Bootstrap the CLI application.
///
/// Fails with [`CliError::Config`] when the configured base URLs do not
/// parse or the HTTP client cannot be built.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client = DefaultRobloxClient::new(&config.client)?;
    debug!(
        users = config.client.users_base_url(),
        poll_attempts = config.poll.max_attempts(),
        "bootstrapped Roblox client"
    );
    let resolver = OutfitResolver::new(Arc::new(client), config.poll);
    Ok(CliContext::new(resolver))
}
