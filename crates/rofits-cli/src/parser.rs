//! Main CLI parser and top-level argument handling.
//!
//! Every global option can also come from the environment (or a `.env`
//! file), so the same binary can be pointed at a local mock of the Roblox
//! web APIs.

use clap::{Parser, ValueEnum};

use crate::commands::Commands;

/// Command-line interface for browsing a Roblox user's outfits.
#[derive(Parser, Debug)]
#[command(name = "rofits")]
#[command(about = "Look up a Roblox user's saved outfits")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Override the Users API base URL
    #[arg(long = "users-url", env = "ROFITS_USERS_URL", global = true)]
    pub users_url: Option<String>,

    /// Override the Avatar API base URL
    #[arg(long = "avatar-url", env = "ROFITS_AVATAR_URL", global = true)]
    pub avatar_url: Option<String>,

    /// Override the Thumbnails API base URL
    #[arg(long = "thumbnails-url", env = "ROFITS_THUMBNAILS_URL", global = true)]
    pub thumbnails_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "ROFITS_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_secs: u64,

    /// Maximum thumbnail batch requests per search
    #[arg(
        long = "poll-attempts",
        env = "ROFITS_POLL_ATTEMPTS",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    pub poll_attempts: u32,

    /// Thumbnail dimensions to request
    #[arg(
        long = "thumbnail-size",
        env = "ROFITS_THUMBNAIL_SIZE",
        default_value = "420x420",
        value_parser = ["150x150", "420x420"],
        global = true
    )]
    pub thumbnail_size: String,

    /// Thumbnail image format to request
    #[arg(
        long = "thumbnail-format",
        env = "ROFITS_THUMBNAIL_FORMAT",
        value_enum,
        default_value_t = ImageFormat::Png,
        global = true
    )]
    pub thumbnail_format: ImageFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Image formats the thumbnails API can render.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}
