//! Roblox web API port definitions.
//!
//! This module defines the port trait and DTOs for the three Roblox endpoints
//! the resolver chains together. The actual implementation lives in
//! `rofits-roblox`.

mod client;
mod error;
mod types;

pub use client::RobloxApiPort;
#[cfg(test)]
pub use client::MockRobloxApiPort;
pub use error::{RobloxPortError, RobloxPortResult};
pub use types::{OutfitSummary, ThumbnailInfo, ThumbnailState, UserSummary};
