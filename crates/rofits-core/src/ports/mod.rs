//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `url` types in any signature
//! - Wire formats stay inside the adapter crate
//! - Read-only: nothing here mutates remote state

pub mod roblox;

pub use roblox::{
    OutfitSummary, RobloxApiPort, RobloxPortError, RobloxPortResult, ThumbnailInfo,
    ThumbnailState, UserSummary,
};

#[cfg(test)]
pub use roblox::MockRobloxApiPort;
