#![doc = include_str!("README.md")]

//! Command handlers that delegate to the core resolver.
//!
//! Handlers should NOT:
//! - Talk to the Roblox client directly
//! - Decide outcome classification (that is `OutcomeKind`'s job)

pub mod info;
pub mod outfits;
pub mod shell;
