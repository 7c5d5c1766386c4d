#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultRobloxClient is meant to be used
// through the RobloxApiPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRobloxClient;

// Configuration
pub use config::{RobloxClientConfig, ThumbnailFormat};

// Errors surfaced while building the client
pub use error::RobloxError;
