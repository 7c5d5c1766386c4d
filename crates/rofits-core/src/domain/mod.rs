//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, terminal, clipboard).
//!
//! # Structure
//!
//! - `username` - Validated search input
//! - `outfit` - The resolved outfit record shown as a tile
//! - `app_info` - Static metadata for the info dialog

mod app_info;
mod outfit;
mod username;

pub use app_info::AppInfo;
pub use outfit::OutfitRecord;
pub use username::{Username, ValidationError};
