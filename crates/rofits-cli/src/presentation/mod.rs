#![doc = include_str!("README.md")]

//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no state transitions
//! - Session rules belong in `rofits_core::SearchSession`

pub mod dialog;
pub mod grid;
pub mod spinner;
pub mod tables;

use std::io::{self, Write};

use rofits_core::Notification;

// Re-export commonly used items
pub use dialog::render_info;
pub use grid::{COLUMNS, render_grid};
pub use spinner::search_spinner;
pub use tables::{separator, truncate_string};

/// Print a toast.
pub fn render_notification(out: &mut impl Write, notification: &Notification) -> io::Result<()> {
    writeln!(out, "» {}", notification.message)
}

/// Print a message attached to the username field.
pub fn render_field_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "! {message}")
}
