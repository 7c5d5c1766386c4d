//! Spinner shown while a one-shot lookup is running.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a steady-ticking spinner on stderr.
///
/// Hidden automatically when stderr is not a terminal.
pub fn search_spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
