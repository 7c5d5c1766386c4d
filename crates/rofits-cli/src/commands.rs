//! Subcommands of the `rofits` binary.

use clap::Subcommand;

/// Available commands.
///
/// With no subcommand the interactive shell starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive search shell (default)
    Shell,

    /// Resolve one username and print its outfits
    Outfits {
        /// Roblox username to look up
        username: String,
        /// Print records as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Show information about this application
    Info,
}
