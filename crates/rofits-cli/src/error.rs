//! CLI-specific error types and mappings.
//!
//! Maps resolver outcomes and adapter failures to exit codes and
//! user-facing messages.

use rofits_core::{ResolveError, ValidationError};
use rofits_roblox::RobloxError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The username does not exist.
    #[error("User '{0}' does not exist.")]
    NotFound(String),

    /// Network failure, bad status, or thumbnails that never settled.
    #[error("An error occurred, please try again later. ({0})")]
    Transient(String),

    /// Invalid client configuration (base URLs, timeouts).
    #[error("Configuration error: {0}")]
    Config(String),

    /// System clipboard unavailable or rejected the write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO error (terminal write failed, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 66: No such user (EX_NOINPUT)
    /// - 69: Upstream unavailable (EX_UNAVAILABLE)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::NotFound(_) => 66,
            Self::Transient(_) => 69,
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Clipboard(_) => 71, // EX_OSERR
            Self::Io(_) => 74,        // EX_IOERR
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        Self::Transient(err.to_string())
    }
}

impl From<RobloxError> for CliError {
    fn from(err: RobloxError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
