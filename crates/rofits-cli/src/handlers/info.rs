//! Info command handler.

use std::io;

use anyhow::Result;
use rofits_core::AppInfo;

use crate::presentation::render_info;

/// Print the info dialog and exit.
pub fn execute() -> Result<()> {
    render_info(&mut io::stdout().lock(), &AppInfo::current())?;
    Ok(())
}
