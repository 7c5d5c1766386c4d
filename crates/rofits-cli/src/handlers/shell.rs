//! Shell command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Run the interactive shell until the user quits.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    crate::shell::run(ctx).await
}
