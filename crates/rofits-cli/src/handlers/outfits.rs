//! One-shot outfits command handler.
//!
//! Resolves a single username and prints the records as a grid, or as
//! JSON with `--json`. The process exit code follows the outcome: not
//! found and transient failures are errors, an empty wardrobe is not.

use std::io::{self, Write};

use rofits_core::{EMPTY_PLACEHOLDER, Resolution, ResolveResult, Username};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_grid, search_spinner};

/// Execute the outfits command.
///
/// # Errors
///
/// - [`CliError::Validation`] for a blank username
/// - [`CliError::NotFound`] when no such user exists
/// - [`CliError::Transient`] for network failures or thumbnails that never
///   finished rendering
pub async fn execute(ctx: &CliContext, username: &str, json: bool) -> Result<(), CliError> {
    let username = Username::parse(username)?;

    let spinner = search_spinner(format!("Searching outfits for {username}..."));
    let outcome = ctx.resolver().resolve(&username).await;
    spinner.finish_and_clear();

    write_outcome(&mut io::stdout().lock(), &username, outcome, json)
}

/// Format a resolver outcome.
fn write_outcome(
    out: &mut impl Write,
    username: &Username,
    outcome: ResolveResult,
    json: bool,
) -> Result<(), CliError> {
    let records = match outcome? {
        Resolution::Outfits(records) => records,
        Resolution::Empty => Vec::new(),
        Resolution::NotFound => return Err(CliError::NotFound(username.to_string())),
    };
    info!(%username, count = records.len(), "resolved outfits");

    if json {
        let body =
            serde_json::to_string_pretty(&records).map_err(|e| CliError::Io(e.to_string()))?;
        writeln!(out, "{body}")?;
    } else if records.is_empty() {
        writeln!(out, "{EMPTY_PLACEHOLDER}")?;
    } else {
        writeln!(out, "{} outfit(s) for {username}:", records.len())?;
        render_grid(out, &records)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rofits_core::{OutfitRecord, ResolveError};
    use tokio_test::{assert_err, assert_ok};

    fn run(outcome: ResolveResult, json: bool) -> (Result<(), CliError>, String) {
        let username = Username::parse("builderman").unwrap();
        let mut buf = Vec::new();
        let result = write_outcome(&mut buf, &username, outcome, json);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_json_output() {
        let (result, out) = run(
            Ok(Resolution::Outfits(vec![
                OutfitRecord::new(12, "Pirate", Some("https://tr.rbxcdn.com/p".into())),
                OutfitRecord::new(10, "Knight", None),
            ])),
            true,
        );
        assert_ok!(result);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["id"], 12);
        assert_eq!(parsed[1]["thumb_url"], serde_json::Value::Null);
    }

    #[test]
    fn test_empty_is_success() {
        let (result, out) = run(Ok(Resolution::Empty), false);
        assert_ok!(result);
        assert!(out.contains(EMPTY_PLACEHOLDER));

        let (_, out) = run(Ok(Resolution::Empty), true);
        assert_eq!(out.trim(), "[]");
    }

    #[test]
    fn test_not_found_exit_code() {
        let (result, out) = run(Ok(Resolution::NotFound), false);
        let err = assert_err!(result);
        assert_eq!(err.exit_code(), 66);
        assert!(out.is_empty());
    }

    #[test]
    fn test_pending_thumbnails_are_transient() {
        let (result, _) = run(
            Err(ResolveError::ThumbnailsPending {
                attempts: 8,
                pending: 2,
            }),
            false,
        );
        assert_eq!(assert_err!(result).exit_code(), 69);
    }

    #[test]
    fn test_grid_output() {
        let (result, out) = run(
            Ok(Resolution::Outfits(vec![OutfitRecord::new(1, "Knight", None)])),
            false,
        );
        assert_ok!(result);
        assert!(out.starts_with("1 outfit(s) for builderman:"));
        assert!(out.contains("1. Knight"));
    }
}
