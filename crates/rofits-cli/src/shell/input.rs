//! Line reader running on its own thread.
//!
//! Rustyline blocks, so it gets a dedicated OS thread that forwards each
//! line into the shell's event channel. The prompt stays live while a
//! search runs, which is how Ctrl-C reaches a running search.

use std::sync::mpsc as std_mpsc;
use std::thread;

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::ShellEvent;

const PROMPT: &str = "rofits> ";

/// Start the reader thread.
///
/// The thread ends after end-of-input, a terminal error, or once the
/// shell stops listening.
pub fn spawn_reader(events: mpsc::Sender<ShellEvent>) -> Result<()> {
    let (ready_tx, ready_rx) = std_mpsc::channel();

    thread::Builder::new()
        .name("rofits-input".to_string())
        .spawn(move || {
            let mut editor = match DefaultEditor::new() {
                Ok(editor) => {
                    let _ = ready_tx.send(Ok(()));
                    editor
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            loop {
                let event = match editor.readline(PROMPT) {
                    Ok(line) => {
                        if !line.trim().is_empty() {
                            let _ = editor.add_history_entry(line.as_str());
                        }
                        ShellEvent::Line(line)
                    }
                    Err(ReadlineError::Interrupted) => ShellEvent::Interrupted,
                    Err(ReadlineError::Eof) => ShellEvent::Eof,
                    Err(e) => {
                        warn!(error = %e, "line editor failed");
                        ShellEvent::Eof
                    }
                };

                let last = matches!(event, ShellEvent::Eof);
                if events.blocking_send(event).is_err() || last {
                    debug!("input reader stopped");
                    break;
                }
            }
        })
        .context("Failed to spawn input thread")?;

    ready_rx
        .recv()
        .context("Input thread exited during startup")?
        .context("Failed to initialise line editor")
}
