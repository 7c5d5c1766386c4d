//! System clipboard access for the copy-ID gesture.

use arboard::Clipboard;
use tracing::debug;

use crate::error::CliError;

/// Somewhere copied text can go.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), CliError>;
}

/// The OS clipboard, opened on first use.
///
/// Opening is deferred so the shell still starts on headless machines
/// where no clipboard is available.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), CliError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| CliError::Clipboard(e.to_string()))?,
        };
        let result = clipboard.set_text(text.to_owned());
        self.inner = Some(clipboard);
        result.map_err(|e| CliError::Clipboard(e.to_string()))?;
        debug!(text, "copied to clipboard");
        Ok(())
    }
}
