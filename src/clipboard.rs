//! Clipboard abstraction
//!
//! [`SystemClipboard`] talks to the desktop clipboard through `arboard`.
//! [`MemoryClipboard`] keeps the last copied text in memory, for tests.
//! [`StdoutClipboard`] prints the text instead, for terminals without a
//! clipboard or for piping into other tools.

use std::io::Write;
use std::sync::Mutex;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the text
    #[error("Clipboard error: {0}")]
    Write(String),
}

/// Anything that can receive copied text
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if the clipboard cannot be opened or written.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Writes copied text to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}").map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Clipboard kept in process memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text copied, if any
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}
