//! promptnote - a local store for reusable AI prompts
//!
//! Prompts are kept as [`record::Record`]s in a pluggable
//! [`storage::RecordStore`] (a `sled` key-value database or a folder of JSON
//! files). [`state::App`] holds the collection in memory and writes it back
//! after every change, [`ranking`] orders it by usage, and
//! [`editor::Draft`] stages edits until they are saved.

use thiserror::Error;

pub mod cli;
pub mod clipboard;
pub mod collection;
pub mod commands;
pub mod config;
pub mod editor;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod record;
pub mod state;
pub mod storage;
pub mod transfer;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use record::{Language, Record, Theme};
pub use state::App;
pub use storage::{BackendKind, RecordStore, StorageError};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PromptNoteError {
    /// Record store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    /// Export or import failure
    #[error("{0}")]
    Transfer(#[from] transfer::TransferError),
    /// Clipboard failure
    #[error("{0}")]
    Clipboard(#[from] clipboard::ClipboardError),
    /// Prompt failure
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No record matches the given id
    #[error("No prompt matches '{0}'")]
    NotFound(String),
}
