//! Record store: persistence of the record collection and preferences
//!
//! The collection is always read and written whole. Two interchangeable
//! backends implement [`RecordStore`]:
//!
//! - [`KvStore`]: an embedded sled database with three fixed keys, one JSON
//!   string per key. Failures propagate to the caller.
//! - [`FileStore`]: a directory holding `data.json` and `config.json`.
//!   Failures are logged and degrade to an empty load or a `false` save.
//!
//! [`MemoryStore`] keeps everything in process and counts persistence calls.
//! The backend is picked once, at construction, through [`open_store`].
//!
//! # Examples
//!
//! ```no_run
//! use promptnote::storage::{open_store, BackendKind};
//!
//! let store = open_store(BackendKind::File, "/tmp/promptnote").unwrap();
//! let records = store.load_records().unwrap();
//! store.save_records(&records).unwrap();
//! ```

use crate::record::{Language, Record, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
pub mod seed;

pub use error::StorageError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;
pub use seed::seed_records;

/// Scalar preference kinds persisted next to the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    Theme,
    Language,
}

/// Which backend a store was opened with
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Embedded key-value database
    Kv,
    /// `data.json` + `config.json` in a directory
    #[default]
    File,
    /// In-process only, nothing written to disk
    Memory,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Kv => "kv",
            Self::File => "file",
            Self::Memory => "memory",
        })
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kv" => Ok(Self::Kv),
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("Unknown backend '{other}'. Use 'kv', 'file' or 'memory'")),
        }
    }
}

/// Storage capability shared by all backends
pub trait RecordStore: Send + Sync {
    /// Load the persisted collection, seeding it when nothing is stored yet
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend surfaces read or decode failures.
    fn load_records(&self) -> Result<Vec<Record>, StorageError>;

    /// Overwrite the persisted collection
    ///
    /// Returns the success flag reported by the backend.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend surfaces write failures.
    fn save_records(&self, records: &[Record]) -> Result<bool, StorageError>;

    /// Read one preference value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend surfaces read failures.
    fn load_preference(&self, kind: PreferenceKind) -> Result<Option<String>, StorageError>;

    /// Write one preference value without touching the others
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend surfaces write failures.
    fn save_preference(&self, kind: PreferenceKind, value: &str) -> Result<(), StorageError>;

    /// Backend identity, for diagnostics
    fn backend(&self) -> BackendKind;

    /// Load the theme, defaulting to light
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be read.
    fn load_theme(&self) -> Result<Theme, StorageError> {
        let stored = self.load_preference(PreferenceKind::Theme)?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    /// Persist the theme
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be written.
    fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.save_preference(PreferenceKind::Theme, theme.as_str())
    }

    /// Load the language, defaulting to English
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be read.
    fn load_language(&self) -> Result<Language, StorageError> {
        let stored = self.load_preference(PreferenceKind::Language)?;
        Ok(Language::from_stored(stored.as_deref()))
    }

    /// Persist the language
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be written.
    fn save_language(&self, language: Language) -> Result<(), StorageError> {
        self.save_preference(PreferenceKind::Language, language.as_str())
    }
}

/// Shared handle to a store
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn load_records(&self) -> Result<Vec<Record>, StorageError> {
        (**self).load_records()
    }

    fn save_records(&self, records: &[Record]) -> Result<bool, StorageError> {
        (**self).save_records(records)
    }

    fn load_preference(&self, kind: PreferenceKind) -> Result<Option<String>, StorageError> {
        (**self).load_preference(kind)
    }

    fn save_preference(&self, kind: PreferenceKind, value: &str) -> Result<(), StorageError> {
        (**self).save_preference(kind, value)
    }

    fn backend(&self) -> BackendKind {
        (**self).backend()
    }
}

/// Open a store of the requested kind rooted at `data_dir`
///
/// The key-value backend keeps its sled files in `data_dir/kv`; the file
/// backend writes directly into `data_dir`.
///
/// # Errors
///
/// Returns `StorageError` if the directory or database cannot be opened.
pub fn open_store<P: AsRef<Path>>(
    kind: BackendKind,
    data_dir: P,
) -> Result<Box<dyn RecordStore>, StorageError> {
    let data_dir = data_dir.as_ref();
    tracing::debug!(backend = %kind, path = %data_dir.display(), "opening record store");
    match kind {
        BackendKind::Kv => Ok(Box::new(KvStore::open(data_dir.join("kv"))?)),
        BackendKind::File => Ok(Box::new(FileStore::open(data_dir)?)),
        BackendKind::Memory => Ok(Box::new(MemoryStore::new())),
    }
}
