//! File backend: `data.json` and `config.json` in one directory
//!
//! Operations here never fail the caller. Read errors fall back to empty
//! values; write errors are logged and reported through the `save_records`
//! success flag.
//!
//! - `data.json`: pretty-printed JSON array of records, rewritten whole
//! - `config.json`: compact JSON object of scalar preferences; saving one key
//!   keeps every other key already present

use super::error::StorageError;
use super::seed::seed_records;
use super::{BackendKind, PreferenceKind, RecordStore};
use crate::record::Record;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Records file name inside the data directory
pub const DATA_FILE: &str = "data.json";
/// Preferences file name inside the data directory
pub const CONFIG_FILE: &str = "config.json";

/// Record store backed by two JSON files
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store, creating the directory if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    /// Path of `data.json`
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    /// Path of `config.json`
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    const fn preference_key(kind: PreferenceKind) -> &'static str {
        match kind {
            PreferenceKind::Theme => "theme",
            PreferenceKind::Language => "language",
        }
    }

    /// Read `data.json`; `Ok(None)` when the file does not exist
    fn read_data(&self) -> Result<Option<Vec<Record>>, StorageError> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn write_data(&self, records: &[Record]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.data_path(), json)?;
        Ok(())
    }

    /// Read the preferences object, treating a missing or corrupt file as empty
    fn read_config(&self) -> Map<String, Value> {
        let path = self.config_path();
        if !path.exists() {
            return Map::new();
        }
        let parsed = fs::read_to_string(&path)
            .map_err(StorageError::from)
            .and_then(|contents| serde_json::from_str::<Value>(&contents).map_err(StorageError::from));
        match parsed {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::error!(path = %path.display(), "config file is not a JSON object");
                Map::new()
            }
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "failed to load config");
                Map::new()
            }
        }
    }

    fn write_config(&self, config: &Map<String, Value>) -> Result<(), StorageError> {
        let json = serde_json::to_string(config)?;
        fs::write(self.config_path(), json)?;
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load_records(&self) -> Result<Vec<Record>, StorageError> {
        match self.read_data() {
            Ok(Some(records)) if !records.is_empty() => Ok(records),
            Ok(_) => {
                let seed = seed_records();
                if let Err(error) = self.write_data(&seed) {
                    tracing::error!(%error, "failed to persist seed records");
                }
                Ok(seed)
            }
            Err(error) => {
                tracing::error!(path = %self.data_path().display(), %error, "failed to load records");
                Ok(Vec::new())
            }
        }
    }

    fn save_records(&self, records: &[Record]) -> Result<bool, StorageError> {
        match self.write_data(records) {
            Ok(()) => {
                tracing::debug!(count = records.len(), "saved records to data file");
                Ok(true)
            }
            Err(error) => {
                tracing::error!(path = %self.data_path().display(), %error, "failed to save records");
                Ok(false)
            }
        }
    }

    fn load_preference(&self, kind: PreferenceKind) -> Result<Option<String>, StorageError> {
        let config = self.read_config();
        Ok(config
            .get(Self::preference_key(kind))
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    fn save_preference(&self, kind: PreferenceKind, value: &str) -> Result<(), StorageError> {
        let mut config = self.read_config();
        config.insert(Self::preference_key(kind).to_string(), Value::String(value.to_string()));
        if let Err(error) = self.write_config(&config) {
            tracing::error!(path = %self.config_path().display(), %error, "failed to save config");
        }
        Ok(())
    }

    fn backend(&self) -> BackendKind {
        BackendKind::File
    }
}
