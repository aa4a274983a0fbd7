//! Key-value backend on an embedded sled database
//!
//! Mirrors a browser-style key-value store: three fixed keys, each holding a
//! UTF-8 string. The data key holds the JSON array of records, the two
//! preference keys hold the bare variant name.

use super::error::StorageError;
use super::seed::seed_records;
use super::{BackendKind, PreferenceKind, RecordStore};
use crate::record::Record;
use sled::Db;
use std::path::Path;

/// Key holding the serialized record collection
pub const DATA_KEY: &str = "prompt-notes-data";
/// Key holding the theme preference
pub const THEME_KEY: &str = "prompt-notes-theme";
/// Key holding the language preference
pub const LANG_KEY: &str = "prompt-notes-lang";

/// Record store backed by sled
pub struct KvStore {
    db: Db,
}

impl KvStore {
    /// Opens or creates the database at the specified path
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    const fn preference_key(kind: PreferenceKind) -> &'static str {
        match kind {
            PreferenceKind::Theme => THEME_KEY,
            PreferenceKind::Language => LANG_KEY,
        }
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|_| StorageError::Utf8Error(key.to_string())),
            None => Ok(None),
        }
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the clear operation fails.
    #[cfg(test)]
    pub fn clear(&self) -> Result<(), StorageError> {
        self.db.clear()?;
        self.db.flush()?;
        Ok(())
    }

    /// Write a raw string under a key, bypassing serialization
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    #[cfg(test)]
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_string(key, value)
    }
}

impl RecordStore for KvStore {
    fn load_records(&self) -> Result<Vec<Record>, StorageError> {
        match self.get_string(DATA_KEY)? {
            Some(stored) => Ok(serde_json::from_str(&stored)?),
            None => {
                let seed = seed_records();
                self.set_string(DATA_KEY, &serde_json::to_string(&seed)?)?;
                tracing::debug!(count = seed.len(), "seeded empty key-value store");
                Ok(seed)
            }
        }
    }

    fn save_records(&self, records: &[Record]) -> Result<bool, StorageError> {
        self.set_string(DATA_KEY, &serde_json::to_string(records)?)?;
        tracing::debug!(count = records.len(), "saved records to key-value store");
        Ok(true)
    }

    fn load_preference(&self, kind: PreferenceKind) -> Result<Option<String>, StorageError> {
        self.get_string(Self::preference_key(kind))
    }

    fn save_preference(&self, kind: PreferenceKind, value: &str) -> Result<(), StorageError> {
        self.set_string(Self::preference_key(kind), value)
    }

    fn backend(&self) -> BackendKind {
        BackendKind::Kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Theme;
    use tempfile::TempDir;

    fn open_temp() -> (KvStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path().join("kv")).unwrap();
        (store, dir)
    }

    #[test]
    fn test_missing_data_seeds_and_persists() {
        let (store, _dir) = open_temp();
        let records = store.load_records().unwrap();
        assert_eq!(records.len(), 5);

        let stored = store.get_string(DATA_KEY).unwrap().unwrap();
        let persisted: Vec<Record> = serde_json::from_str(&stored).unwrap();
        assert_eq!(persisted, records);
    }

    #[test]
    fn test_round_trip() {
        let (store, _dir) = open_temp();
        store.load_records().unwrap();

        let records = vec![Record::new("Only", "One", vec!["x".into()])];
        assert!(store.save_records(&records).unwrap());
        assert_eq!(store.load_records().unwrap(), records);
    }

    #[test]
    fn test_empty_array_is_not_reseeded() {
        let (store, _dir) = open_temp();
        store.save_records(&[]).unwrap();
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_data_propagates() {
        let (store, _dir) = open_temp();
        store.put_raw(DATA_KEY, "{not json").unwrap();
        let result = store.load_records();
        assert!(matches!(result, Err(StorageError::JsonError(_))));
    }

    #[test]
    fn test_preferences_use_separate_keys() {
        let (store, _dir) = open_temp();
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.get_string(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get_string(LANG_KEY).unwrap(), None);
        assert_eq!(store.load_theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_clear_removes_everything() {
        let (store, _dir) = open_temp();
        store.load_records().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get_string(DATA_KEY).unwrap(), None);
    }
}
