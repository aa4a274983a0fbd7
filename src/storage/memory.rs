//! In-memory record store
//!
//! Nothing is written to disk. Every `save_records` call is counted so tests
//! can assert that an operation did or did not reach persistence.

use super::error::StorageError;
use super::seed::seed_records;
use super::{BackendKind, PreferenceKind, RecordStore};
use crate::record::Record;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    records: Option<Vec<Record>>,
    preferences: HashMap<&'static str, String>,
    saves: usize,
}

/// Record store held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create a store with nothing persisted yet; the first load seeds it
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds an empty collection
    #[must_use]
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store that already holds `records`
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Some(records),
                ..Inner::default()
            }),
        }
    }

    /// Number of `save_records` calls so far
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Snapshot of the currently persisted collection
    #[must_use]
    pub fn persisted(&self) -> Vec<Record> {
        self.lock().records.clone().unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    const fn preference_key(kind: PreferenceKind) -> &'static str {
        match kind {
            PreferenceKind::Theme => "theme",
            PreferenceKind::Language => "language",
        }
    }
}

impl RecordStore for MemoryStore {
    fn load_records(&self) -> Result<Vec<Record>, StorageError> {
        let mut inner = self.lock();
        Ok(inner.records.get_or_insert_with(seed_records).clone())
    }

    fn save_records(&self, records: &[Record]) -> Result<bool, StorageError> {
        let mut inner = self.lock();
        inner.records = Some(records.to_vec());
        inner.saves += 1;
        Ok(true)
    }

    fn load_preference(&self, kind: PreferenceKind) -> Result<Option<String>, StorageError> {
        Ok(self.lock().preferences.get(Self::preference_key(kind)).cloned())
    }

    fn save_preference(&self, kind: PreferenceKind, value: &str) -> Result<(), StorageError> {
        self.lock()
            .preferences
            .insert(Self::preference_key(kind), value.to_string());
        Ok(())
    }

    fn backend(&self) -> BackendKind {
        BackendKind::Memory
    }
}
