//! Testing utilities for promptnote
//!
//! Only available when compiled with `cfg(test)`.

use crate::record::Record;
use crate::state::App;
use crate::storage::{open_store, BackendKind, MemoryStore, RecordStore};
use chrono::Utc;
use tempfile::TempDir;

/// Store directory that is removed when the wrapper is dropped
///
/// Only one store may be open on a `kv` directory at a time, so drop an
/// [`App`] before calling [`TestStore::app`] again.
pub struct TestStore {
    dir: TempDir,
    kind: BackendKind,
}

impl TestStore {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new(kind: BackendKind) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir, kind }
    }

    /// # Panics
    /// Panics if the store cannot be opened.
    #[must_use]
    pub fn open(&self) -> Box<dyn RecordStore> {
        open_store(self.kind, self.dir.path()).expect("Failed to open test store")
    }

    /// # Panics
    /// Panics if the store cannot be opened or loaded.
    #[must_use]
    pub fn app(&self) -> App {
        App::load(self.open()).expect("Failed to load test app")
    }
}

/// Record with fixed id, title and usage
#[must_use]
pub fn record(id: &str, title: &str, usage_count: u64) -> Record {
    let now = Utc::now();
    Record {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("{title} content"),
        tags: Vec::new(),
        usage_count,
        created_at: now,
        updated_at: now,
    }
}

/// App over an in-memory store holding `records`
///
/// # Panics
/// Panics if the app cannot be loaded.
#[must_use]
pub fn memory_app(records: Vec<Record>) -> App {
    App::load(Box::new(MemoryStore::with_records(records))).expect("Failed to load memory app")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_persists_between_opens() {
        let store = TestStore::new(BackendKind::File);
        {
            let mut app = store.app();
            app.upsert(record("x", "X", 0)).unwrap();
        }
        assert!(store.app().record("x").is_some());
    }

    #[test]
    fn test_kv_store_persists_between_opens() {
        let store = TestStore::new(BackendKind::Kv);
        {
            let mut app = store.app();
            assert_eq!(app.records().len(), 5);
            app.delete("1").unwrap();
        }
        assert_eq!(store.app().records().len(), 4);
    }
}
