//! Application state controller
//!
//! [`App`] owns the in-memory collection and the view state, applies the pure
//! operations from [`crate::collection`], and persists the whole collection
//! after every mutation. It is the only component that talks to the store
//! once startup has finished.
//!
//! # Examples
//!
//! ```
//! use promptnote::state::App;
//! use promptnote::storage::MemoryStore;
//!
//! let mut app = App::load(Box::new(MemoryStore::new())).unwrap();
//! assert_eq!(app.records().len(), 5);
//!
//! let hits = app.filter("code");
//! assert_eq!(hits[0].title, "Code Refactoring");
//! ```

use crate::collection::{self, MergeSummary};
use crate::ranking::{self, RankedEntry};
use crate::record::{Language, Record, Theme};
use crate::storage::RecordStore;
use crate::transfer;
use crate::PromptNoteError;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Which pane is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Ranking dashboard and list
    #[default]
    Home,
    /// Single-record editor
    Editor,
}

/// In-memory application state bound to a record store
pub struct App {
    store: Box<dyn RecordStore>,
    records: Vec<Record>,
    selected: Option<Record>,
    view: View,
    search_query: String,
    theme: Theme,
    language: Language,
}

impl App {
    /// Load records and preferences from `store`
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if the store surfaces a read failure.
    pub fn load(store: Box<dyn RecordStore>) -> Result<Self> {
        let records = store.load_records()?;
        let theme = store.load_theme()?;
        let language = store.load_language()?;
        tracing::debug!(backend = %store.backend(), count = records.len(), "loaded application state");

        Ok(Self {
            store,
            records,
            selected: None,
            view: View::Home,
            search_query: String::new(),
            theme,
            language,
        })
    }

    /// Replace the collection and write it through to the store
    fn commit(&mut self, records: Vec<Record>) -> Result<()> {
        self.records = records;
        if !self.store.save_records(&self.records)? {
            tracing::warn!(backend = %self.store.backend(), "record store reported an unsuccessful save");
        }
        Ok(())
    }

    /// Insert or replace `record` by id, persist, and keep it selected
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if persisting fails.
    pub fn upsert(&mut self, record: Record) -> Result<()> {
        let updated = collection::upsert(&self.records, record.clone());
        self.commit(updated)?;
        self.selected = Some(record);
        self.view = View::Editor;
        Ok(())
    }

    /// Remove the record with `id`, persist, clear the selection and go home
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if persisting fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        let updated = collection::delete(&self.records, id);
        let removed = updated.len() != before;
        self.commit(updated)?;
        self.selected = None;
        self.view = View::Home;
        Ok(removed)
    }

    /// Add one use to the record with `id` and persist
    ///
    /// Returns the new count, or `None` if no record has that id. The
    /// selection is left alone.
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if persisting fails.
    pub fn record_usage(&mut self, id: &str) -> Result<Option<u64>> {
        let Some(updated) = collection::record_usage(&self.records, id) else {
            return Ok(None);
        };
        self.commit(updated)?;
        Ok(self.record(id).map(|r| r.usage_count))
    }

    /// Merge already-parsed records into the collection, first write wins
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if persisting fails.
    pub fn merge_records(&mut self, imported: Vec<Record>) -> Result<MergeSummary> {
        let (merged, summary) = collection::import_merge(&self.records, imported);
        self.commit(merged)?;
        Ok(summary)
    }

    /// Parse an import payload and merge it into the collection
    ///
    /// On invalid input the collection and the store are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Transfer` for malformed or non-array input and
    /// `PromptNoteError::Storage` if persisting fails.
    pub fn import_merge(&mut self, text: &str) -> Result<MergeSummary> {
        let imported = transfer::parse_import(text)?;
        self.merge_records(imported)
    }

    /// Read an import file and merge it into the collection
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Transfer` if the file cannot be read or is
    /// invalid, and `PromptNoteError::Storage` if persisting fails.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<MergeSummary> {
        let imported = transfer::read_import(path)?;
        self.merge_records(imported)
    }

    /// Export the full in-memory collection into `dir`
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Transfer` if the export file cannot be written.
    pub fn export_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        Ok(transfer::export_records(&self.records, dir)?)
    }

    /// Records matching `query` in title or tags
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Record> {
        collection::filter(&self.records, query)
    }

    /// Records matching the current search query
    #[must_use]
    pub fn filtered(&self) -> Vec<&Record> {
        self.filter(&self.search_query)
    }

    /// Set the search query used by [`App::filtered`]
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Ranking rows over the live collection
    #[must_use]
    pub fn top_ranked(&self) -> Vec<RankedEntry> {
        ranking::ranking(&self.records)
    }

    /// Ranking rows limited to `limit` entries
    #[must_use]
    pub fn top_n(&self, limit: usize) -> Vec<RankedEntry> {
        ranking::ranked(&self.records, limit)
    }

    /// Record by exact id
    #[must_use]
    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Record by exact id or unique id prefix
    #[must_use]
    pub fn find(&self, id_or_prefix: &str) -> Option<&Record> {
        collection::find(&self.records, id_or_prefix)
    }

    /// Open an existing record in the editor
    ///
    /// Returns the selected record, or `None` if the id is unknown.
    pub fn select(&mut self, id_or_prefix: &str) -> Option<&Record> {
        let record = self.find(id_or_prefix)?.clone();
        self.selected = Some(record);
        self.view = View::Editor;
        self.selected.as_ref()
    }

    /// Open the editor on a blank draft
    pub fn new_draft(&mut self) {
        self.selected = None;
        self.view = View::Editor;
    }

    /// Leave the editor without saving
    pub fn go_home(&mut self) {
        self.selected = None;
        self.view = View::Home;
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Set and persist the theme
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if the preference cannot be written.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.save_theme(theme)?;
        Ok(())
    }

    /// Switch to the other theme and persist it
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if the preference cannot be written.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Set and persist the language
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if the preference cannot be written.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        self.store.save_language(language)?;
        Ok(())
    }

    /// Switch to the other language and persist it
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if the preference cannot be written.
    pub fn toggle_language(&mut self) -> Result<Language> {
        let next = self.language.toggled();
        self.set_language(next)?;
        Ok(next)
    }

    /// The underlying store
    #[must_use]
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
