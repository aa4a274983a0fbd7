//! Record editor staging
//!
//! A [`Draft`] holds the editable copy of one record. Changes stay in the
//! draft until [`Draft::save`] commits them through the application state, so
//! walking away from a draft discards them.
//!
//! # Examples
//!
//! ```
//! use promptnote::editor::Draft;
//! use promptnote::state::App;
//! use promptnote::storage::MemoryStore;
//!
//! let mut app = App::load(Box::new(MemoryStore::empty())).unwrap();
//! let mut draft = Draft::new();
//! draft.title = "Translate".into();
//! draft.content = "Translate the following text into French:".into();
//! draft.add_tag("language");
//!
//! let saved = draft.save(&mut app).unwrap().unwrap();
//! assert_eq!(app.records()[0].id, saved.id);
//! ```

use crate::clipboard::Clipboard;
use crate::record::{self, Record};
use crate::state::App;
use crate::ui::input::UserInput;
use crate::PromptNoteError;
use chrono::{DateTime, Utc};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Editable state of one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    id: Option<String>,
    pub title: String,
    pub content: String,
    tags: Vec<String>,
    usage_count: u64,
    created_at: Option<DateTime<Utc>>,
    /// Text typed into the tag field but not yet added
    pub tag_input: String,
}

impl Draft {
    /// A blank draft for a new record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft editing an existing record
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            content: record.content.clone(),
            tags: record.tags.clone(),
            usage_count: record.usage_count,
            created_at: Some(record.created_at),
            tag_input: String::new(),
        }
    }

    /// Draft for the app's current selection, or a blank one
    #[must_use]
    pub fn for_selection(app: &App) -> Self {
        app.selected().map_or_else(Self::new, Self::from_record)
    }

    /// Whether this draft edits a record that already exists in the collection
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn usage_count(&self) -> u64 {
        self.usage_count
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Add a tag after trimming; empty or duplicate tags are rejected
    ///
    /// Returns whether the tag was appended.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Add the pending tag input and clear it
    pub fn commit_tag_input(&mut self) -> bool {
        let input = std::mem::take(&mut self.tag_input);
        self.add_tag(&input)
    }

    /// Remove a tag by exact match
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Title and content are both non-empty after trimming
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Build the record this draft would commit at time `now`
    ///
    /// Returns `None` when the draft fails validation.
    #[must_use]
    pub fn to_record(&self, now: DateTime<Utc>) -> Option<Record> {
        if !self.can_save() {
            return None;
        }
        Some(Record {
            id: self.id.clone().unwrap_or_else(record::new_id),
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            usage_count: self.usage_count,
            created_at: self.created_at.unwrap_or(now),
            updated_at: now,
        })
    }

    /// Commit the draft through [`App::upsert`]
    ///
    /// Returns `Ok(None)` without touching the app when validation fails.
    /// After a successful save the draft tracks the saved record, so later
    /// saves update it instead of creating another one.
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Storage` if persisting fails.
    pub fn save(&mut self, app: &mut App) -> Result<Option<Record>> {
        let Some(record) = self.to_record(Utc::now()) else {
            tracing::debug!("draft rejected: title or content empty");
            return Ok(None);
        };
        app.upsert(record.clone())?;

        let tag_input = std::mem::take(&mut self.tag_input);
        *self = Self::from_record(&record);
        self.tag_input = tag_input;
        Ok(Some(record))
    }

    /// Copy the content to the clipboard and count a use
    ///
    /// Usage is only recorded for persisted records; the draft's count is
    /// bumped right away. Returns `false` when there is no content to copy.
    ///
    /// # Errors
    ///
    /// Returns `PromptNoteError::Clipboard` if the clipboard rejects the text
    /// and `PromptNoteError::Storage` if persisting the count fails.
    pub fn copy_to_use(&mut self, app: &mut App, clipboard: &dyn Clipboard) -> Result<bool> {
        if self.content.is_empty() {
            return Ok(false);
        }
        clipboard.set_text(&self.content)?;

        if let Some(id) = self.id.clone() {
            app.record_usage(&id)?;
            self.usage_count += 1;
        }
        Ok(true)
    }
}

/// Prompt shown before a record is deleted
pub const DELETE_PROMPT: &str = "Are you sure? This action cannot be undone.";

/// Ask before deleting; `assume_yes` skips the prompt
///
/// A cancelled prompt counts as "no".
///
/// # Errors
///
/// Returns `PromptNoteError::Input` if the prompt cannot be shown.
pub fn confirm_delete(input: &dyn UserInput, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(input.prompt_confirm(DELETE_PROMPT, false)?.unwrap_or(false))
}
