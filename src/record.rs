//! Record and preference types
//!
//! A [`Record`] is the only persisted entity. Its JSON shape uses camelCase
//! field names and is shared by data files and exports. Imports accept the
//! same shape with only `id` required (see [`crate::transfer::parse_import`]):
//!
//! ```json
//! {
//!   "id": "1",
//!   "title": "Code Refactoring",
//!   "content": "Refactor the following code ...",
//!   "tags": ["coding", "dev"],
//!   "usageCount": 15,
//!   "createdAt": "2024-05-01T09:30:00Z",
//!   "updatedAt": "2024-05-01T09:30:00Z"
//! }
//! ```
//!
//! Preferences ([`Theme`] and [`Language`]) are stored separately from the
//! records and fall back to a fixed default when absent or unrecognised.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stored prompt entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque unique identifier, immutable once assigned
    pub id: String,
    /// Display title
    pub title: String,
    /// The reusable prompt text
    pub content: String,
    /// Tags in display order, unique within the record
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of times the content was copied for use
    #[serde(default)]
    pub usage_count: u64,
    /// Set once at first save
    pub created_at: DateTime<Utc>,
    /// Set on every save
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Create a record with a freshly generated id and zero usage
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: title.into(),
            content: content.into(),
            tags,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Short form of the id used in listings (everything before the first `-`)
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }

    /// Whether the title or any tag contains `needle` (already lowercased)
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Generate a new record id
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Display theme preference
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other variant
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map a stored value to a theme; anything other than `dark` is light
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// Display language preference
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Stored string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// The other variant
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Map a stored value to a language; anything other than `zh` is English
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("zh") => Self::Zh,
            _ => Self::En,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{other}'. Use 'light' or 'dark'")),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            other => Err(format!("Unknown language '{other}'. Use 'en' or 'zh'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_uses_camel_case() {
        let record = Record::new("Title", "Body", vec!["a".into()]);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("usageCount").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("usage_count").is_none());
    }

    #[test]
    fn test_record_defaults_for_missing_tags_and_usage() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "content": "C",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
        assert_eq!(record.usage_count, 0);
        assert!(record.created_at < record.updated_at);
    }

    #[test]
    fn test_new_record_timestamps_equal() {
        let record = Record::new("T", "C", Vec::new());
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.usage_count, 0);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_short_id() {
        let mut record = Record::new("T", "C", Vec::new());
        record.id = "abcd1234-ef56-7890".into();
        assert_eq!(record.short_id(), "abcd1234");
        record.id = "5".into();
        assert_eq!(record.short_id(), "5");
    }

    #[test]
    fn test_matches_title_or_tag() {
        let record = Record::new("Code Refactoring", "C", vec!["Dev".into()]);
        assert!(record.matches_lowercase("code"));
        assert!(record.matches_lowercase("dev"));
        assert!(!record.matches_lowercase("email"));
    }

    #[test]
    fn test_theme_from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_language_from_stored_defaults_to_english() {
        assert_eq!(Language::from_stored(Some("zh")), Language::Zh);
        assert_eq!(Language::from_stored(Some("fr")), Language::En);
        assert_eq!(Language::from_stored(None), Language::En);
        assert_eq!(Language::Zh.toggled(), Language::En);
    }

    #[test]
    fn test_parse_preferences() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("zh".parse::<Language>(), Ok(Language::Zh));
        assert!("blue".parse::<Theme>().is_err());
    }
}
