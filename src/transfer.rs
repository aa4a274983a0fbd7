//! Export and import of the record collection
//!
//! Both directions use the same schema as the persisted data file: a JSON
//! array of records. Exports are pretty-printed with two-space indentation.

use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used for every export
pub const EXPORT_FILE_NAME: &str = "prompt_notes_export.json";

/// Errors that can occur during export or import
#[derive(Debug, Error)]
pub enum TransferError {
    /// I/O error reading or writing the transfer file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not parseable as JSON records
    #[error("Invalid JSON file: {0}")]
    InvalidJson(String),

    /// The payload is valid JSON but not an array
    #[error("Invalid JSON file: expected an array of prompts")]
    NotAnArray,

    /// Serializing the export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Record shape accepted on import; only `id` is required
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedRecord {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    usage_count: u64,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ImportedRecord {
    /// Fill missing timestamps from each other, then from `now`
    fn into_record(self, now: DateTime<Utc>) -> Record {
        let created_at = self.created_at.or(self.updated_at).unwrap_or(now);
        Record {
            id: self.id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            usage_count: self.usage_count,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        }
    }
}

/// Serialize `records` as pretty-printed JSON
///
/// # Errors
///
/// Returns `TransferError` if serialization fails.
pub fn to_export_json(records: &[Record]) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the full collection to `dir/prompt_notes_export.json`
///
/// Returns the path written.
///
/// # Errors
///
/// Returns `TransferError` if the directory cannot be created or the file
/// cannot be written.
pub fn export_records<P: AsRef<Path>>(records: &[Record], dir: P) -> Result<PathBuf, TransferError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, to_export_json(records)?)?;
    Ok(path)
}

/// Parse an import payload into records
///
/// Each element needs a string `id`. Missing text fields become empty,
/// missing counters zero, and missing timestamps the import time.
///
/// # Errors
///
/// Returns `TransferError::InvalidJson` if the text is not JSON or an element
/// is not shaped like a record, and `TransferError::NotAnArray` if the JSON
/// value is not an array.
pub fn parse_import(text: &str) -> Result<Vec<Record>, TransferError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| TransferError::InvalidJson(e.to_string()))?;
    if !value.is_array() {
        return Err(TransferError::NotAnArray);
    }
    let imported: Vec<ImportedRecord> =
        serde_json::from_value(value).map_err(|e| TransferError::InvalidJson(e.to_string()))?;
    let now = Utc::now();
    Ok(imported.into_iter().map(|r| r.into_record(now)).collect())
}

/// Read and parse an import file
///
/// # Errors
///
/// Returns `TransferError` if the file cannot be read or its content is invalid.
pub fn read_import<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, TransferError> {
    let text = fs::read_to_string(path)?;
    parse_import(&text)
}
