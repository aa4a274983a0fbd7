//! Pure operations over a record collection
//!
//! Every mutation takes the current collection by reference and returns a new
//! collection value. Nothing here touches storage; the application state
//! controller decides when to persist.

use crate::record::Record;

/// Outcome of an import merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    /// Records appended to the collection
    pub imported: usize,
    /// Records ignored because their id already existed
    pub skipped: usize,
}

/// Replace the record with the same id in place, or append it
#[must_use]
pub fn upsert(records: &[Record], record: Record) -> Vec<Record> {
    let mut updated = records.to_vec();
    match updated.iter_mut().find(|r| r.id == record.id) {
        Some(existing) => *existing = record,
        None => updated.push(record),
    }
    updated
}

/// Remove the record with the given id
#[must_use]
pub fn delete(records: &[Record], id: &str) -> Vec<Record> {
    records.iter().filter(|r| r.id != id).cloned().collect()
}

/// Increment `usage_count` of the matching record by exactly one
///
/// Returns `None` when no record has that id.
#[must_use]
pub fn record_usage(records: &[Record], id: &str) -> Option<Vec<Record>> {
    let position = records.iter().position(|r| r.id == id)?;
    let mut updated = records.to_vec();
    updated[position].usage_count = updated[position].usage_count.saturating_add(1);
    Some(updated)
}

/// Append imported records whose id is not already present
///
/// The first record with a given id wins, including duplicates inside the
/// imported sequence itself.
#[must_use]
pub fn import_merge(records: &[Record], imported: Vec<Record>) -> (Vec<Record>, MergeSummary) {
    let mut merged = records.to_vec();
    let mut summary = MergeSummary::default();

    for record in imported {
        if merged.iter().any(|r| r.id == record.id) {
            summary.skipped += 1;
        } else {
            merged.push(record);
            summary.imported += 1;
        }
    }

    (merged, summary)
}

/// Records whose title or any tag contains `query`, case-insensitively
///
/// An empty query returns the whole collection in order.
#[must_use]
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    records.iter().filter(|r| r.matches_lowercase(&needle)).collect()
}

/// Look up a record by exact id, falling back to a unique id prefix
#[must_use]
pub fn find<'a>(records: &'a [Record], id_or_prefix: &str) -> Option<&'a Record> {
    if let Some(exact) = records.iter().find(|r| r.id == id_or_prefix) {
        return Some(exact);
    }
    if id_or_prefix.is_empty() {
        return None;
    }

    let mut candidates = records.iter().filter(|r| r.id.starts_with(id_or_prefix));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}
