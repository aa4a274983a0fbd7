//! Top-used records
//!
//! Recomputed from the live collection whenever it is displayed; nothing
//! here is persisted.

use crate::record::Record;

/// Number of entries in the ranking view
pub const TOP_N: usize = 10;

/// Maximum label length before truncation
pub const LABEL_MAX_CHARS: usize = 20;

/// One row of the ranking view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub id: String,
    pub label: String,
    pub usage: u64,
}

/// Records sorted by descending usage, ties kept in collection order, first `limit`
#[must_use]
pub fn top_by_usage(records: &[Record], limit: usize) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    // sort_by is stable, which keeps equal counts in collection order
    sorted.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    sorted.truncate(limit);
    sorted
}

/// Ranking rows for display, using [`TOP_N`]
#[must_use]
pub fn ranking(records: &[Record]) -> Vec<RankedEntry> {
    ranked(records, TOP_N)
}

/// Ranking rows for the first `limit` records by usage
#[must_use]
pub fn ranked(records: &[Record], limit: usize) -> Vec<RankedEntry> {
    top_by_usage(records, limit)
        .into_iter()
        .map(|r| RankedEntry {
            id: r.id.clone(),
            label: chart_label(&r.title),
            usage: r.usage_count,
        })
        .collect()
}

/// Truncate a title to [`LABEL_MAX_CHARS`] characters, appending `...` when cut
#[must_use]
pub fn chart_label(title: &str) -> String {
    if title.chars().count() > LABEL_MAX_CHARS {
        let cut: String = title.chars().take(LABEL_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}
