//! Output formatting for CLI display
//!
//! Plain-text renderings of records and the usage ranking. With `quiet`
//! set, lines shrink to something scripts can consume.

use crate::ranking::RankedEntry;
use crate::record::{Record, Theme};
use colored::{ColoredString, Colorize};

/// Width of the longest ranking bar, in cells
pub const BAR_WIDTH: usize = 30;

fn accent(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => text.blue(),
        Theme::Dark => text.cyan(),
    }
}

/// Format tags as `#tag` chips
#[must_use]
pub fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per record for list output
#[must_use]
pub fn record_line(record: &Record, theme: Theme, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", record.id, record.title);
    }
    let uses = format!("{} uses", record.usage_count);
    if record.tags.is_empty() {
        format!(
            "  {}  {}  {}",
            record.short_id().dimmed(),
            accent(&record.title, theme).bold(),
            uses.dimmed()
        )
    } else {
        format!(
            "  {}  {}  {}  {}",
            record.short_id().dimmed(),
            accent(&record.title, theme).bold(),
            tag_chips(&record.tags).yellow(),
            uses.dimmed()
        )
    }
}

/// Full record view: header fields, then the content verbatim
#[must_use]
pub fn record_detail(record: &Record, theme: Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", accent(&record.title, theme).bold()));
    out.push_str(&format!("{} {}\n", "id:".dimmed(), record.id));
    if !record.tags.is_empty() {
        out.push_str(&format!("{} {}\n", "tags:".dimmed(), tag_chips(&record.tags)));
    }
    out.push_str(&format!("{} {}\n", "uses:".dimmed(), record.usage_count));
    out.push_str(&format!(
        "{} {}\n",
        "created:".dimmed(),
        record.created_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!(
        "{} {}\n",
        "updated:".dimmed(),
        record.updated_at.format("%Y-%m-%d %H:%M")
    ));
    out.push('\n');
    out.push_str(&record.content);
    out
}

/// Bar length for `usage` relative to the largest count
#[must_use]
pub fn bar_len(usage: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let scaled = u128::from(usage) * width as u128 / u128::from(max);
    usize::try_from(scaled).unwrap_or(width).max(usize::from(usage > 0))
}

/// Horizontal bar chart of the ranking, one row per entry
#[must_use]
pub fn ranking_chart(entries: &[RankedEntry], theme: Theme, quiet: bool) -> Vec<String> {
    let max = entries.iter().map(|e| e.usage).max().unwrap_or(0);
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            if quiet {
                return format!("{}\t{}", entry.usage, entry.label);
            }
            let pad = label_width - entry.label.chars().count();
            let bar = "█".repeat(bar_len(entry.usage, max, BAR_WIDTH));
            format!(
                "  {}{}  {} {}",
                entry.label,
                " ".repeat(pad),
                accent(&bar, theme),
                entry.usage
            )
        })
        .collect()
}

/// Print a success line to stdout
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a warning line to stdout
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
