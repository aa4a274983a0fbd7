//! Demo dataset written when a store holds no records yet

use crate::record::Record;
use chrono::Utc;

/// Build the five demo records, timestamped now
#[must_use]
pub fn seed_records() -> Vec<Record> {
    let now = Utc::now();
    let entry = |id: &str, title: &str, content: &str, tags: &[&str], usage_count: u64| Record {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        usage_count,
        created_at: now,
        updated_at: now,
    };

    vec![
        entry(
            "1",
            "Code Refactoring",
            "Refactor the following code to be more readable and performant, following clean code principles:",
            &["coding", "dev"],
            15,
        ),
        entry(
            "2",
            "Email Professional",
            "Rewrite this email to sound more professional and polite:",
            &["work", "writing"],
            8,
        ),
        entry(
            "3",
            "React Component Generator",
            "Create a React functional component using TypeScript and Tailwind CSS for:",
            &["coding", "react"],
            12,
        ),
        entry(
            "4",
            "Summarize Text",
            "Summarize the following text into 3 bullet points:",
            &["productivity", "writing"],
            5,
        ),
        entry(
            "5",
            "Explain Like I am 5",
            "Explain this concept to me as if I were a 5 year old:",
            &["learning"],
            20,
        ),
    ]
}
