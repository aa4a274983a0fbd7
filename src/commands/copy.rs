//! Copy command - copy a prompt and count the use

use super::resolve;
use crate::clipboard::Clipboard;
use crate::editor::Draft;
use crate::state::App;
use crate::{output, PromptNoteError};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Copy the prompt's content to `clipboard`
///
/// Returns whether anything was copied.
///
/// # Errors
///
/// Returns `PromptNoteError::NotFound` for an unknown id and
/// `PromptNoteError::Clipboard` if the clipboard rejects the text.
pub fn execute(app: &mut App, id: &str, clipboard: &dyn Clipboard, quiet: bool) -> Result<bool> {
    let record = resolve(app, id)?;
    app.select(&record.id);
    let mut draft = Draft::for_selection(app);

    if !draft.copy_to_use(app, clipboard)? {
        if !quiet {
            output::warning(&format!("'{}' has no content to copy", record.title));
        }
        return Ok(false);
    }

    if !quiet {
        output::success(&format!(
            "Copied '{}' to clipboard (used {} times)",
            record.title,
            draft.usage_count()
        ));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::testing::{memory_app, record};

    #[test]
    fn test_copy_counts_use() {
        let mut app = memory_app(vec![record("1", "A", 2), record("2", "B", 0)]);
        let clipboard = MemoryClipboard::new();

        assert!(execute(&mut app, "1", &clipboard, true).unwrap());
        assert_eq!(clipboard.contents().as_deref(), Some("A content"));
        assert_eq!(app.record("1").unwrap().usage_count, 3);
        assert_eq!(app.record("2").unwrap().usage_count, 0);
        assert_eq!(app.store().load_records().unwrap()[0].usage_count, 3);
    }

    #[test]
    fn test_copy_empty_content() {
        let mut empty = record("1", "A", 0);
        empty.content = String::new();
        let mut app = memory_app(vec![empty]);
        let clipboard = MemoryClipboard::new();

        assert!(!execute(&mut app, "1", &clipboard, true).unwrap());
        assert_eq!(app.record("1").unwrap().usage_count, 0);
        assert_eq!(clipboard.contents(), None);
    }
}
