//! Export and import commands

use crate::state::App;
use crate::transfer::TransferError;
use crate::{output, PromptNoteError};
use std::path::Path;

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Write every prompt to `dir/prompt_notes_export.json`
///
/// # Errors
///
/// Returns `PromptNoteError::Transfer` if the directory or file cannot be written.
pub fn export(app: &App, dir: &Path, quiet: bool) -> Result<()> {
    let path = app.export_to(dir)?;
    if quiet {
        println!("{}", path.display());
    } else {
        output::success(&format!(
            "Exported {} prompts to {}",
            app.records().len(),
            path.display()
        ));
    }
    Ok(())
}

/// Merge prompts from `file`; existing ids are kept
///
/// A payload that is not a JSON array of prompts is reported and leaves the
/// collection unchanged.
///
/// # Errors
///
/// Returns `PromptNoteError::Transfer` if the file cannot be read and
/// `PromptNoteError::Storage` if the merged collection cannot be saved.
pub fn import(app: &mut App, file: &Path, quiet: bool) -> Result<()> {
    match app.import_file(file) {
        Ok(summary) => {
            if !quiet {
                output::success(&format!(
                    "Imported {} prompts ({} skipped, already present)",
                    summary.imported, summary.skipped
                ));
            }
            Ok(())
        }
        Err(PromptNoteError::Transfer(
            e @ (TransferError::InvalidJson(_) | TransferError::NotAnArray),
        )) => {
            tracing::warn!(path = %file.display(), error = %e, "rejected import");
            output::error(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{memory_app, record};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_into_other_app() {
        let dir = TempDir::new().unwrap();
        let source = memory_app(vec![record("1", "A", 1), record("2", "B", 2)]);
        export(&source, dir.path(), true).unwrap();

        let mut target = memory_app(vec![record("2", "Mine", 9)]);
        import(&mut target, &dir.path().join("prompt_notes_export.json"), true).unwrap();

        let titles: Vec<_> = target.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Mine", "A"]);
    }

    #[test]
    fn test_import_invalid_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        let mut app = memory_app(vec![record("1", "A", 0)]);
        import(&mut app, &path, true).unwrap();
        assert_eq!(app.records().len(), 1);
    }

    #[test]
    fn test_import_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let mut app = memory_app(Vec::new());
        assert!(import(&mut app, &dir.path().join("missing.json"), true).is_err());
    }
}
