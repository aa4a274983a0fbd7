//! Delete command

use super::resolve;
use crate::editor::confirm_delete;
use crate::state::App;
use crate::ui::input::UserInput;
use crate::{output, PromptNoteError};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Delete a prompt after confirmation
///
/// Returns whether the prompt was deleted.
///
/// # Errors
///
/// Returns `PromptNoteError::NotFound` for an unknown id and
/// `PromptNoteError::Input` if the confirmation cannot be shown.
pub fn execute(
    app: &mut App,
    id: &str,
    input: &dyn UserInput,
    yes: bool,
    quiet: bool,
) -> Result<bool> {
    let record = resolve(app, id)?;
    if !quiet {
        println!("Deleting '{}' ({})", record.title, record.short_id());
    }

    if !confirm_delete(input, yes)? {
        if !quiet {
            println!("Cancelled.");
        }
        return Ok(false);
    }

    app.delete(&record.id)?;
    if !quiet {
        output::success(&format!("Deleted '{}'", record.title));
    }
    Ok(true)
}
