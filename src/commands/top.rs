//! Top command - usage ranking

use crate::state::App;
use crate::{output, PromptNoteError};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Print the `limit` most used prompts as a bar chart
///
/// # Errors
///
/// Does not fail at present.
pub fn execute(app: &App, limit: usize, quiet: bool) -> Result<()> {
    let entries = app.top_n(limit);

    if entries.is_empty() {
        if !quiet {
            println!("No prompts yet. Create one with 'promptnote new'.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Most used prompts:");
    }
    for row in output::ranking_chart(&entries, app.theme(), quiet) {
        println!("{row}");
    }
    Ok(())
}
