//! List and show commands

use super::resolve;
use crate::state::App;
use crate::{output, PromptNoteError};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Print the prompts matching `query`, or all of them
///
/// # Errors
///
/// Does not fail at present.
pub fn execute(app: &mut App, query: Option<&str>, quiet: bool) -> Result<()> {
    app.set_search_query(query.unwrap_or_default());
    let hits = app.filtered();

    if hits.is_empty() {
        if !quiet {
            if app.search_query().is_empty() {
                println!("No prompts found.");
            } else {
                println!("No prompts match '{}'.", app.search_query());
            }
        }
        return Ok(());
    }

    if !quiet {
        println!("Prompts ({}):", hits.len());
    }
    for record in hits {
        println!("{}", output::record_line(record, app.theme(), quiet));
    }
    Ok(())
}

/// Print one prompt in full
///
/// # Errors
///
/// Returns `PromptNoteError::NotFound` if no prompt matches `id`.
pub fn show(app: &App, id: &str, quiet: bool) -> Result<()> {
    let record = resolve(app, id)?;
    if quiet {
        println!("{}", record.content);
    } else {
        println!("{}", output::record_detail(&record, app.theme()));
    }
    Ok(())
}
