//! New and edit commands - stage changes in a draft, then save

use super::resolve;
use crate::editor::Draft;
use crate::record::Record;
use crate::state::App;
use crate::{output, PromptNoteError};

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Field changes requested by `promptnote edit`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditArgs {
    pub title: Option<String>,
    pub content: Option<String>,
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
}

fn save_draft(app: &mut App, draft: &mut Draft) -> Result<Record> {
    draft.save(app)?.ok_or_else(|| {
        PromptNoteError::InvalidInput("title and content must not be empty".into())
    })
}

/// Create a prompt
///
/// # Errors
///
/// Returns `PromptNoteError::InvalidInput` if the title or content is blank.
pub fn create(
    app: &mut App,
    title: &str,
    content: &str,
    tags: &[String],
    quiet: bool,
) -> Result<Record> {
    app.new_draft();
    let mut draft = Draft::new();
    draft.title = title.to_string();
    draft.content = content.to_string();
    for tag in tags {
        draft.add_tag(tag);
    }

    let saved = save_draft(app, &mut draft)?;
    if quiet {
        println!("{}", saved.id);
    } else {
        output::success(&format!("Created '{}' ({})", saved.title, saved.short_id()));
    }
    Ok(saved)
}

/// Apply `args` to an existing prompt
///
/// Tags are removed before new ones are added.
///
/// # Errors
///
/// Returns `PromptNoteError::NotFound` for an unknown id and
/// `PromptNoteError::InvalidInput` if the edit leaves the title or content blank.
pub fn execute(app: &mut App, id: &str, args: &EditArgs, quiet: bool) -> Result<Record> {
    let existing = resolve(app, id)?;
    app.select(&existing.id);
    let mut draft = Draft::for_selection(app);

    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(content) = &args.content {
        draft.content.clone_from(content);
    }
    for tag in &args.remove_tags {
        if !draft.remove_tag(tag) && !quiet {
            output::warning(&format!("Tag '{tag}' not present"));
        }
    }
    for tag in &args.add_tags {
        draft.add_tag(tag);
    }

    let saved = save_draft(app, &mut draft)?;
    if !quiet {
        output::success(&format!("Updated '{}'", saved.title));
    }
    Ok(saved)
}
