//! Theme and language commands

use crate::record::{Language, Theme};
use crate::state::App;
use crate::PromptNoteError;

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Set the theme, or toggle it when `value` is `None`
///
/// # Errors
///
/// Returns `PromptNoteError::Storage` if the preference cannot be written.
pub fn theme(app: &mut App, value: Option<Theme>, quiet: bool) -> Result<Theme> {
    let theme = match value {
        Some(theme) => {
            app.set_theme(theme)?;
            theme
        }
        None => app.toggle_theme()?,
    };
    if quiet {
        println!("{theme}");
    } else {
        println!("Theme: {theme}");
    }
    Ok(theme)
}

/// Set the language, or toggle it when `value` is `None`
///
/// # Errors
///
/// Returns `PromptNoteError::Storage` if the preference cannot be written.
pub fn language(app: &mut App, value: Option<Language>, quiet: bool) -> Result<Language> {
    let language = match value {
        Some(language) => {
            app.set_language(language)?;
            language
        }
        None => app.toggle_language()?,
    };
    if quiet {
        println!("{language}");
    } else {
        println!("Language: {language}");
    }
    Ok(language)
}
