//! User input abstraction
//!
//! Prompts go through [`UserInput`] so commands can be driven by a terminal
//! ([`DialoguerInput`]) or by a fixed script in tests
//! ([`super::mock::ScriptedInput`]).

use std::io;

/// Interactive prompts
///
/// # Examples
///
/// ```no_run
/// use promptnote::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// if let Some(true) = input.prompt_confirm("Delete prompt?", false).unwrap() {
///     println!("Deleting...");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt for a line of text
    ///
    /// Returns `Ok(None)` if the user cancelled.
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Prompt for yes or no
    ///
    /// Returns `Ok(None)` if the user cancelled.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Prompt to pick one of `items`, returning its index
    ///
    /// Returns `Ok(None)` if the user cancelled.
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The terminal could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),
}

fn to_input_error(e: dialoguer::Error) -> InputError {
    let dialoguer::Error::IO(io) = e;
    if io.kind() == io::ErrorKind::Interrupted {
        InputError::Cancelled
    } else {
        InputError::Io(io)
    }
}

/// Terminal prompts rendered by `dialoguer`
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input.interact_text().map(Some).map_err(to_input_error)
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(to_input_error)
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select.interact_opt().map_err(to_input_error)
    }
}
