//! Interactive setup wizard for first-time configuration

use super::PromptNoteConfig;
use crate::storage::BackendKind;
use crate::ui::input::UserInput;
use config::ConfigError;
use std::path::PathBuf;

fn input_failed(e: impl std::fmt::Display) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

/// Prompt for the storage backend and data directory
///
/// The caller decides where the result is saved. Cancelling a prompt keeps
/// the default for that setting.
///
/// # Errors
///
/// Returns `ConfigError` if the system data directory cannot be determined
/// or user input cannot be read.
pub fn first_time_setup(input: &dyn UserInput) -> Result<PromptNoteConfig, ConfigError> {
    println!("Welcome to promptnote! Let's choose where your prompts are stored.\n");

    let choices = [BackendKind::File, BackendKind::Kv];
    let labels: Vec<String> = vec![
        "file  (data.json and config.json in a folder)".to_string(),
        "kv    (embedded sled database)".to_string(),
    ];
    let backend = input
        .prompt_select("Storage backend", &labels, Some(0))
        .map_err(input_failed)?
        .and_then(|index| choices.get(index).copied())
        .unwrap_or_default();

    let default_dir = PromptNoteConfig::default_data_dir()?;
    let default_str = default_dir.to_string_lossy().to_string();
    let chosen = input
        .prompt_text("Data directory", Some(&default_str), false)
        .map_err(input_failed)?;

    let data_dir = match chosen {
        Some(path) if path != default_str => Some(PathBuf::from(path)),
        _ => None,
    };

    println!();
    Ok(PromptNoteConfig {
        backend,
        data_dir,
        quiet: false,
    })
}
