//! promptnote CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Most used prompts (default command)
//! promptnote
//! promptnote top -n 5
//!
//! # Search and inspect
//! promptnote list code
//! promptnote show 3f2a
//!
//! # Create, edit, use, delete
//! promptnote new -t "Translate" -c "Translate into French:" --tag language
//! promptnote edit 3f2a --add-tag writing
//! promptnote copy 3f2a
//! promptnote rm 3f2a
//!
//! # Move prompts between machines
//! promptnote export ~/backup
//! promptnote import ~/backup/prompt_notes_export.json
//! ```
//!
//! # Configuration
//!
//! On first run, promptnote prompts for the storage backend and data
//! directory. Configuration is stored in the user's config directory
//! (`~/.config/promptnote/config.toml` on Linux). Set `PROMPTNOTE_LOG=debug`
//! for diagnostics on stderr.

use clap::CommandFactory;
use promptnote::{
    cli::{Cli, Commands, ConfigCommands},
    clipboard::{Clipboard, StdoutClipboard, SystemClipboard},
    commands::{self, edit::EditArgs},
    config::PromptNoteConfig,
    logging,
    state::App,
    storage::open_store,
    ui::DialoguerInput,
    PromptNoteError,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, PromptNoteError>;

/// Handle the config command - read or change application settings
///
/// # Errors
///
/// Returns `PromptNoteError` if the setting is malformed, the key is unknown,
/// the value does not parse, or the configuration cannot be saved.
fn handle_config_command(mut config: PromptNoteConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = ConfigCommands::split_setting(setting).ok_or_else(|| {
                PromptNoteError::InvalidInput("Invalid format. Use: promptnote config set key=value".into())
            })?;
            config.set_value(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get_value(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}

/// Dispatch a command that works on the loaded prompt collection
fn run(app: &mut App, command: Commands, quiet: bool) -> Result<()> {
    match command {
        Commands::Top { limit } => commands::top(app, limit, quiet),
        Commands::List { query } => commands::list(app, query.as_deref(), quiet),
        Commands::Show { id } => commands::list::show(app, &id, quiet),
        Commands::New { title, content, tags } => {
            commands::edit::create(app, &title, &content, &tags, quiet).map(drop)
        }
        Commands::Edit { id, title, content, add_tags, remove_tags } => {
            let args = EditArgs { title, content, add_tags, remove_tags };
            commands::edit::execute(app, &id, &args, quiet).map(drop)
        }
        Commands::Copy { id, print } => {
            let clipboard: &dyn Clipboard = if print { &StdoutClipboard } else { &SystemClipboard };
            commands::copy(app, &id, clipboard, quiet || print).map(drop)
        }
        Commands::Delete { id, yes } => {
            commands::delete(app, &id, &DialoguerInput::new(), yes, quiet).map(drop)
        }
        Commands::Export { dir } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            commands::transfer::export(app, &dir, quiet)
        }
        Commands::Import { file } => commands::transfer::import(app, &file, quiet),
        Commands::Theme { value } => commands::prefs::theme(app, value, quiet).map(drop),
        Commands::Lang { value } => commands::prefs::language(app, value, quiet).map(drop),
        Commands::Config { .. } | Commands::Completions { .. } => Err(PromptNoteError::InvalidInput(
            "command does not operate on prompts".into(),
        )),
    }
}

/// Main entry point for the promptnote application
///
/// Parses arguments, loads configuration, opens the configured store, and
/// dispatches to the command handler.
///
/// # Errors
///
/// Returns `PromptNoteError` if configuration loading fails, the store cannot
/// be opened, or the command fails.
fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse_args();
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = PromptNoteConfig::load_or_setup(&DialoguerInput::new())?;
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let backend = cli.backend.unwrap_or(config.backend);
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.data_dir()?,
    };

    let store = open_store(backend, &data_dir)?;
    let mut app = App::load(store)?;
    run(&mut app, command, quiet)
}
