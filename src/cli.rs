//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **top**: usage ranking (default)
//! - **list** / **show**: search and inspect prompts
//! - **new** / **edit** / **delete**: manage prompts
//! - **copy**: copy a prompt to the clipboard and count the use
//! - **export** / **import**: move the collection between machines
//! - **theme** / **lang**: display preferences
//! - **config** / **completions**: application settings and shell support
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use promptnote::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["promptnote", "list", "code"]);
//! assert!(matches!(cli.get_command(), Commands::List { query: Some(_) }));
//! ```

use crate::ranking::TOP_N;
use crate::record::{Language, Theme};
use crate::storage::BackendKind;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "promptnote")]
#[command(about = "Store, search, and reuse AI prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Storage backend (overrides config)
    #[arg(long = "backend", value_enum, global = true)]
    pub backend: Option<BackendKind>,

    /// Data directory (overrides config)
    #[arg(long = "data-dir", value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the most used prompts (default)
    Top {
        /// Number of entries to show
        #[arg(short = 'n', long = "limit", default_value_t = TOP_N)]
        limit: usize,
    },

    /// List prompts, optionally filtered by title or tag
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive text matched against titles and tags
        query: Option<String>,
    },

    /// Show one prompt in full
    Show {
        /// Prompt id or unique id prefix
        id: String,
    },

    /// Create a prompt
    New {
        /// Prompt title
        #[arg(short = 't', long = "title")]
        title: String,

        /// Prompt text
        #[arg(short = 'c', long = "content")]
        content: String,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Change an existing prompt
    Edit {
        /// Prompt id or unique id prefix
        id: String,

        /// New title
        #[arg(short = 't', long = "title")]
        title: Option<String>,

        /// New prompt text
        #[arg(short = 'c', long = "content")]
        content: Option<String>,

        /// Tag to add (repeatable)
        #[arg(long = "add-tag", value_name = "TAG")]
        add_tags: Vec<String>,

        /// Tag to remove (repeatable)
        #[arg(long = "remove-tag", value_name = "TAG")]
        remove_tags: Vec<String>,
    },

    /// Copy a prompt to the clipboard and count the use
    #[command(visible_alias = "use")]
    Copy {
        /// Prompt id or unique id prefix
        id: String,

        /// Print the prompt to stdout instead of the clipboard
        #[arg(long = "print")]
        print: bool,
    },

    /// Delete a prompt
    #[command(visible_alias = "rm")]
    Delete {
        /// Prompt id or unique id prefix
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Export all prompts to prompt_notes_export.json
    Export {
        /// Target directory (current directory if omitted)
        dir: Option<PathBuf>,
    },

    /// Merge prompts from an exported JSON file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Show, set, or toggle the color theme
    Theme {
        /// light or dark; toggles when omitted
        value: Option<Theme>,
    },

    /// Show, set, or toggle the interface language
    Lang {
        /// en or zh; toggles when omitted
        value: Option<Language>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., backend=kv)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., data_dir)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl ConfigCommands {
    /// Split a `key=value` setting, trimming both sides
    #[must_use]
    pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
        let (key, value) = setting.split_once('=')?;
        let key = key.trim();
        (!key.is_empty()).then_some((key, value.trim()))
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to the ranking if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Top { limit: TOP_N })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_top() {
        let cli = Cli::parse_from(["promptnote"]);
        assert_eq!(cli.get_command(), Commands::Top { limit: 10 });
    }

    #[test]
    fn test_parse_new_with_tags() {
        let cli = Cli::parse_from([
            "promptnote", "new", "-t", "Title", "-c", "Body", "--tag", "a", "--tag", "b",
        ]);
        assert_eq!(
            cli.get_command(),
            Commands::New {
                title: "Title".into(),
                content: "Body".into(),
                tags: vec!["a".into(), "b".into()],
            }
        );
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::parse_from([
            "promptnote", "edit", "abc", "--title", "T", "--add-tag", "x", "--remove-tag", "y",
        ]);
        let Commands::Edit { id, title, content, add_tags, remove_tags } = cli.get_command() else {
            panic!("Expected Edit command");
        };
        assert_eq!(id, "abc");
        assert_eq!(title.as_deref(), Some("T"));
        assert!(content.is_none());
        assert_eq!(add_tags, vec!["x"]);
        assert_eq!(remove_tags, vec!["y"]);
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["promptnote", "rm", "1", "-y"]);
        assert_eq!(cli.get_command(), Commands::Delete { id: "1".into(), yes: true });

        let cli = Cli::parse_from(["promptnote", "use", "1"]);
        assert_eq!(cli.get_command(), Commands::Copy { id: "1".into(), print: false });

        let cli = Cli::parse_from(["promptnote", "ls"]);
        assert_eq!(cli.get_command(), Commands::List { query: None });
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "promptnote", "top", "-n", "3", "--backend", "kv", "--data-dir", "/tmp/p", "-q",
        ]);
        assert!(cli.quiet);
        assert_eq!(cli.backend, Some(BackendKind::Kv));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/p")));
        assert_eq!(cli.get_command(), Commands::Top { limit: 3 });
    }

    #[test]
    fn test_parse_preferences() {
        let cli = Cli::parse_from(["promptnote", "theme", "dark"]);
        assert_eq!(cli.get_command(), Commands::Theme { value: Some(Theme::Dark) });

        let cli = Cli::parse_from(["promptnote", "lang"]);
        assert_eq!(cli.get_command(), Commands::Lang { value: None });

        assert!(Cli::try_parse_from(["promptnote", "theme", "blue"]).is_err());
    }

    #[test]
    fn test_split_setting() {
        assert_eq!(ConfigCommands::split_setting(" backend = kv "), Some(("backend", "kv")));
        assert_eq!(ConfigCommands::split_setting("data_dir="), Some(("data_dir", "")));
        assert_eq!(ConfigCommands::split_setting("quiet"), None);
        assert_eq!(ConfigCommands::split_setting("=x"), None);
    }
}
