//! Application configuration
//!
//! Stored as TOML in the user's config directory
//! (`~/.config/promptnote/config.toml` on Linux). It picks the storage
//! backend and the directory the backend keeps its data in.

mod setup;

pub use setup::first_time_setup;

use crate::storage::BackendKind;
use crate::ui::input::UserInput;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `config set` and `config get`
pub const KEYS: &[&str] = &["backend", "data_dir", "quiet"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PromptNoteConfig {
    /// Storage backend used when `--backend` is not given
    #[serde(default)]
    pub backend: BackendKind,

    /// Data directory; the platform data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl PromptNoteConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("promptnote").join("config.toml"))
    }

    /// Default data directory, `<data_local_dir>/promptnote/database`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
        dirs::data_local_dir()
            .map(|dir| dir.join("promptnote").join("database"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }

    /// Configured data directory, falling back to [`Self::default_data_dir`]
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no directory is configured and the system
    /// data directory cannot be determined.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.data_dir
            .clone()
            .map_or_else(Self::default_data_dir, Ok)
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Load configuration, running first-time setup if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup(input: &dyn UserInput) -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = first_time_setup(input)?;
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Current value of `key` as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an unresolvable data directory.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "backend" => Ok(self.backend.to_string()),
            "data_dir" => Ok(self.data_dir()?.display().to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set `key` from text
    ///
    /// An empty `data_dir` resets it to the platform default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "backend" => {
                self.backend = value.parse().map_err(ConfigError::Message)?;
            }
            "data_dir" => {
                self.data_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for quiet: '{value}'. Use true or false"))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PromptNoteConfig::default();
        assert_eq!(config.backend, BackendKind::File);
        assert!(config.data_dir.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_load_from_missing_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PromptNoteConfig::load_from(&path).unwrap();
        assert_eq!(config, PromptNoteConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = PromptNoteConfig {
            backend: BackendKind::Kv,
            data_dir: Some(dir.path().join("data")),
            quiet: true,
        };

        config.save_to(&path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("backend = \"kv\""));

        assert_eq!(PromptNoteConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let config = PromptNoteConfig::load_from(&path).unwrap();
        assert!(config.quiet);
        assert_eq!(config.backend, BackendKind::File);
    }

    #[test]
    fn test_configured_data_dir_wins() {
        let config = PromptNoteConfig {
            data_dir: Some(PathBuf::from("/tmp/prompts")),
            ..PromptNoteConfig::default()
        };
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/prompts"));
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = PromptNoteConfig::default();
        config.set_value("backend", "kv").unwrap();
        config.set_value("quiet", "true").unwrap();
        config.set_value("data_dir", "/tmp/x").unwrap();

        assert_eq!(config.get_value("backend").unwrap(), "kv");
        assert_eq!(config.get_value("quiet").unwrap(), "true");
        assert_eq!(config.get_value("data_dir").unwrap(), "/tmp/x");

        config.set_value("data_dir", "").unwrap();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = PromptNoteConfig::default();
        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("backend", "postgres").is_err());
        assert!(config.set_value("color", "red").is_err());
        assert!(config.get_value("color").is_err());
    }
}
