//! Loads runtime settings from `phonebook.toml` and command-line overrides.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File consulted when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "phonebook.toml";
/// Database file used when neither the flags nor the config file name one.
pub const DEFAULT_DATABASE: &str = "phonebook.db";

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    database: Option<PathBuf>,
    max_attempts: Option<u32>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: PathBuf,
    /// Retry limit per prompted field; `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            max_attempts: None,
        }
    }
}

impl Config {
    /// Reads `path` if given, otherwise `phonebook.toml` in the working
    /// directory when it exists. A missing default file yields defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Parses TOML configuration text.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let file: FileConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        if file.max_attempts == Some(0) {
            return Err("max_attempts must be at least 1".to_string());
        }
        let defaults = Self::default();
        Ok(Self {
            database: file.database.unwrap_or(defaults.database),
            max_attempts: file.max_attempts,
        })
    }

    /// Applies command-line values on top of the file settings.
    pub fn with_overrides(mut self, database: Option<PathBuf>, max_attempts: Option<u32>) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if max_attempts.is_some() {
            self.max_attempts = max_attempts;
        }
        self
    }
}
