//! Presentation settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial order of the move list.
    sort_order: SortOrder,

    /// Whether move labels include the `(row, col)` of the move.
    show_locations: bool,

    /// File that receives log output while the TUI owns the terminal.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Ascending,
            show_locations: true,
            log_file: PathBuf::from("rewind.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
