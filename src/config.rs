//! Application configuration loaded from TOML.

use crate::games::tictactoe::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_tictactoe.toml";

/// Defaults for a new game and for logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Symbol played by seat 0, which always moves first.
    #[serde(default = "default_first_symbol")]
    first_symbol: Symbol,

    /// Whether seat 1 is the computer.
    #[serde(default)]
    vs_bot: bool,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_symbol() -> Symbol {
    Symbol::X
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_symbol: default_first_symbol(),
            vs_bot: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
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

        info!(first_symbol = %config.first_symbol, vs_bot = config.vs_bot, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the given file, or the default file if it exists, or defaults.
    ///
    /// An explicitly named file must exist; the default one is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first_symbol: Option<Symbol>, vs_bot: Option<bool>) -> Self {
        if let Some(symbol) = first_symbol {
            self.first_symbol = symbol;
        }
        if let Some(vs_bot) = vs_bot {
            self.vs_bot = vs_bot;
        }
        self
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
