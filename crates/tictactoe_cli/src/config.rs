//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Difficulty;
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Difficulty used when none is given on the command line.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the computer's random choices; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default)]
    log_filter: Option<String>,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    400
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            log_filter: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces file values with command-line overrides.
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
        computer_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
