//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `generations-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and provides a loader that reads the file. Every field
//! has a default, so a missing section (or an empty file) is valid.

use std::path::Path;

use generations_types::{AgeThresholds, EvolutionMode};
use serde::Deserialize;
use tracing::warn;

use crate::factory::{CHANCE_OF_LIFE, DEFAULT_BOARD_SIZE};

/// Environment variable that overrides `board.seed`.
pub const SEED_ENV_VAR: &str = "GENERATIONS_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Starting board settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Evolution mode and age staging.
    #[serde(default)]
    pub evolution: EvolutionConfig,

    /// Tick cadence and run bounds.
    #[serde(default)]
    pub simulation: RunConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `GENERATIONS_SEED` overrides `board.seed` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document carries no sections at all.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.board.apply_env_overrides();
        Ok(config)
    }
}

/// Starting board settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square board.
    #[serde(default = "default_board_size")]
    pub size: usize,

    /// Probability that a seeded cell starts alive.
    #[serde(default = "default_life_chance")]
    pub life_chance: f64,

    /// Random seed for reproducible boards. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BoardConfig {
    /// Override the seed with `GENERATIONS_SEED` when it is set.
    ///
    /// A value that does not parse as `u64` is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(SEED_ENV_VAR) {
            match val.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => warn!(
                    value = %val,
                    error = %e,
                    "ignoring unparsable {SEED_ENV_VAR}"
                ),
            }
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: default_board_size(),
            life_chance: default_life_chance(),
            seed: None,
        }
    }
}

/// Evolution mode and age staging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EvolutionConfig {
    /// What counts as a finished run.
    #[serde(default)]
    pub mode: EvolutionMode,

    /// Age bounds for each survivor tier.
    #[serde(default)]
    pub thresholds: AgeThresholds,
}

/// Tick cadence and run bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many generations (0 = unlimited).
    #[serde(default)]
    pub max_generations: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_generations: 0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

const fn default_life_chance() -> f64 {
    CHANCE_OF_LIFE
}

const fn default_tick_interval_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_owned()
}
