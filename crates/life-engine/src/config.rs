//! Configuration loading and typed config structures.
//!
//! Drivers configure the engine through a small YAML document. All
//! fields are optional and default to the classic setup: an 80x25 grid
//! seeded at probability 0.5, evolving under `B3/S23`.
//!
//! ```yaml
//! grid:
//!   width: 120
//!   height: 40
//!   alive_probability: 0.3
//! rule: "B36/S23"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::rules::RuleSet;

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

    /// The configured rulestring is malformed.
    #[error("invalid rulestring in config: {source}")]
    Rule {
        /// The underlying rulestring parse error.
        #[from]
        source: RuleError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid dimensions and seeding.
    #[serde(default)]
    pub grid: GridConfig,

    /// Rule set in B/S notation, e.g. `B3/S23`.
    #[serde(default = "default_rule")]
    pub rule: String,
}

/// Grid dimensions and random-seeding parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Number of rows.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Probability that a seeded cell starts alive, in `[0, 1]`.
    #[serde(default = "default_alive_probability")]
    pub alive_probability: f64,
}

const fn default_width() -> usize {
    80
}

const fn default_height() -> usize {
    25
}

const fn default_alive_probability() -> f64 {
    crate::grid::ALIVE_PROBABILITY
}

fn default_rule() -> String {
    RuleSet::conway().to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            alive_probability: default_alive_probability(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            rule: default_rule(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Yaml`] when the content is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&raw)?)
    }

    /// Parse the configured rulestring into a [`RuleSet`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rule`] when the rulestring is malformed.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        Ok(self.rule.parse::<RuleSet>()?)
    }
}
