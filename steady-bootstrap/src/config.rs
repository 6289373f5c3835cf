//! Configuration loading for steady-bootstrap.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use steady_bootstrap_core::{ConfidenceLevel, DEFAULT_BOOTSTRAP_ITERATIONS};

/// Top-level configuration for steady-bootstrap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the bootstrap estimator.
    pub bootstrap: BootstrapSection,
    /// Settings for output rendering.
    pub output: OutputSection,
}

/// Configuration for the bootstrap estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapSection {
    /// Minimum number of bootstrap resamples (default: 100,000).
    pub iterations: usize,
    /// Two-sided confidence level as a decimal string (default: "0.99").
    pub confidence_level: ConfidenceLevel,
}

/// Configuration for output rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Print a human-readable report instead of the bare "center,ci" line.
    pub report: bool,
}

impl Default for BootstrapSection {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_BOOTSTRAP_ITERATIONS,
            confidence_level: ConfidenceLevel::default(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { report: false }
    }
}

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".steady-bootstrap.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the default file (`.steady-bootstrap.toml`) or
    /// use defaults.
    ///
    /// If the file doesn't exist, default configuration is returned. If the
    /// file exists but cannot be parsed, an error is returned.
    pub fn load_or_default() -> Result<Config> {
        Self::load_or_default_at(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path` if it exists, or use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_or_default_at(path: &Path) -> Result<Config> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }
}
