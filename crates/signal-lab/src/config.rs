//! Lab configuration

use crate::LabError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "signal-lab.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "SIGNAL_LAB_CONFIG";

/// Prefix for per-field environment overrides, e.g. `SIGNAL_LAB_CHUNK_SIZE`
pub const ENV_PREFIX: &str = "SIGNAL_LAB";

/// Lab configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Number of synthetic samples to generate
    pub samples: usize,

    /// RNG seed for the synthetic noise
    pub seed: u64,

    /// Samples per feature chunk
    pub chunk_size: usize,

    /// Sliding window (in chunks) for RMS smoothing
    pub moving_window: usize,

    /// Log at debug level
    pub verbose: bool,

    /// Emit logs as JSON lines
    pub json_logs: bool,

    /// Warn when a timed step exceeds this many milliseconds
    pub slow_threshold_ms: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            samples: 5000,
            seed: 0,
            chunk_size: 1024,
            moving_window: 5,
            verbose: false,
            json_logs: false,
            slow_threshold_ms: None,
        }
    }
}

impl LabConfig {
    /// Load defaults, then the config file, then `SIGNAL_LAB_*` overrides.
    ///
    /// Without an explicit path, `SIGNAL_LAB_CONFIG` or `signal-lab.toml` is
    /// tried; a missing default file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, LabError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var_os(CONFIG_PATH_ENV) {
                Some(p) => (PathBuf::from(p), true),
                None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            },
        };

        let builder = Config::builder()
            .add_source(File::from(path.as_path()).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(builder)
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, LabError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, LabError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that would leave the pipeline with nothing to do
    pub fn validate(&self) -> Result<(), LabError> {
        let checks = [
            ("samples", self.samples),
            ("chunk_size", self.chunk_size),
            ("moving_window", self.moving_window),
        ];
        match checks.iter().find(|(_, value)| *value == 0) {
            Some(&(field, _)) => Err(LabError::InvalidSetting { field }),
            None => Ok(()),
        }
    }
}
