//! Lab Error Types

use feature_engine::FeatureError;
use thiserror::Error;

/// Errors raised while configuring or running the lab pipeline
#[derive(Debug, Error)]
pub enum LabError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but holds an unusable value
    #[error("Invalid configuration: {field} must be at least 1")]
    InvalidSetting { field: &'static str },

    /// Feature extraction failed
    #[error("Feature extraction error: {0}")]
    Feature(#[from] FeatureError),

    /// Writing results failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// I/O failure on the output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Global tracing subscriber already installed
    #[error("Failed to set tracing subscriber: {0}")]
    Logging(String),
}
