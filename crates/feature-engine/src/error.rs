//! Feature Extraction Error Types

use thiserror::Error;
use window_stats::WindowStatsError;

/// Errors during chunking and feature extraction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Chunk size of zero
    #[error("Invalid chunk size {0}: must be at least 1")]
    InvalidChunkSize(usize),

    /// Smoothing tracker rejected its configuration or a value
    #[error("Window statistics error: {0}")]
    WindowStats(#[from] WindowStatsError),
}
