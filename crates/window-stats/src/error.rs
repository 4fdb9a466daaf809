//! Window Statistics Error Types

use thiserror::Error;

/// Errors raised by the streaming trackers
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindowStatsError {
    /// Window size below one
    #[error("Invalid window size {window}: must be at least 1")]
    InvalidConfiguration { window: usize },

    /// Sample is NaN or infinite
    #[error("Invalid sample {value}: must be a finite number")]
    InvalidInput { value: f64 },
}
