//! Streaming Window Statistics
//!
//! Running mean and median over the last `W` samples of a stream. Each tracker
//! owns its window and answers in place after every sample:
//!
//! - [`MovingAverage`] keeps a running sum alongside the FIFO window.
//! - [`MovingMedian`] mirrors the window into a sorted multiset.
//! - [`WindowStats`] drives both from one `observe` call.
//!
//! Trackers are single-owner and do no locking; share one across threads
//! behind the caller's own synchronization.

mod average;
mod error;
mod median;
mod sorted;
mod stats;

pub use average::MovingAverage;
pub use error::WindowStatsError;
pub use median::MovingMedian;
pub use sorted::SortedWindow;
pub use stats::{WindowSnapshot, WindowStats};

use std::num::NonZeroUsize;

/// A statistic maintained over a bounded sliding window
pub trait StreamingStatistic {
    /// Feed one sample and return the updated statistic
    fn observe(&mut self, value: f64) -> Result<f64, WindowStatsError>;

    /// Current statistic without feeding a sample (0.0 before the first sample)
    fn peek(&self) -> f64;

    /// Number of samples currently in the window
    fn len(&self) -> usize;

    /// Maximum number of samples held
    fn capacity(&self) -> usize;

    /// Drop every sample, keeping the window size
    fn reset(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feed samples in order, returning the statistic after each one.
    ///
    /// Stops at the first rejected sample; samples before it stay applied.
    fn observe_all<I>(&mut self, values: I) -> Result<Vec<f64>, WindowStatsError>
    where
        I: IntoIterator<Item = f64>,
        Self: Sized,
    {
        values.into_iter().map(|v| self.observe(v)).collect()
    }
}

/// Validate a requested window size
pub(crate) fn window_size(window: usize) -> Result<NonZeroUsize, WindowStatsError> {
    NonZeroUsize::new(window).ok_or(WindowStatsError::InvalidConfiguration { window })
}

/// Reject samples that cannot take part in a sum or an ordering
pub(crate) fn check_sample(value: f64) -> Result<f64, WindowStatsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WindowStatsError::InvalidInput { value })
    }
}
