//! Combined Mean/Median Tracker

use crate::{check_sample, MovingAverage, MovingMedian, WindowStatsError};
use serde::{Deserialize, Serialize};

/// Statistics of the window after an update
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    /// Mean of the samples in the window
    pub mean: f64,
    /// Median of the samples in the window
    pub median: f64,
    /// Samples currently held (at most the window size)
    pub len: usize,
}

/// Mean and median over the same sliding window
#[derive(Debug, Clone)]
pub struct WindowStats {
    average: MovingAverage,
    median: MovingMedian,
}

impl WindowStats {
    pub fn new(window: usize) -> Result<Self, WindowStatsError> {
        Ok(Self {
            average: MovingAverage::new(window)?,
            median: MovingMedian::new(window)?,
        })
    }

    /// Feed a sample to both trackers.
    ///
    /// The sample is validated once up front so a rejection leaves both
    /// trackers untouched.
    pub fn observe(&mut self, value: f64) -> Result<WindowSnapshot, WindowStatsError> {
        let value = check_sample(value)?;
        let mean = self.average.observe(value)?;
        let median = self.median.observe(value)?;
        Ok(WindowSnapshot {
            mean,
            median,
            len: self.average.len(),
        })
    }

    pub fn peek(&self) -> WindowSnapshot {
        WindowSnapshot {
            mean: self.average.peek(),
            median: self.median.peek(),
            len: self.average.len(),
        }
    }

    pub fn average(&self) -> &MovingAverage {
        &self.average
    }

    pub fn median(&self) -> &MovingMedian {
        &self.median
    }

    pub fn capacity(&self) -> usize {
        self.average.capacity()
    }

    pub fn reset(&mut self) {
        self.average.reset();
        self.median.reset();
    }
}
