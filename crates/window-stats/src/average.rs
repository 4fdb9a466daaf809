//! Windowed Moving Average

use crate::{check_sample, window_size, StreamingStatistic, WindowStatsError};
use ring_buffer::RingBuffer;
use tracing::trace;

/// Mean of the last `W` samples, kept with a running sum.
///
/// The sum is Neumaier-compensated: low-order bits lost when a large sample
/// dominates the sum are carried in `compensation`, so they reappear once
/// that sample is evicted.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// FIFO of the samples in the window
    window: RingBuffer<f64>,
    /// Sum of everything in `window`, less the low-order error term
    sum: f64,
    /// Rounding error not yet folded into `sum`
    compensation: f64,
}

impl MovingAverage {
    /// Create a tracker over the last `window` samples
    pub fn new(window: usize) -> Result<Self, WindowStatsError> {
        Ok(Self {
            window: RingBuffer::new(window_size(window)?),
            sum: 0.0,
            compensation: 0.0,
        })
    }

    /// Feed a sample and return the mean of the current window
    pub fn observe(&mut self, value: f64) -> Result<f64, WindowStatsError> {
        let value = check_sample(value)?;

        if let Some(evicted) = self.window.push(value) {
            self.accumulate(-evicted);
        }
        self.accumulate(value);

        let mean = self.peek();
        trace!(window = self.capacity(), len = self.len(), mean, "moving average updated");
        Ok(mean)
    }

    /// Mean of the current window, 0.0 when empty
    pub fn peek(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        self.sum() / self.window.len() as f64
    }

    /// Running sum of the window
    pub fn sum(&self) -> f64 {
        self.sum + self.compensation
    }

    /// Neumaier step: add `value` and keep whatever rounding dropped
    fn accumulate(&mut self, value: f64) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - total) + value;
        } else {
            self.compensation += (value - total) + self.sum;
        }
        self.sum = total;
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Window size fixed at construction
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Samples currently in the window, oldest first
    pub fn samples(&self) -> Vec<f64> {
        self.window.to_vec()
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.sum = 0.0;
        self.compensation = 0.0;
    }
}

impl StreamingStatistic for MovingAverage {
    fn observe(&mut self, value: f64) -> Result<f64, WindowStatsError> {
        MovingAverage::observe(self, value)
    }

    fn peek(&self) -> f64 {
        MovingAverage::peek(self)
    }

    fn len(&self) -> usize {
        MovingAverage::len(self)
    }

    fn capacity(&self) -> usize {
        MovingAverage::capacity(self)
    }

    fn reset(&mut self) {
        MovingAverage::reset(self)
    }
}
