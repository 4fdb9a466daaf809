//! Windowed Moving Median

use crate::sorted::SortedWindow;
use crate::{check_sample, window_size, StreamingStatistic, WindowStatsError};
use ring_buffer::{RingBuffer, PREALLOC_LIMIT};
use tracing::trace;

/// Median of the last `W` samples.
///
/// Arrival order lives in a ring buffer; the same samples are mirrored into a
/// [`SortedWindow`] for the median lookup. Eviction removes one sample equal
/// in value to the oldest, which is indistinguishable from removing that exact
/// sample as far as the median is concerned.
#[derive(Debug, Clone)]
pub struct MovingMedian {
    window: RingBuffer<f64>,
    sorted: SortedWindow,
}

impl MovingMedian {
    /// Create a tracker over the last `window` samples
    pub fn new(window: usize) -> Result<Self, WindowStatsError> {
        let capacity = window_size(window)?;
        Ok(Self {
            window: RingBuffer::new(capacity),
            sorted: SortedWindow::with_capacity(capacity.get().min(PREALLOC_LIMIT)),
        })
    }

    /// Feed a sample and return the median of the current window
    pub fn observe(&mut self, value: f64) -> Result<f64, WindowStatsError> {
        let value = check_sample(value)?;

        self.sorted.insert(value);
        if let Some(evicted) = self.window.push(value) {
            let removed = self.sorted.remove(evicted);
            debug_assert!(removed, "evicted sample missing from sorted mirror");
        }

        let median = self.sorted.median();
        trace!(window = self.capacity(), len = self.len(), median, "moving median updated");
        Ok(median)
    }

    /// Median of the current window, 0.0 when empty
    pub fn peek(&self) -> f64 {
        self.sorted.median()
    }

    /// Sorted view of the window
    pub fn sorted(&self) -> &[f64] {
        self.sorted.as_slice()
    }

    /// Samples currently in the window, oldest first
    pub fn samples(&self) -> Vec<f64> {
        self.window.to_vec()
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

    pub fn reset(&mut self) {
        self.window.clear();
        self.sorted.clear();
    }
}

impl StreamingStatistic for MovingMedian {
    fn observe(&mut self, value: f64) -> Result<f64, WindowStatsError> {
        MovingMedian::observe(self, value)
    }

    fn peek(&self) -> f64 {
        MovingMedian::peek(self)
    }

    fn len(&self) -> usize {
        MovingMedian::len(self)
    }

    fn capacity(&self) -> usize {
        MovingMedian::capacity(self)
    }

    fn reset(&mut self) {
        MovingMedian::reset(self)
    }
}
