//! Bounded Ring Buffer
//!
//! Provides the bounded FIFO that holds the most recent samples of a sliding
//! window. Pushing into a full buffer evicts and returns the oldest element.
//! Storage grows with the number of values held, not with the capacity.

mod buffer;

pub use buffer::{RingBuffer, PREALLOC_LIMIT};
