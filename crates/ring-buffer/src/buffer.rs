//! Ring Buffer Implementation

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Slots reserved up front; storage beyond this grows as values arrive
pub const PREALLOC_LIMIT: usize = 4096;

/// Bounded FIFO ring buffer
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Values in arrival order, oldest at the front
    values: VecDeque<T>,
    /// Maximum number of values held
    capacity: NonZeroUsize,
}

impl<T: Copy> RingBuffer<T> {
    /// Create a new ring buffer with given capacity
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity.get().min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    /// Push a value, returning the evicted oldest value if the buffer was full
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.values.len() == self.capacity.get() {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    /// Copy the contents out, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().copied().collect()
    }

    /// Get the number of values currently in the buffer
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(capacity: usize) -> RingBuffer<f64> {
        RingBuffer::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_push_and_read() {
        let mut buffer = buffer(10);

        for i in 0..5 {
            assert_eq!(buffer.push(i as f64 * 100.0), None);
        }

        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.to_vec(), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_overwrite_oldest() {
        let mut buffer = buffer(5);

        let evicted: Vec<f64> = (0..10).filter_map(|i| buffer.push(i as f64)).collect();

        assert_eq!(buffer.len(), 5);
        assert_eq!(evicted, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buffer.to_vec(), vec![5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_capacity_one_replaces() {
        let mut buffer = buffer(1);
        assert_eq!(buffer.push(3.0), None);
        assert_eq!(buffer.push(4.0), Some(3.0));
        assert_eq!(buffer.to_vec(), vec![4.0]);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut buffer: RingBuffer<f64> = RingBuffer::new(NonZeroUsize::MAX);
        assert_eq!(buffer.capacity(), usize::MAX);

        for i in 0..10 {
            assert_eq!(buffer.push(i as f64), None);
        }
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn test_clear() {
        let mut buffer = buffer(3);
        buffer.push(1.0);
        buffer.push(2.0);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.push(5.0), None);
        assert_eq!(buffer.to_vec(), vec![5.0]);
    }

    proptest::proptest! {
        #[test]
        fn prop_matches_deque_model(
            capacity in 1usize..16,
            values in proptest::collection::vec(-1e6f64..1e6, 0..64),
        ) {
            let mut buffer = buffer(capacity);
            let mut model = std::collections::VecDeque::new();

            for value in values {
                model.push_back(value);
                let expected = if model.len() > capacity { model.pop_front() } else { None };
                proptest::prop_assert_eq!(buffer.push(value), expected);
                proptest::prop_assert_eq!(buffer.len(), model.len());
            }

            proptest::prop_assert_eq!(buffer.to_vec(), model.into_iter().collect::<Vec<_>>());
        }
    }
}
