//! Sorted Multiset of Window Samples

/// Samples kept in ascending order, duplicates retained.
///
/// Inserts and removals locate their slot by binary search and shift the tail
/// of the backing vector, so both are `O(log W)` to find and `O(W)` to move.
/// Values must be finite; callers validate before inserting.
#[derive(Debug, Clone, Default)]
pub struct SortedWindow {
    values: Vec<f64>,
}

impl SortedWindow {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Insert after any equal values already present
    pub fn insert(&mut self, value: f64) {
        let idx = self.values.partition_point(|&v| v <= value);
        self.values.insert(idx, value);
    }

    /// Remove one occurrence of `value`, returning whether one was found
    pub fn remove(&mut self, value: f64) -> bool {
        let idx = self.values.partition_point(|&v| v < value);
        match self.values.get(idx) {
            Some(&found) if found == value => {
                self.values.remove(idx);
                true
            }
            _ => false,
        }
    }

    /// Median by the odd/even rule, 0.0 when empty
    pub fn median(&self) -> f64 {
        let n = self.values.len();
        if n == 0 {
            return 0.0;
        }
        if n % 2 == 1 {
            self.values[n / 2]
        } else {
            (self.values[n / 2 - 1] + self.values[n / 2]) / 2.0
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
