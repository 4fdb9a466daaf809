//! Fixed-Size Chunking

use crate::FeatureError;
use tracing::debug;

/// Iterator adapter yielding `Vec`s of up to `size` items
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    inner: I,
    size: usize,
}

/// Group `iter` into chunks of `size`; the last chunk may be shorter.
///
/// `chunks(0..7, 3)` yields `[0, 1, 2]`, `[3, 4, 5]`, `[6]`.
pub fn chunks<I>(iter: I, size: usize) -> Result<Chunks<I::IntoIter>, FeatureError>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(FeatureError::InvalidChunkSize(size));
    }
    Ok(Chunks {
        inner: iter.into_iter(),
        size,
    })
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if batch.is_empty() {
            return None;
        }
        if batch.len() < self.size {
            debug!("Yielding final chunk of size {}", batch.len());
        } else {
            debug!("Yielding chunk of size {}", batch.len());
        }
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_split() {
        let out: Vec<Vec<i32>> = chunks(0..7, 3).unwrap().collect();
        assert_eq!(out, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
    }

    #[test]
    fn test_exact_split() {
        let out: Vec<Vec<i32>> = chunks(vec![1, 2, 3, 4], 2).unwrap().collect();
        assert_eq!(out, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(chunks(Vec::<f64>::new(), 4).unwrap().count(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            chunks(0..3, 0).unwrap_err(),
            FeatureError::InvalidChunkSize(0)
        );
    }
}
