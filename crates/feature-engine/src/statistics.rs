//! Batch Feature Computation

use serde::{Deserialize, Serialize};

/// Column labels matching [`FeatureVector::to_row`]
pub const FEATURE_NAMES: [&str; 4] = ["rms", "zero_crossings", "peak_to_peak", "mad"];

/// Summary of one batch of samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Root mean square
    pub rms: f64,
    /// Sign changes between consecutive samples
    pub zero_crossings: usize,
    /// Max minus min
    pub peak_to_peak: f64,
    /// Mean absolute deviation about the mean
    pub mean_abs_deviation: f64,
}

impl FeatureVector {
    /// Compute all features from a slice of values
    pub fn compute(values: &[f64]) -> Self {
        Self {
            rms: rms(values),
            zero_crossings: zero_crossings(values),
            peak_to_peak: peak_to_peak(values),
            mean_abs_deviation: mean_absolute_deviation(values),
        }
    }

    /// Flatten to `[rms, zero_crossings, peak_to_peak, mad]`
    pub fn to_row(&self) -> [f64; 4] {
        [
            self.rms,
            self.zero_crossings as f64,
            self.peak_to_peak,
            self.mean_abs_deviation,
        ]
    }
}

/// Root mean square, 0.0 for an empty slice
pub fn rms(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean_sq = values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64;
    mean_sq.sqrt()
}

/// Count sign changes between consecutive samples.
///
/// Zero counts as positive, so touching zero from above is not a crossing.
pub fn zero_crossings(values: &[f64]) -> usize {
    values
        .windows(2)
        .filter(|pair| (pair[0] < 0.0) != (pair[1] < 0.0))
        .count()
}

/// Range of the values, 0.0 for an empty slice
pub fn peak_to_peak(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    max - min
}

/// Mean absolute deviation about the mean, 0.0 for an empty slice
pub fn mean_absolute_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).abs()).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms_computation() {
        let values = vec![3.0, -4.0];
        // sqrt((9 + 16) / 2)
        assert!((rms(&values) - 12.5f64.sqrt()).abs() < 1e-12);
        assert!((rms(&[2.0, 2.0, 2.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_crossings() {
        assert_eq!(zero_crossings(&[1.0, -1.0, 1.0, -1.0]), 3);
        assert_eq!(zero_crossings(&[1.0, 2.0, 3.0]), 0);
        // Zero is treated as positive
        assert_eq!(zero_crossings(&[1.0, 0.0, 2.0]), 0);
        assert_eq!(zero_crossings(&[-1.0, 0.0, -2.0]), 2);
        assert_eq!(zero_crossings(&[5.0]), 0);
    }

    #[test]
    fn test_peak_to_peak() {
        assert_eq!(peak_to_peak(&[3.0, -2.0, 7.5, 0.0]), 9.5);
        assert_eq!(peak_to_peak(&[4.0]), 0.0);
    }

    #[test]
    fn test_mean_absolute_deviation() {
        // mean 5, deviations 3 1 1 3
        let values = vec![2.0, 4.0, 6.0, 8.0];
        assert!((mean_absolute_deviation(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_values() {
        let stats = FeatureVector::compute(&[]);
        assert_eq!(stats, FeatureVector::default());
        assert_eq!(stats.to_row(), [0.0; 4]);
    }

    #[test]
    fn test_row_order_matches_names() {
        let fv = FeatureVector::compute(&[1.0, -1.0]);
        let row = fv.to_row();
        assert_eq!(FEATURE_NAMES.len(), row.len());
        assert_eq!(row, [1.0, 1.0, 2.0, 1.0]);
    }

    proptest::proptest! {
        #[test]
        fn prop_features_bounded(values in proptest::collection::vec(-1e3f64..1e3, 1..128)) {
            let fv = FeatureVector::compute(&values);
            let max_abs = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
            proptest::prop_assert!(fv.rms >= 0.0 && fv.rms <= max_abs + 1e-9);
            proptest::prop_assert!(fv.peak_to_peak >= 0.0);
            proptest::prop_assert!(fv.mean_abs_deviation <= fv.peak_to_peak + 1e-9);
            proptest::prop_assert!(fv.zero_crossings < values.len());
        }
    }
}
