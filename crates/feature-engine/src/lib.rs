//! Feature Engineering Engine
//!
//! Splits a signal into fixed-size chunks, reduces each chunk to a
//! [`FeatureVector`], and smooths the per-chunk RMS over a sliding window.

mod batch;
mod error;
mod features;
mod statistics;

pub use batch::{chunks, Chunks};
pub use error::FeatureError;
pub use features::{ChunkFeatures, FeatureExtractor};
pub use statistics::{
    mean_absolute_deviation, peak_to_peak, rms, zero_crossings, FeatureVector, FEATURE_NAMES,
};
