//! Chunked Feature Extraction

use crate::batch::chunks;
use crate::statistics::FeatureVector;
use crate::FeatureError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use window_stats::WindowStats;

/// Features of one chunk plus the smoothed RMS trend up to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkFeatures {
    /// Position of the chunk in the signal
    pub index: usize,
    /// Samples in the chunk (only the last may be short)
    pub len: usize,
    /// Batch features of the chunk
    pub features: FeatureVector,
    /// Moving average of chunk RMS over the smoothing window
    pub rms_mean: f64,
    /// Moving median of chunk RMS over the smoothing window
    pub rms_median: f64,
}

/// Feature extractor that processes a signal chunk by chunk
pub struct FeatureExtractor {
    /// Samples per chunk
    chunk_size: usize,
    /// Sliding statistics over per-chunk RMS
    smoothing: WindowStats,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(chunk_size: usize, smoothing_window: usize) -> Result<Self, FeatureError> {
        if chunk_size == 0 {
            return Err(FeatureError::InvalidChunkSize(chunk_size));
        }
        info!(
            "Creating feature extractor: chunk_size={}, smoothing_window={}",
            chunk_size, smoothing_window
        );
        Ok(Self {
            chunk_size,
            smoothing: WindowStats::new(smoothing_window)?,
        })
    }

    /// Extract features from one chunk and advance the smoothing window
    pub fn extract(&mut self, index: usize, chunk: &[f64]) -> Result<ChunkFeatures, FeatureError> {
        let features = FeatureVector::compute(chunk);
        let trend = self.smoothing.observe(features.rms)?;

        debug!(
            "Chunk {}: len={}, rms={:.6}, rms_mean={:.6}, rms_median={:.6}",
            index,
            chunk.len(),
            features.rms,
            trend.mean,
            trend.median
        );

        Ok(ChunkFeatures {
            index,
            len: chunk.len(),
            features,
            rms_mean: trend.mean,
            rms_median: trend.median,
        })
    }

    /// Extract features from every chunk of `signal`
    pub fn process(&mut self, signal: &[f64]) -> Result<Vec<ChunkFeatures>, FeatureError> {
        chunks(signal.iter().copied(), self.chunk_size)?
            .enumerate()
            .map(|(index, chunk)| self.extract(index, &chunk))
            .collect()
    }
}
