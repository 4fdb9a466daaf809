//! Chunked feature pipeline

use crate::config::LabConfig;
use crate::synth::generate_synthetic;
use crate::timing::{timed, Timer};
use crate::LabError;
use feature_engine::{ChunkFeatures, FeatureExtractor};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Samples generated
    pub samples: usize,
    /// Chunks written
    pub chunks: usize,
    /// Last row, if any chunk was produced
    pub last: Option<ChunkFeatures>,
}

/// Generate the synthetic signal, extract per-chunk features, and write one
/// JSON object per chunk to `out`.
pub fn run_pipeline<W: Write>(config: &LabConfig, out: &mut W) -> Result<PipelineReport, LabError> {
    let _timer = Timer::start("pipeline");
    let threshold = config.slow_threshold_ms;

    let signal = timed("generate_synthetic", threshold, || {
        generate_synthetic(config.samples, config.seed)
    });
    info!("Generated {} synthetic samples (seed={})", signal.len(), config.seed);

    let mut extractor = FeatureExtractor::new(config.chunk_size, config.moving_window)?;
    let rows = timed("extract_features", threshold, || extractor.process(&signal))?;

    for row in &rows {
        serde_json::to_writer(&mut *out, row)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!("Wrote features (chunks={})", rows.len());

    Ok(PipelineReport {
        samples: signal.len(),
        chunks: rows.len(),
        last: rows.last().copied(),
    })
}
