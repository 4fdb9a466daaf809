//! Signal Lab - Main Entry Point

use anyhow::Context;
use signal_lab::{init_logging, run_pipeline, LabConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = LabConfig::load(None).context("loading configuration")?;
    init_logging(&config)?;

    info!("=== Signal Lab v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Running pipeline: samples={}, chunk_size={}, moving_window={}",
        config.samples, config.chunk_size, config.moving_window
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run_pipeline(&config, &mut out).context("running feature pipeline")?;

    info!(
        "Processed {} samples into {} chunks",
        report.samples, report.chunks
    );
    Ok(())
}
