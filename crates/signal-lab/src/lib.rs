//! Signal Lab
//!
//! Wires configuration, logging, synthetic data, and the chunked feature
//! pipeline together for the `signal-lab` binary.

pub mod config;
mod error;
pub mod pipeline;
pub mod synth;
pub mod timing;

pub use config::LabConfig;
pub use error::LabError;
pub use pipeline::{run_pipeline, PipelineReport};
pub use synth::generate_synthetic;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging to stderr, leaving stdout for pipeline output
pub fn init_logging(config: &LabConfig) -> Result<(), LabError> {
    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LabError::Logging(e.to_string()))
}
