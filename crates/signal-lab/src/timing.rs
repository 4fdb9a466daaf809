//! Timing helpers

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Measures the time spent in a scope, logging it when dropped
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Time since the timer started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("Timer [{}] elapsed: {:.6} s", self.label, self.elapsed().as_secs_f64());
    }
}

/// Run `f`, logging how long it took.
///
/// Logs at warn level when `threshold_ms` is set and exceeded, debug otherwise.
pub fn timed<T>(label: &str, threshold_ms: Option<u64>, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match threshold_ms {
        Some(limit) if elapsed_ms > limit as f64 => {
            warn!("{} took {:.2} ms, exceeds threshold {} ms", label, elapsed_ms, limit);
        }
        _ => debug!("{} took {:.2} ms", label, elapsed_ms),
    }
    result
}
