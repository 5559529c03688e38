//! Shuffled command implementation
//!
//! Feeds one tracer successive shuffles of `0..size` and prints the estimate
//! and relative error after every pass.

use buoy_core::baseline::run_shuffled_until;
use buoy_core::BuoyRng;
use tracing::{info, warn};

use super::{format_percent, resolve_seed};
use crate::Result;

/// Run the shuffled command
pub fn run(
    size: usize,
    percentile: f64,
    threshold: f64,
    max_runs: usize,
    seed: Option<u64>,
) -> Result<()> {
    let seed = resolve_seed(seed);
    let mut rng = BuoyRng::from_seed(seed);
    info!(size, percentile, threshold, max_runs, seed, "starting shuffled baseline");

    let report = run_shuffled_until(size, percentile, threshold, max_runs, &mut rng)?;

    for run in &report.runs {
        println!(
            "Run {}: Estimate: {} Error: {}",
            run.run,
            run.estimate,
            format_percent(run.error)
        );
    }
    if !report.converged {
        warn!(max_runs, actual = report.actual, "threshold not reached");
    }
    Ok(())
}
