//! Tracer command implementation
//!
//! Runs a single-percentile baseline over uniform samples: a lone tracer when
//! one tracer is requested, otherwise a tracer group with optional pruning.

use buoy_core::baseline::{uniform_group_baseline, SingleTracer};
use buoy_core::tracer::{quantile_target, relative_error};
use buoy_core::BuoyRng;
use rand::Rng;
use tracing::info;

use super::{format_percent, resolve_seed};
use crate::{CliError, Result};

/// Run the tracer command
pub fn run(
    percentile: f64,
    range: u32,
    samples: usize,
    tracers: usize,
    prune_every: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    if range < 2 {
        return Err(CliError::InvalidArgument(format!(
            "range must be at least 2, got {}",
            range
        )));
    }
    if tracers == 0 {
        return Err(CliError::InvalidArgument("tracers must be at least 1".to_string()));
    }

    let seed = resolve_seed(seed);
    let mut rng = BuoyRng::from_seed(seed);
    info!(percentile, range, samples, tracers, seed, "starting tracer baseline");

    if tracers == 1 {
        if prune_every.is_some() {
            return Err(CliError::InvalidArgument(
                "--prune-every needs at least 2 tracers".to_string(),
            ));
        }

        let mut tracer = SingleTracer::new(percentile)?;
        for _ in 0..samples {
            let sample = rng.gen_range(0..range);
            tracer.observe(sample, &mut rng);
        }

        let actual = quantile_target(percentile, range - 1);
        let estimate = tracer.estimate();
        println!(
            "Actual: {} Estimate: {} Error: {}",
            actual,
            estimate,
            format_percent(relative_error(actual, estimate))
        );
        return Ok(());
    }

    let report = uniform_group_baseline(tracers, range, percentile, samples, prune_every, &mut rng)?;

    println!("Actual: {} Prunes: {}", report.actual, report.prunes);
    for (index, (tracer, error)) in report.tracers.iter().zip(report.errors.iter()).enumerate() {
        println!("[{}] {} {}", index, tracer, format_percent(*error));
    }
    Ok(())
}
