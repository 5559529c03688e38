//! Cast command implementation
//!
//! Runs the multi-group cast, links the buoys and prints the 101 percentile
//! estimates, one per line.

use std::io::{self, BufWriter, Write};

use buoy_core::cast::CastConfig;
use buoy_core::{estimate_percentiles, SamplerKind};
use tracing::info;

use super::{format_percent, resolve_seed};
use crate::Result;

/// Arguments of the cast command.
pub struct CastArgs {
    pub distribution: SamplerKind,
    pub groups: usize,
    pub tracers: usize,
    pub range: u32,
    pub cast_size: usize,
    pub casts: usize,
    pub seed: Option<u64>,
    pub report_error: bool,
}

/// Run the cast command
pub fn run(args: &CastArgs) -> Result<()> {
    let seed = resolve_seed(args.seed);
    let config = CastConfig::builder()
        .num_groups(args.groups)
        .num_tracers(args.tracers)
        .range(args.range)
        .cast_size(args.cast_size)
        .num_casts(args.casts)
        .seed(seed)
        .build()?;

    info!(
        distribution = %args.distribution,
        groups = config.num_groups(),
        tracers = config.num_tracers(),
        range = config.range(),
        seed,
        "starting cast"
    );

    let sampler = args.distribution.build()?;
    let curve = estimate_percentiles(&config, &sampler)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for buoy in &curve {
        writeln!(out, "{}", buoy)?;
    }
    if args.report_error {
        let error = curve.uniform_error(config.range() - 1);
        writeln!(out, "Error: {}", format_percent(error))?;
    }
    out.flush()?;

    Ok(())
}
