//! Floating-Buoy CLI - streaming percentile estimation from the command line
//!
//! # Commands
//!
//! - `floating-buoy cast` - Estimate all 101 percentiles of a sampler
//! - `floating-buoy tracer` - Run a single-percentile tracer baseline
//! - `floating-buoy shuffled` - Run one tracer over shuffled arrays until it converges
//!
//! Results go to stdout; logs go to stderr, filtered by `RUST_LOG` or
//! `--log-level`.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use buoy_core::cast::{
    DEFAULT_CAST_SIZE, DEFAULT_NUM_CASTS, DEFAULT_NUM_GROUPS, DEFAULT_NUM_TRACERS, DEFAULT_RANGE,
};
use buoy_core::SamplerKind;

mod commands;
mod error;

pub use error::{CliError, Result};

/// Floating-Buoy percentile estimator
#[derive(Parser)]
#[command(name = "floating-buoy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate percentiles 0..=100 and print one per line
    Cast {
        /// Sample distribution (uniform, gaussian, beta, power-law)
        #[arg(short, long, default_value_t = SamplerKind::Uniform)]
        distribution: SamplerKind,

        /// Number of tracer groups; 100 must be divisible by groups + 1
        #[arg(short, long, default_value_t = DEFAULT_NUM_GROUPS)]
        groups: usize,

        /// Tracers per group
        #[arg(short, long, default_value_t = DEFAULT_NUM_TRACERS)]
        tracers: usize,

        /// Exclusive upper bound of the sample range
        #[arg(short, long, default_value_t = DEFAULT_RANGE)]
        range: u32,

        /// Samples per cast
        #[arg(long, default_value_t = DEFAULT_CAST_SIZE)]
        cast_size: usize,

        /// Number of casts
        #[arg(short, long, default_value_t = DEFAULT_NUM_CASTS)]
        casts: usize,

        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also print the error against the uniform quantiles
        #[arg(long)]
        report_error: bool,
    },

    /// Run a tracer baseline over uniform samples
    Tracer {
        /// Target percentile in (0, 1)
        #[arg(short, long, default_value_t = 0.75)]
        percentile: f64,

        /// Exclusive upper bound of the sample range
        #[arg(short, long, default_value_t = DEFAULT_RANGE)]
        range: u32,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 1_000_000)]
        samples: usize,

        /// Number of tracers (1 runs a lone tracer starting at 0)
        #[arg(short, long, default_value_t = 1)]
        tracers: usize,

        /// Prune the group before every multiple of this many samples
        #[arg(long)]
        prune_every: Option<usize>,

        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Feed one tracer shuffled arrays until its error drops under a threshold
    Shuffled {
        /// Array size
        #[arg(short = 'n', long, default_value_t = 1_000_000)]
        size: usize,

        /// Target percentile in (0, 1)
        #[arg(short, long, default_value_t = 0.75)]
        percentile: f64,

        /// Stopping threshold on the absolute relative error
        #[arg(short, long, default_value_t = 0.0001)]
        threshold: f64,

        /// Maximum number of passes
        #[arg(short, long, default_value_t = 100)]
        max_runs: usize,

        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| {
            CliError::InvalidArgument(format!("Invalid log level '{}': {}", log_level, e))
        })?,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Cast {
            distribution,
            groups,
            tracers,
            range,
            cast_size,
            casts,
            seed,
            report_error,
        } => commands::cast::run(&commands::cast::CastArgs {
            distribution,
            groups,
            tracers,
            range,
            cast_size,
            casts,
            seed,
            report_error,
        }),
        Commands::Tracer {
            percentile,
            range,
            samples,
            tracers,
            prune_every,
            seed,
        } => commands::tracer::run(percentile, range, samples, tracers, prune_every, seed),
        Commands::Shuffled {
            size,
            percentile,
            threshold,
            max_runs,
            seed,
        } => commands::shuffled::run(size, percentile, threshold, max_runs, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cast_defaults() {
        let cli = Cli::try_parse_from(["floating-buoy", "cast"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Cast {
                distribution,
                groups,
                tracers,
                range,
                cast_size,
                casts,
                seed,
                report_error,
            } => {
                assert_eq!(distribution, SamplerKind::Uniform);
                assert_eq!(groups, 99);
                assert_eq!(tracers, 11);
                assert_eq!(range, 1_000_000);
                assert_eq!(cast_size, 10_000);
                assert_eq!(casts, 3);
                assert_eq!(seed, None);
                assert!(!report_error);
            }
            _ => panic!("expected cast command"),
        }
    }

    #[test]
    fn test_distribution_parsing() {
        let cli = Cli::try_parse_from(["floating-buoy", "cast", "-d", "power-law", "--seed", "9"])
            .unwrap();
        match cli.command {
            Commands::Cast {
                distribution, seed, ..
            } => {
                assert_eq!(distribution, SamplerKind::PowerLaw);
                assert_eq!(seed, Some(9));
            }
            _ => panic!("expected cast command"),
        }

        assert!(Cli::try_parse_from(["floating-buoy", "cast", "-d", "cauchy"]).is_err());
    }

    #[test]
    fn test_tracer_prune_flag() {
        let cli = Cli::try_parse_from([
            "floating-buoy",
            "tracer",
            "--tracers",
            "11",
            "--prune-every",
            "100000",
        ])
        .unwrap();
        match cli.command {
            Commands::Tracer {
                tracers,
                prune_every,
                percentile,
                ..
            } => {
                assert_eq!(tracers, 11);
                assert_eq!(prune_every, Some(100_000));
                assert_eq!(percentile, 0.75);
            }
            _ => panic!("expected tracer command"),
        }
    }
}
