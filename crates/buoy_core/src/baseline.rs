//! Single-percentile baselines the buoy cast is measured against.
//!
//! - [`SingleTracer`]: one tracer starting at zero, fed a stream.
//! - [`run_shuffled_until`]: one tracer fed shuffled permutations until its
//!   relative error drops under a threshold.
//! - [`run_group_stream`]: one [`TracerGroup`] fed a stream, optionally
//!   pruned at a fixed sample frequency.
//!
//! Unlike the cast, every tracer here draws its own auxiliary uniform, and
//! only when the sample differs from the tracer.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{PreconditionError, Result};
use crate::group::{validate_percentile, TracerGroup};
use crate::tracer::{quantile_target, relative_error, update};

/// A lone tracer estimating one percentile.
///
/// # Examples
///
/// ```rust
/// use buoy_core::baseline::SingleTracer;
/// use buoy_core::rng::BuoyRng;
///
/// let mut rng = BuoyRng::from_seed(1);
/// let mut tracer = SingleTracer::new(0.5).unwrap();
/// let estimate = tracer.run_stream(std::iter::repeat(100).take(1_000), &mut rng);
/// assert_eq!(estimate, 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleTracer {
    estimate: u32,
    percentile: f64,
}

impl SingleTracer {
    /// Creates a tracer at zero.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError` if `percentile` is not in (0, 1).
    pub fn new(percentile: f64) -> Result<Self> {
        Self::starting_at(percentile, 0)
    }

    /// Creates a tracer at `estimate`.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError` if `percentile` is not in (0, 1).
    pub fn starting_at(percentile: f64, estimate: u32) -> Result<Self> {
        validate_percentile(percentile)?;
        Ok(Self {
            estimate,
            percentile,
        })
    }

    /// Current estimate.
    #[inline]
    pub fn estimate(&self) -> u32 {
        self.estimate
    }

    /// Target percentile.
    #[inline]
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Feeds one sample.
    #[inline]
    pub fn observe<R: Rng + ?Sized>(&mut self, sample: u32, rng: &mut R) {
        if sample != self.estimate {
            let u: f64 = rng.gen();
            self.estimate = update(self.estimate, sample, u, self.percentile);
        }
    }

    /// Feeds every sample of `samples` and returns the final estimate.
    pub fn run_stream<I, R>(&mut self, samples: I, rng: &mut R) -> u32
    where
        I: IntoIterator<Item = u32>,
        R: Rng + ?Sized,
    {
        for sample in samples {
            self.observe(sample, rng);
        }
        self.estimate
    }
}

/// The values `0..n - 1` in shuffled order, plus one extra zero.
///
/// The last slot is filled before shuffling with 0 rather than `n - 1`, so
/// 0 appears twice and `n - 1` never appears.
pub fn shuffled_array<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u32> {
    let mut values: Vec<u32> = (0..n as u32).collect();
    if let Some(last) = values.last_mut() {
        *last = 0;
    }
    values.shuffle(rng);
    values
}

/// Outcome of one pass over a shuffled array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShuffledRun {
    /// 1-based pass number.
    pub run: usize,
    /// Estimate at the end of the pass.
    pub estimate: u32,
    /// Relative error `(actual - estimate) / actual`.
    pub error: f64,
}

/// Result of [`run_shuffled_until`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledReport {
    /// Exact target `round(τ · (n - 1))`.
    pub actual: u32,
    /// Every pass, in order.
    pub runs: Vec<ShuffledRun>,
    /// Whether the last pass met the threshold.
    pub converged: bool,
}

impl ShuffledReport {
    /// Last pass.
    pub fn last(&self) -> Option<&ShuffledRun> {
        self.runs.last()
    }
}

/// Feeds one tracer fresh shuffles of `{0, …, n - 1}` until
/// `|error| <= threshold` or `max_runs` passes have been made.
///
/// The estimate carries over between passes.
///
/// # Errors
///
/// Returns `PreconditionError` if `n < 2`, `percentile` is not in (0, 1),
/// `threshold` is negative or not finite, or `max_runs` is 0.
pub fn run_shuffled_until<R: Rng + ?Sized>(
    n: usize,
    percentile: f64,
    threshold: f64,
    max_runs: usize,
    rng: &mut R,
) -> Result<ShuffledReport> {
    if n < 2 || n > u32::MAX as usize {
        return Err(PreconditionError::InvalidParameter {
            name: "size",
            value: format!("must lie in [2, {}], got {}", u32::MAX, n),
        }
        .into());
    }
    if !(threshold.is_finite() && threshold >= 0.0) {
        return Err(PreconditionError::InvalidParameter {
            name: "threshold",
            value: format!("must be finite and non-negative, got {}", threshold),
        }
        .into());
    }
    if max_runs == 0 {
        return Err(PreconditionError::InvalidParameter {
            name: "max_runs",
            value: "must be at least 1".to_string(),
        }
        .into());
    }

    let mut tracer = SingleTracer::new(percentile)?;
    let actual = quantile_target(percentile, (n - 1) as u32);
    let mut runs = Vec::new();

    for run in 1..=max_runs {
        let input = shuffled_array(n, rng);
        let estimate = tracer.run_stream(input, rng);
        let error = relative_error(actual, estimate);
        debug!(run, estimate, error, "shuffled pass complete");

        runs.push(ShuffledRun {
            run,
            estimate,
            error,
        });
        if error.abs() <= threshold {
            return Ok(ShuffledReport {
                actual,
                runs,
                converged: true,
            });
        }
    }

    Ok(ShuffledReport {
        actual,
        runs,
        converged: false,
    })
}

/// Per-tracer accuracy of a [`TracerGroup`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct TracerReport {
    /// Exact target `round(τ · (R - 1))`.
    pub actual: u32,
    /// Final tracer values.
    pub tracers: Vec<u32>,
    /// Relative error of each tracer.
    pub errors: Vec<f64>,
    /// Number of prunes performed.
    pub prunes: usize,
}

impl TracerReport {
    /// Scores `tracers` against `round(percentile · (range - 1))`.
    pub fn new(tracers: &[u32], percentile: f64, range: u32, prunes: usize) -> Self {
        let actual = quantile_target(percentile, range.saturating_sub(1));
        Self {
            actual,
            tracers: tracers.to_vec(),
            errors: tracers.iter().map(|&t| relative_error(actual, t)).collect(),
            prunes,
        }
    }

    /// Error of the tracer closest to the target.
    pub fn best_error(&self) -> Option<f64> {
        self.errors.iter().copied().min_by(|a, b| a.abs().total_cmp(&b.abs()))
    }
}

/// Feeds `samples` to `group`, pruning before sample `k` whenever
/// `k != 0` and `k mod prune_every == 0`.
///
/// Returns the number of prunes performed.
///
/// # Errors
///
/// Returns `PreconditionError` if `prune_every` is `Some(0)`.
pub fn run_group_stream<I, R>(
    group: &mut TracerGroup,
    samples: I,
    prune_every: Option<usize>,
    rng: &mut R,
) -> Result<usize>
where
    I: IntoIterator<Item = u32>,
    R: Rng + ?Sized,
{
    validate_prune_every(prune_every)?;

    let mut prunes = 0;
    for (k, sample) in samples.into_iter().enumerate() {
        prunes += prune_if_due(group, k, prune_every)?;
        group.observe(sample, rng);
    }
    Ok(prunes)
}

/// Runs a `num_tracers` group over `num_samples` uniform samples in `[0, range)`.
///
/// Samples and tracer draws share `rng`. The group is clamped when pruned
/// and left unclamped otherwise.
///
/// # Errors
///
/// Returns `PreconditionError` for invalid group parameters or `Some(0)`
/// pruning frequency.
///
/// # Examples
///
/// ```rust
/// use buoy_core::baseline::uniform_group_baseline;
/// use buoy_core::rng::BuoyRng;
///
/// let mut rng = BuoyRng::from_seed(9);
/// let report = uniform_group_baseline(11, 1_000, 0.75, 50_000, Some(10_000), &mut rng).unwrap();
/// assert_eq!(report.actual, 749);
/// assert_eq!(report.prunes, 4);
/// ```
pub fn uniform_group_baseline<R: Rng + ?Sized>(
    num_tracers: usize,
    range: u32,
    percentile: f64,
    num_samples: usize,
    prune_every: Option<usize>,
    rng: &mut R,
) -> Result<TracerReport> {
    validate_prune_every(prune_every)?;
    let mut group =
        TracerGroup::new(num_tracers, range, percentile)?.with_clamping(prune_every.is_some());

    let mut prunes = 0;
    for k in 0..num_samples {
        prunes += prune_if_due(&mut group, k, prune_every)?;
        let sample = rng.gen_range(0..range);
        group.observe(sample, rng);
    }

    debug!(prunes, estimate = group.estimate(), "uniform group baseline complete");
    Ok(TracerReport::new(group.tracers(), percentile, range, prunes))
}

fn validate_prune_every(prune_every: Option<usize>) -> Result<()> {
    if prune_every == Some(0) {
        return Err(PreconditionError::InvalidParameter {
            name: "prune_every",
            value: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Prunes before sample `k` if the schedule calls for it; returns 1 if pruned.
fn prune_if_due(group: &mut TracerGroup, k: usize, prune_every: Option<usize>) -> Result<usize> {
    match prune_every {
        Some(frequency) if k != 0 && k % frequency == 0 => {
            let outcome = group.prune();
            debug!(sample = k, low = outcome.low, high = outcome.high, "group pruned");
            if cfg!(debug_assertions) {
                group.check_invariants()?;
            }
            Ok(1)
        }
        _ => Ok(0),
    }
}
