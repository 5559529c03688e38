//! Multi-group cast controller.
//!
//! The controller owns the tracer matrix and its baseline for its whole
//! lifetime. Each cast feeds `cast_size` samples to every tracer of every
//! group, then prunes all groups against the baseline and retakes it.
//!
//! # Draw order
//!
//! Per sample iteration the RNG is consumed in a fixed order: first the
//! sampler draws `s`, then exactly one auxiliary uniform `u` is drawn and
//! shared by all `G × T` tracer updates. Sharing `u` keeps every group
//! ordered between prunes.

use rand::Rng;
use tracing::{debug, trace};

use super::config::CastConfig;
use super::matrix::TracerMatrix;
use crate::error::Result;
use crate::group::{check_group, group_ceiling, prune};
use crate::sampler::Sampler;
use crate::tracer::update_clamped;

/// Drives the casts of one floating-buoy run.
///
/// # Examples
///
/// ```rust
/// use buoy_core::cast::{CastConfig, CastController};
/// use buoy_core::rng::BuoyRng;
/// use buoy_core::sampler::UniformSampler;
///
/// let config = CastConfig::builder()
///     .num_groups(4)
///     .range(1_000)
///     .cast_size(2_000)
///     .build()
///     .unwrap();
///
/// let mut controller = CastController::new(config).unwrap();
/// let mut rng = BuoyRng::from_seed(7);
/// let locations = controller.run(&UniformSampler, &mut rng).unwrap();
///
/// assert_eq!(locations.len(), 6);
/// assert_eq!(locations[0], 0);
/// assert_eq!(locations[5], 999);
/// ```
#[derive(Clone, Debug)]
pub struct CastController {
    config: CastConfig,
    tracers: TracerMatrix,
    baseline: TracerMatrix,
    percentiles: Vec<f64>,
    /// Updates never raise a tracer past this value.
    ceiling: u32,
    casts_completed: usize,
}

impl CastController {
    /// Creates a controller with every group on the initial partition.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError` if the configuration is invalid.
    pub fn new(config: CastConfig) -> Result<Self> {
        config.validate()?;

        let tracers = TracerMatrix::new(config.num_groups(), config.num_tracers(), config.range());
        let baseline = tracers.clone();
        let percentiles = config.target_percentiles();
        let ceiling = config.range() - 1;

        Ok(Self {
            config,
            tracers,
            baseline,
            percentiles,
            ceiling,
            casts_completed: 0,
        })
    }

    /// Configuration of this run.
    #[inline]
    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    /// Current tracer matrix.
    #[inline]
    pub fn tracers(&self) -> &TracerMatrix {
        &self.tracers
    }

    /// Baseline taken at the end of the last cast.
    #[inline]
    pub fn baseline(&self) -> &TracerMatrix {
        &self.baseline
    }

    /// Target percentile of each group.
    #[inline]
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Number of casts run so far.
    #[inline]
    pub fn casts_completed(&self) -> usize {
        self.casts_completed
    }

    /// Applies one sample to every tracer with the shared auxiliary uniform `u`.
    #[inline]
    pub fn apply_sample(&mut self, sample: u32, u: f64) {
        let ceiling = self.ceiling;
        for (row, &tau) in self.tracers.groups_mut().zip(self.percentiles.iter()) {
            for x in row.iter_mut() {
                *x = update_clamped(*x, sample, u, tau, ceiling);
            }
        }
    }

    /// Prunes every group against the baseline, then retakes the baseline.
    ///
    /// Returns the number of groups that were repartitioned.
    pub fn prune_all(&mut self) -> usize {
        let mut repartitioned = 0;
        for (index, (row, base)) in self
            .tracers
            .groups_mut()
            .zip(self.baseline.groups())
            .enumerate()
        {
            let outcome = prune(row, base);
            if outcome.repartitioned {
                trace!(group = index, low = outcome.low, high = outcome.high, "group pruned");
                repartitioned += 1;
            }
        }
        self.baseline.copy_from(&self.tracers);
        repartitioned
    }

    /// Runs one cast: `cast_size` samples, then a prune of every group.
    ///
    /// In debug builds the group invariants are checked after the prune.
    ///
    /// # Errors
    ///
    /// Propagates sampler errors, and `InvariantError` from the debug checks.
    pub fn run_cast<S, R>(&mut self, sampler: &S, rng: &mut R) -> Result<usize>
    where
        S: Sampler + ?Sized,
        R: Rng + ?Sized,
    {
        let range = self.config.range();
        for _ in 0..self.config.cast_size() {
            let sample = sampler.sample(rng, 0, range)?;
            let u: f64 = rng.gen();
            self.apply_sample(sample, u);
        }

        let repartitioned = self.prune_all();
        self.casts_completed += 1;
        debug!(
            cast = self.casts_completed,
            repartitioned,
            groups = self.config.num_groups(),
            "cast complete"
        );

        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }
        Ok(repartitioned)
    }

    /// Runs `num_casts` casts and returns the buoy locations.
    ///
    /// # Errors
    ///
    /// See [`run_cast`](Self::run_cast).
    pub fn run<S, R>(&mut self, sampler: &S, rng: &mut R) -> Result<Vec<u32>>
    where
        S: Sampler + ?Sized,
        R: Rng + ?Sized,
    {
        for _ in 0..self.config.num_casts() {
            self.run_cast(sampler, rng)?;
        }
        Ok(self.locations())
    }

    /// Buoy locations `L` of length `G + 2`.
    ///
    /// `L[0] = 0`, `L[G + 1] = R - 1`, and `L[i + 1]` is the middle tracer of
    /// group `i`, capped at `R - 1`. With two tracers per group the middle
    /// tracer is also the top one, which may start at `R`.
    pub fn locations(&self) -> Vec<u32> {
        let ceiling = self.ceiling;
        let mut locations = Vec::with_capacity(self.config.num_groups() + 2);
        locations.push(0);
        locations.extend(self.tracers.middles().map(|m| m.min(ceiling)));
        locations.push(self.ceiling);
        locations
    }

    /// Checks that every group lies in its admissible range and is ordered.
    ///
    /// # Errors
    ///
    /// Returns the first `InvariantError` found.
    pub fn check_invariants(&self) -> Result<()> {
        let ceiling = group_ceiling(self.config.num_tracers(), self.config.range());
        for (index, row) in self.tracers.groups().enumerate() {
            check_group(index, row, ceiling)?;
        }
        Ok(())
    }
}

/// Runs a full cast with `config` and returns the buoy locations.
///
/// Convenience wrapper over [`CastController`].
///
/// # Errors
///
/// Returns `PreconditionError` for an invalid configuration, and propagates
/// sampler errors.
pub fn cast<S, R>(config: &CastConfig, sampler: &S, rng: &mut R) -> Result<Vec<u32>>
where
    S: Sampler + ?Sized,
    R: Rng + ?Sized,
{
    CastController::new(config.clone())?.run(sampler, rng)
}
