//! Tracer groups: partitioning, prune-and-repartition, invariant checks.
//!
//! A group is an ordered run of `T >= 2` tracers chasing the same percentile.
//! The slice functions here work on any such run, whether it lives in a
//! standalone [`TracerGroup`] or in a row of the cast's tracer matrix.
//!
//! # Prune-and-repartition
//!
//! After a cast, tracers on the low side that rose strictly above their
//! baseline, and tracers on the high side that fell strictly below it, are
//! trailing the true quantile. They are discarded and the group is respread
//! uniformly over the surviving interval:
//!
//! ```text
//! baseline  0  10  20  30  40  50  60  70  80  90  100
//! tracers   0  11  22  30  40  50  60  70  80  90  100
//!                  ^low                             ^high
//! respread 22  29  36  43  50  57  64  71  78  85  92
//! ```
//!
//! Spacing uses truncating integer division, so the top of the respread group
//! may sit below the surviving upper tracer.

use rand::Rng;
use tracing::trace;

use crate::error::{InvariantError, PreconditionError, Result};
use crate::tracer::{update, update_clamped};

/// Spreads `tracers` over `[lo, hi]`: `tracers[j] = j * ((hi - lo) / (T - 1)) + lo`.
///
/// Reversed bounds are swapped; tracers fed independent draws can cross.
/// A single-tracer slice is set to the lower bound.
pub fn partition(tracers: &mut [u32], lo: u32, hi: u32) {
    let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
    let intervals = tracers.len().saturating_sub(1).max(1) as u64;
    let step = u64::from(hi.saturating_sub(lo)) / intervals;
    for (j, tracer) in tracers.iter_mut().enumerate() {
        *tracer = (j as u64 * step + u64::from(lo)) as u32;
    }
}

/// Surviving interval chosen by [`prune`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Index of the lowest surviving tracer.
    pub low: usize,
    /// Index of the highest surviving tracer.
    pub high: usize,
    /// Whether the group was respread.
    pub repartitioned: bool,
}

/// Prunes trailing tracers against `baseline` and respreads the survivors.
///
/// `low` walks up while the next tracer rose strictly above its baseline;
/// `high` walks down while the previous tracer fell strictly below its
/// baseline, never crossing `low + 1`. If either moved, the group is
/// repartitioned over `[tracers[low], tracers[high]]`.
pub fn prune(tracers: &mut [u32], baseline: &[u32]) -> PruneOutcome {
    debug_assert_eq!(tracers.len(), baseline.len());
    let n = tracers.len();
    if n < 2 {
        return PruneOutcome {
            low: 0,
            high: n.saturating_sub(1),
            repartitioned: false,
        };
    }

    let mut low = 0;
    let mut high = n - 1;

    while low + 1 < high && tracers[low + 1] > baseline[low + 1] {
        low += 1;
    }
    while high - 1 > low && tracers[high - 1] < baseline[high - 1] {
        high -= 1;
    }

    let repartitioned = low != 0 || high != n - 1;
    if repartitioned {
        let lo = tracers[low];
        let hi = tracers[high];
        trace!(low, high, lo, hi, "repartitioning group");
        partition(tracers, lo, hi);
    }

    PruneOutcome {
        low,
        high,
        repartitioned,
    }
}

/// Checks that a group stays inside `[0, ceiling]` and is non-decreasing.
///
/// `group` only labels the error.
pub fn check_group(group: usize, tracers: &[u32], ceiling: u32) -> Result<()> {
    check_range(group, tracers, ceiling)?;
    check_order(group, tracers)
}

/// Checks that every tracer of a group lies in `[0, ceiling]`.
pub fn check_range(group: usize, tracers: &[u32], ceiling: u32) -> Result<()> {
    for (index, &value) in tracers.iter().enumerate() {
        if value > ceiling {
            return Err(InvariantError::TracerOutOfRange {
                group,
                index,
                value,
                ceiling,
            }
            .into());
        }
    }
    Ok(())
}

/// Checks that a group is non-decreasing.
pub fn check_order(group: usize, tracers: &[u32]) -> Result<()> {
    if let Some(index) = tracers.windows(2).position(|w| w[0] > w[1]) {
        return Err(InvariantError::NonMonotoneGroup {
            group,
            index: index + 1,
            previous: tracers[index],
            value: tracers[index + 1],
        }
        .into());
    }
    Ok(())
}

/// Highest value a tracer of a `[0, range)` group may hold.
///
/// The initial partition places the top tracer at `(T - 1) * (R / (T - 1))`,
/// which can equal `R`; updates never raise a tracer past `R - 1`.
#[inline]
pub fn group_ceiling(num_tracers: usize, range: u32) -> u32 {
    let intervals = num_tracers.saturating_sub(1).max(1) as u64;
    let top = intervals * (u64::from(range) / intervals);
    (top as u32).max(range.saturating_sub(1))
}

/// A standalone group of tracers chasing one percentile.
///
/// Used by the single-group baselines; the multi-group cast keeps its groups
/// in a flat matrix instead. Each tracer draws its own auxiliary uniform.
///
/// # Examples
///
/// ```
/// use buoy_core::group::TracerGroup;
///
/// let group = TracerGroup::new(11, 1_000, 0.75).unwrap();
/// assert_eq!(group.tracers()[10], 1_000);
/// assert_eq!(group.tracers()[1], 100);
/// ```
#[derive(Clone, Debug)]
pub struct TracerGroup {
    tracers: Vec<u32>,
    baseline: Vec<u32>,
    percentile: f64,
    range: u32,
    clamped: bool,
}

impl TracerGroup {
    /// Creates `num_tracers` tracers evenly spread over `[0, range]`.
    ///
    /// # Errors
    ///
    /// Returns a `PreconditionError` if `num_tracers < 2`, `range < 2`, or
    /// `percentile` is not in (0, 1).
    pub fn new(num_tracers: usize, range: u32, percentile: f64) -> Result<Self> {
        if num_tracers < 2 {
            return Err(PreconditionError::InvalidTracerCount(num_tracers).into());
        }
        if range < 2 {
            return Err(PreconditionError::InvalidRange(range).into());
        }
        validate_percentile(percentile)?;

        let mut tracers = vec![0; num_tracers];
        partition(&mut tracers, 0, range);
        let baseline = tracers.clone();

        Ok(Self {
            tracers,
            baseline,
            percentile,
            range,
            clamped: true,
        })
    }

    /// Disables or enables clamping to `[0, range - 1]` (enabled by default).
    pub fn with_clamping(mut self, clamped: bool) -> Self {
        self.clamped = clamped;
        self
    }

    /// Current tracer values.
    #[inline]
    pub fn tracers(&self) -> &[u32] {
        &self.tracers
    }

    /// Baseline snapshot taken at the last prune (or at construction).
    #[inline]
    pub fn baseline(&self) -> &[u32] {
        &self.baseline
    }

    /// Target percentile.
    #[inline]
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Middle tracer, the group's point estimate.
    #[inline]
    pub fn estimate(&self) -> u32 {
        self.tracers[self.tracers.len() / 2]
    }

    /// Feeds one sample, drawing a fresh auxiliary uniform per moving tracer.
    pub fn observe<R: Rng + ?Sized>(&mut self, sample: u32, rng: &mut R) {
        let ceiling = self.range - 1;
        for tracer in self.tracers.iter_mut() {
            if sample == *tracer {
                continue;
            }
            let u: f64 = rng.gen();
            *tracer = if self.clamped {
                update_clamped(*tracer, sample, u, self.percentile, ceiling)
            } else {
                update(*tracer, sample, u, self.percentile)
            };
        }
    }

    /// Prunes against the baseline, then retakes the baseline.
    pub fn prune(&mut self) -> PruneOutcome {
        let outcome = prune(&mut self.tracers, &self.baseline);
        self.baseline.copy_from_slice(&self.tracers);
        outcome
    }

    /// Checks that every tracer lies in the group's admissible range.
    ///
    /// Order is not checked: independent draws let neighbouring tracers cross.
    pub fn check_invariants(&self) -> Result<()> {
        check_range(0, &self.tracers, group_ceiling(self.tracers.len(), self.range))
    }
}

/// Rejects percentiles outside (0, 1).
pub(crate) fn validate_percentile(percentile: f64) -> Result<()> {
    if !(percentile > 0.0 && percentile < 1.0) {
        return Err(PreconditionError::InvalidParameter {
            name: "percentile",
            value: format!("must lie in (0, 1), got {}", percentile),
        }
        .into());
    }
    Ok(())
}
