//! End-to-end estimation: cast, then link.

use rand::Rng;
use tracing::info;

use crate::cast::{CastConfig, CastController};
use crate::curve::BuoyCurve;
use crate::error::Result;
use crate::linker::link_buoys;
use crate::rng::BuoyRng;
use crate::sampler::Sampler;

/// Estimates all 101 percentiles of `sampler` over `[0, range)`.
///
/// Every draw comes from one [`BuoyRng`] seeded with the configured seed
/// (0 when unset), so equal configurations give equal curves.
///
/// # Errors
///
/// Returns `PreconditionError` for an invalid configuration, and propagates
/// sampler and invariant errors.
///
/// # Examples
///
/// ```rust
/// use buoy_core::cast::CastConfig;
/// use buoy_core::driver::estimate_percentiles;
/// use buoy_core::sampler::UniformSampler;
///
/// let config = CastConfig::builder()
///     .num_groups(9)
///     .range(1_000)
///     .seed(3)
///     .build()
///     .unwrap();
///
/// let curve = estimate_percentiles(&config, &UniformSampler).unwrap();
/// assert_eq!(curve[0], 0);
/// assert_eq!(curve[100], 999);
/// ```
pub fn estimate_percentiles<S>(config: &CastConfig, sampler: &S) -> Result<BuoyCurve>
where
    S: Sampler + ?Sized,
{
    let mut rng = BuoyRng::from_seed(config.seed().unwrap_or(0));
    estimate_percentiles_with_rng(config, sampler, &mut rng)
}

/// Like [`estimate_percentiles`], drawing from a caller-supplied RNG.
///
/// # Errors
///
/// See [`estimate_percentiles`].
pub fn estimate_percentiles_with_rng<S, R>(
    config: &CastConfig,
    sampler: &S,
    rng: &mut R,
) -> Result<BuoyCurve>
where
    S: Sampler + ?Sized,
    R: Rng + ?Sized,
{
    let mut controller = CastController::new(config.clone())?;
    let locations = controller.run(sampler, rng)?;
    let curve = link_buoys(&locations)?;

    info!(
        groups = config.num_groups(),
        tracers = config.num_tracers(),
        range = config.range(),
        samples = config.total_samples(),
        seed = config.seed().unwrap_or(0),
        "percentile estimation complete"
    );
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::UniformSampler;

    #[test]
    fn test_same_seed_same_curve() {
        let config = CastConfig::builder()
            .num_groups(19)
            .range(50_000)
            .cast_size(3_000)
            .seed(99)
            .build()
            .unwrap();

        let a = estimate_percentiles(&config, &UniformSampler).unwrap();
        let b = estimate_percentiles(&config, &UniformSampler).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unset_seed_matches_zero() {
        let unseeded = CastConfig::builder()
            .num_groups(4)
            .range(5_000)
            .cast_size(1_000)
            .build()
            .unwrap();
        let zero = CastConfig::builder()
            .num_groups(4)
            .range(5_000)
            .cast_size(1_000)
            .seed(0)
            .build()
            .unwrap();

        assert_eq!(
            estimate_percentiles(&unseeded, &UniformSampler).unwrap(),
            estimate_percentiles(&zero, &UniformSampler).unwrap()
        );
    }

    #[test]
    fn test_with_rng_matches_seeded_entry_point() {
        let config = CastConfig::builder()
            .num_groups(9)
            .range(10_000)
            .cast_size(2_000)
            .seed(5)
            .build()
            .unwrap();

        let mut rng = BuoyRng::from_seed(5);
        let with_rng = estimate_percentiles_with_rng(&config, &UniformSampler, &mut rng).unwrap();
        assert_eq!(with_rng, estimate_percentiles(&config, &UniformSampler).unwrap());
    }
}
