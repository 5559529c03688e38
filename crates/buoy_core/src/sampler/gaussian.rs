//! Truncated Gaussian sampler.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::{check_bounds, round_half_up, Sampler};
use crate::error::Result;

/// Normal sample centred on `[lo, hi)` and truncated at three standard deviations.
///
/// With `span = hi - 1 - lo`, draws `round(z * span / 6 + lo + span / 2)` for
/// `z ~ N(0, 1)` and redraws whenever the result falls outside `[lo, hi)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GaussianSampler;

impl Sampler for GaussianSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
        check_bounds(lo, hi)?;

        let span = f64::from(hi - 1 - lo);
        let std = span / 6.0;
        let mean = f64::from(lo) + span / 2.0;

        loop {
            let z: f64 = StandardNormal.sample(rng);
            let value = round_half_up(z * std + mean);
            if value >= f64::from(lo) && value < f64::from(hi) {
                return Ok(value as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::BuoyRng;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_moments() {
        let mut rng = BuoyRng::from_seed(17);
        let n = 100_000;
        let samples: Vec<f64> = (0..n)
            .map(|_| f64::from(GaussianSampler.sample(&mut rng, 0, 600_001).unwrap()))
            .collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;

        assert_relative_eq!(mean, 300_000.0, max_relative = 0.01);
        // Truncation at 3 sigma shrinks the standard deviation by about 1.3%.
        assert_relative_eq!(var.sqrt(), 100_000.0 * 0.9865, max_relative = 0.02);
    }

    #[test]
    fn test_gaussian_offset_bounds_terminate() {
        let mut rng = BuoyRng::from_seed(4);
        for _ in 0..1_000 {
            let s = GaussianSampler.sample(&mut rng, 1_000, 1_010).unwrap();
            assert!((1_000..1_010).contains(&s));
        }
    }

    #[test]
    fn test_gaussian_degenerate_range() {
        let mut rng = BuoyRng::from_seed(4);
        assert_eq!(GaussianSampler.sample(&mut rng, 7, 8).unwrap(), 7);
    }
}
