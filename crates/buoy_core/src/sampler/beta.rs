//! Scaled Beta sampler.

use rand::Rng;
use rand_distr::{Beta, Distribution};

use super::{check_bounds, round_half_up, Sampler};
use crate::error::{BuoyError, Result};

/// Beta(α, β) sample scaled to `[0, hi - 1]`.
///
/// Returns `round(b * (hi - 1))`. The lower bound must be zero.
#[derive(Clone, Debug)]
pub struct BetaSampler {
    alpha: f64,
    beta: f64,
    dist: Beta<f64>,
}

impl BetaSampler {
    /// Creates a sampler for Beta(`alpha`, `beta`).
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::InvalidParameter` unless both shape
    /// parameters are finite and positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let dist = Beta::new(alpha, beta).map_err(|e| {
            BuoyError::invalid_parameter(
                "beta_shape",
                format!("Beta({}, {}) rejected: {}", alpha, beta, e),
            )
        })?;
        Ok(Self { alpha, beta, dist })
    }

    /// First shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Sampler for BetaSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
        check_bounds(lo, hi)?;
        if lo != 0 {
            return Err(BuoyError::invalid_parameter(
                "lo",
                format!("Beta sampler scales onto [0, hi) and needs lo = 0, got {}", lo),
            ));
        }

        let b = self.dist.sample(rng);
        Ok(round_half_up(b * f64::from(hi - 1)) as u32)
    }
}
