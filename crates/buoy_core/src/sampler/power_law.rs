//! Truncated power-law sampler.

use rand::Rng;

use super::{check_bounds, round_half_up, Sampler};
use crate::error::{BuoyError, Result};

/// Default lower cut-off of the power-law support.
pub const DEFAULT_LOWER: f64 = 1e-5;

/// Default upper cut-off of the power-law support.
pub const DEFAULT_UPPER: f64 = 10.0;

/// Default exponent.
pub const DEFAULT_EXPONENT: f64 = -2.0;

/// Inverse-CDF draw of `P(x) ∝ x^n` on `[a, b]`, scaled onto `[lo, hi - 1]`.
///
/// ```text
/// x = (u (b^(n+1) - a^(n+1)) + a^(n+1))^(1/(n+1)),   u ~ U[0, 1)
/// s = lo + round((x - a) / (b - a) * (hi - 1 - lo))
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerLawSampler {
    lower: f64,
    upper: f64,
    exponent: f64,
}

impl Default for PowerLawSampler {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            exponent: DEFAULT_EXPONENT,
        }
    }
}

impl PowerLawSampler {
    /// Creates a sampler over `[lower, upper]` with the given exponent.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::InvalidParameter` unless
    /// `0 < lower < upper` and `exponent != -1`.
    pub fn new(lower: f64, upper: f64, exponent: f64) -> Result<Self> {
        if !(lower > 0.0 && lower < upper && upper.is_finite()) {
            return Err(BuoyError::invalid_parameter(
                "support",
                format!("need 0 < lower < upper, got [{}, {}]", lower, upper),
            ));
        }
        if !exponent.is_finite() || exponent == -1.0 {
            return Err(BuoyError::invalid_parameter(
                "exponent",
                format!("must be finite and not -1, got {}", exponent),
            ));
        }
        Ok(Self {
            lower,
            upper,
            exponent,
        })
    }

    /// Maps a uniform draw in [0, 1) onto the continuous support.
    #[inline]
    fn inverse_cdf(&self, u: f64) -> f64 {
        let k = self.exponent + 1.0;
        let a = self.lower.powf(k);
        let b = self.upper.powf(k);
        (u * (b - a) + a).powf(1.0 / k)
    }
}

impl Sampler for PowerLawSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
        check_bounds(lo, hi)?;

        let u: f64 = rng.gen();
        let x = self.inverse_cdf(u);
        let unit = ((x - self.lower) / (self.upper - self.lower)).clamp(0.0, 1.0);
        let offset = round_half_up(unit * f64::from(hi - 1 - lo)) as u32;
        Ok(lo + offset)
    }
}
