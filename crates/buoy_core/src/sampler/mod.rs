//! Sample sources over a bounded integer range.
//!
//! A [`Sampler`] yields an integer in `[lo, hi)` on demand, drawing from a
//! caller-supplied RNG. Four exemplars are provided:
//!
//! | Sampler | Shape |
//! |---------|-------|
//! | [`UniformSampler`] | uniform over `[lo, hi)` |
//! | [`GaussianSampler`] | normal, truncated at ±3σ by rejection |
//! | [`BetaSampler`] | Beta(α, β) scaled to `[0, hi - 1]` |
//! | [`PowerLawSampler`] | truncated power law, inverse-CDF draw |
//!
//! [`SamplerKind`] names them and [`AnySampler`] dispatches over them with a
//! `match`, so the cast loop never goes through a vtable.
//!
//! # Example
//!
//! ```
//! use buoy_core::rng::BuoyRng;
//! use buoy_core::sampler::{Sampler, SamplerKind};
//!
//! let sampler = SamplerKind::Gaussian.build().unwrap();
//! let mut rng = BuoyRng::from_seed(1);
//! let s = sampler.sample(&mut rng, 0, 1000).unwrap();
//! assert!(s < 1000);
//! ```

mod beta;
mod gaussian;
mod power_law;
mod uniform;

pub use beta::BetaSampler;
pub use gaussian::GaussianSampler;
pub use power_law::PowerLawSampler;
pub use uniform::UniformSampler;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{BuoyError, PreconditionError, Result};

/// A source of integer samples in `[lo, hi)`.
pub trait Sampler {
    /// Draws one sample in `[lo, hi)` using `rng`.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError::InvalidBounds` if `lo >= hi`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32>;
}

/// Rejects bounds with `lo >= hi`.
#[inline]
pub(crate) fn check_bounds(lo: u32, hi: u32) -> Result<()> {
    if lo >= hi {
        return Err(PreconditionError::InvalidBounds { lo, hi }.into());
    }
    Ok(())
}

/// Rounds half up, matching `floor(x + 0.5)`.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Name of a sampler exemplar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SamplerKind {
    /// Uniform over the range.
    #[default]
    Uniform,
    /// Truncated Gaussian centred on the range.
    Gaussian,
    /// Beta(1, 5), right-skewed toward zero.
    Beta,
    /// Truncated power law with exponent -2.
    PowerLaw,
}

impl SamplerKind {
    /// All exemplars, in declaration order.
    pub const ALL: [SamplerKind; 4] = [
        SamplerKind::Uniform,
        SamplerKind::Gaussian,
        SamplerKind::Beta,
        SamplerKind::PowerLaw,
    ];

    /// Builds the sampler with its exemplar parameters.
    pub fn build(self) -> Result<AnySampler> {
        Ok(match self {
            SamplerKind::Uniform => AnySampler::Uniform(UniformSampler),
            SamplerKind::Gaussian => AnySampler::Gaussian(GaussianSampler),
            SamplerKind::Beta => AnySampler::Beta(BetaSampler::new(1.0, 5.0)?),
            SamplerKind::PowerLaw => AnySampler::PowerLaw(PowerLawSampler::default()),
        })
    }

    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplerKind::Uniform => "uniform",
            SamplerKind::Gaussian => "gaussian",
            SamplerKind::Beta => "beta",
            SamplerKind::PowerLaw => "power-law",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplerKind {
    type Err = BuoyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(SamplerKind::Uniform),
            "gaussian" | "normal" => Ok(SamplerKind::Gaussian),
            "beta" => Ok(SamplerKind::Beta),
            "power-law" | "powerlaw" | "power_law" => Ok(SamplerKind::PowerLaw),
            other => Err(BuoyError::invalid_parameter(
                "distribution",
                format!("unknown distribution '{}'", other),
            )),
        }
    }
}

/// Static dispatch over the sampler exemplars.
#[derive(Clone, Debug)]
pub enum AnySampler {
    /// Uniform sampler
    Uniform(UniformSampler),
    /// Truncated Gaussian sampler
    Gaussian(GaussianSampler),
    /// Scaled Beta sampler
    Beta(BetaSampler),
    /// Truncated power-law sampler
    PowerLaw(PowerLawSampler),
}

impl AnySampler {
    /// Kind of the wrapped sampler.
    pub fn kind(&self) -> SamplerKind {
        match self {
            AnySampler::Uniform(_) => SamplerKind::Uniform,
            AnySampler::Gaussian(_) => SamplerKind::Gaussian,
            AnySampler::Beta(_) => SamplerKind::Beta,
            AnySampler::PowerLaw(_) => SamplerKind::PowerLaw,
        }
    }
}

impl Sampler for AnySampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
        match self {
            AnySampler::Uniform(s) => s.sample(rng, lo, hi),
            AnySampler::Gaussian(s) => s.sample(rng, lo, hi),
            AnySampler::Beta(s) => s.sample(rng, lo, hi),
            AnySampler::PowerLaw(s) => s.sample(rng, lo, hi),
        }
    }
}

impl<S: Sampler + ?Sized> Sampler for &S {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
        (**self).sample(rng, lo, hi)
    }
}
