//! Uniform integer sampler.

use rand::Rng;

use super::{check_bounds, Sampler};
use crate::error::Result;

/// Uniform integer in `[lo, hi)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformSampler;

impl Sampler for UniformSampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, lo: u32, hi: u32) -> Result<u32> {
        check_bounds(lo, hi)?;
        Ok(rng.gen_range(lo..hi))
    }
}
