//! Seeded pseudo-random number generator wrapper.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Random number generator for a floating-buoy run.
///
/// Wraps `StdRng` and remembers its seed so a run can be logged and replayed.
///
/// # Examples
///
/// ```rust
/// use buoy_core::rng::BuoyRng;
///
/// let mut rng1 = BuoyRng::from_seed(7);
/// let mut rng2 = BuoyRng::from_seed(7);
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// assert_eq!(rng1.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct BuoyRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl BuoyRng {
    /// Creates a new generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}

impl RngCore for BuoyRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
