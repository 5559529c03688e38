//! # Random Number Generation
//!
//! Every random draw of a run (sample draws and the auxiliary uniform of the
//! tracer update) comes from one explicitly threaded, seeded generator. There
//! is no process-wide RNG.
//!
//! ## Usage Example
//!
//! ```rust
//! use buoy_core::rng::BuoyRng;
//!
//! let mut rng = BuoyRng::from_seed(12345);
//!
//! // Auxiliary uniform in [0, 1)
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Standard normal variate
//! let _z = rng.gen_normal();
//! ```
//!
//! `BuoyRng` implements [`rand::RngCore`], so it can be handed to anything
//! generic over `R: Rng`, including the samplers and the cast controller.

mod prng;

pub use prng::BuoyRng;

#[cfg(test)]
mod tests;
