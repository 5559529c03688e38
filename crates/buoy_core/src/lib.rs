//! # buoy_core: Floating-Buoy Streaming Percentile Estimation
//!
//! Estimates all 101 integer percentiles (0th through 100th) of a stream of
//! bounded non-negative integers in `[0, R)` without storing the stream.
//!
//! ## Pipeline
//!
//! ```text
//! Sampler ──s──▶ CastController ──L[G+2]──▶ link_buoys ──▶ BuoyCurve[101]
//!                  │  G groups × T tracers
//!                  │  one shared u per sample
//!                  └─ prune-and-repartition after every cast
//! ```
//!
//! - `tracer`: the unit-step stochastic update of one tracer
//! - `group`: partitioning, prune-and-repartition, invariant checks
//! - `cast`: configuration, tracer matrix and the cast controller
//! - `linker`: interpolation from `G + 2` anchors to 101 buoys
//! - `curve`: the buoy curve and the uniform-reference error metric
//! - `sampler`: uniform, truncated Gaussian, Beta(1, 5) and power-law sources
//! - `rng`: the seeded generator threaded through every draw
//! - `baseline`: single-tracer and single-group reference estimators
//! - `driver`: cast-then-link entry points
//!
//! ## Usage Example
//!
//! ```rust
//! use buoy_core::cast::CastConfig;
//! use buoy_core::driver::estimate_percentiles;
//! use buoy_core::sampler::SamplerKind;
//!
//! let config = CastConfig::builder()
//!     .num_groups(19)
//!     .range(100_000)
//!     .seed(42)
//!     .build()?;
//!
//! let sampler = SamplerKind::Uniform.build()?;
//! let curve = estimate_percentiles(&config, &sampler)?;
//!
//! assert_eq!(curve[0], 0);
//! assert_eq!(curve[100], 99_999);
//! assert!(curve.uniform_error(99_999) < 0.05);
//! # Ok::<(), buoy_core::BuoyError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `CastConfig`, `SamplerKind` and `BuoyCurve`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod baseline;
pub mod cast;
pub mod curve;
pub mod driver;
pub mod error;
pub mod group;
pub mod linker;
pub mod rng;
pub mod sampler;
pub mod tracer;

pub use cast::{cast, CastConfig, CastConfigBuilder, CastController};
pub use curve::{BuoyCurve, BUOY_COUNT};
pub use driver::{estimate_percentiles, estimate_percentiles_with_rng};
pub use error::{BuoyError, InvariantError, PreconditionError, Result};
pub use linker::link_buoys;
pub use rng::BuoyRng;
pub use sampler::{AnySampler, Sampler, SamplerKind};
