//! Multi-group floating-buoy cast.
//!
//! # Architecture
//!
//! ```text
//! CastController
//! ├── CastConfig    (G, T, R, cast size, cast count, seed)
//! ├── TracerMatrix  (flat G × T tracers, plus baseline snapshot)
//! └── Orchestration
//!     ├── apply_sample()  one shared u per sample
//!     ├── prune_all()     prune-and-repartition every group
//!     └── locations()     [0, middle tracers..., R - 1]
//! ```
//!
//! # Example
//!
//! ```rust
//! use buoy_core::cast::{cast, CastConfig};
//! use buoy_core::rng::BuoyRng;
//! use buoy_core::sampler::UniformSampler;
//!
//! let config = CastConfig::builder()
//!     .num_groups(9)
//!     .range(10_000)
//!     .cast_size(5_000)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = BuoyRng::from_seed(42);
//! let locations = cast(&config, &UniformSampler, &mut rng).unwrap();
//! assert_eq!(locations.len(), 11);
//! ```

mod config;
mod controller;
mod matrix;

pub use config::{
    is_valid_group_count, valid_group_counts, CastConfig, CastConfigBuilder, DEFAULT_CAST_SIZE,
    DEFAULT_NUM_CASTS, DEFAULT_NUM_GROUPS, DEFAULT_NUM_TRACERS, DEFAULT_RANGE,
};
pub use controller::{cast, CastController};
pub use matrix::TracerMatrix;
