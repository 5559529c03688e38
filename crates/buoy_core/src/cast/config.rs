//! Cast configuration.
//!
//! This module provides [`CastConfig`], the validated parameter set of a
//! floating-buoy run, and its builder.

use crate::error::{PreconditionError, Result};

/// Default samples consumed per cast.
pub const DEFAULT_CAST_SIZE: usize = 10_000;

/// Default number of casts.
pub const DEFAULT_NUM_CASTS: usize = 3;

/// Default input range; samples lie in `[0, range)`.
pub const DEFAULT_RANGE: u32 = 1_000_000;

/// Default number of tracer groups (every percentile estimated directly).
pub const DEFAULT_NUM_GROUPS: usize = 99;

/// Default number of tracers per group.
pub const DEFAULT_NUM_TRACERS: usize = 11;

/// Returns true if `num_groups` is in [1, 99] and `100 mod (num_groups + 1) == 0`.
///
/// # Examples
///
/// ```rust
/// use buoy_core::cast::is_valid_group_count;
///
/// assert!(is_valid_group_count(99));
/// assert!(is_valid_group_count(4));
/// assert!(!is_valid_group_count(50));
/// ```
#[inline]
pub fn is_valid_group_count(num_groups: usize) -> bool {
    (1..=99).contains(&num_groups) && 100 % (num_groups + 1) == 0
}

/// Every group count accepted by [`is_valid_group_count`].
pub fn valid_group_counts() -> impl Iterator<Item = usize> {
    (1..=99).filter(|&g| is_valid_group_count(g))
}

/// Floating-buoy run configuration.
///
/// Immutable configuration specifying cast parameters.
/// Use [`CastConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use buoy_core::cast::CastConfig;
///
/// let config = CastConfig::builder()
///     .num_groups(4)
///     .num_tracers(11)
///     .range(1_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.group_width(), 20);
/// assert_eq!(config.cast_size(), 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastConfig {
    /// Number of tracer groups (G).
    num_groups: usize,
    /// Number of tracers per group (T).
    num_tracers: usize,
    /// Exclusive upper bound of the input range (R).
    range: u32,
    /// Samples consumed per cast.
    cast_size: usize,
    /// Number of casts.
    num_casts: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            num_groups: DEFAULT_NUM_GROUPS,
            num_tracers: DEFAULT_NUM_TRACERS,
            range: DEFAULT_RANGE,
            cast_size: DEFAULT_CAST_SIZE,
            num_casts: DEFAULT_NUM_CASTS,
            seed: None,
        }
    }
}

impl CastConfig {
    /// Creates a new configuration builder starting from the defaults.
    #[inline]
    pub fn builder() -> CastConfigBuilder {
        CastConfigBuilder::default()
    }

    /// Returns the number of tracer groups.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// Returns the number of tracers per group.
    #[inline]
    pub fn num_tracers(&self) -> usize {
        self.num_tracers
    }

    /// Returns the exclusive upper bound of the input range.
    #[inline]
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Returns the number of samples consumed per cast.
    #[inline]
    pub fn cast_size(&self) -> usize {
        self.cast_size
    }

    /// Returns the number of casts.
    #[inline]
    pub fn num_casts(&self) -> usize {
        self.num_casts
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Percentile spacing between anchors: `100 / (G + 1)`.
    #[inline]
    pub fn group_width(&self) -> usize {
        100 / (self.num_groups + 1)
    }

    /// Total number of samples a run consumes.
    #[inline]
    pub fn total_samples(&self) -> usize {
        self.cast_size.saturating_mul(self.num_casts)
    }

    /// Target percentile of each group: `τ_i = (i + 1) / (G + 1)`.
    pub fn target_percentiles(&self) -> Vec<f64> {
        let denominator = (self.num_groups + 1) as f64;
        (1..=self.num_groups)
            .map(|i| i as f64 / denominator)
            .collect()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError` if:
    /// - `num_groups` is outside [1, 99] or `100 mod (num_groups + 1) != 0`
    /// - `num_tracers` is below 2
    /// - `range` is below 2
    /// - `cast_size` or `num_casts` is 0
    pub fn validate(&self) -> Result<()> {
        if !is_valid_group_count(self.num_groups) {
            return Err(PreconditionError::InvalidGroupCount(self.num_groups).into());
        }
        if self.num_tracers < 2 {
            return Err(PreconditionError::InvalidTracerCount(self.num_tracers).into());
        }
        if self.range < 2 {
            return Err(PreconditionError::InvalidRange(self.range).into());
        }
        if self.cast_size == 0 {
            return Err(PreconditionError::InvalidCastSize(self.cast_size).into());
        }
        if self.num_casts == 0 {
            return Err(PreconditionError::InvalidCastCount(self.num_casts).into());
        }
        Ok(())
    }
}

/// Builder for [`CastConfig`].
///
/// Unset parameters fall back to the defaults; validation happens in
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct CastConfigBuilder {
    num_groups: Option<usize>,
    num_tracers: Option<usize>,
    range: Option<u32>,
    cast_size: Option<usize>,
    num_casts: Option<usize>,
    seed: Option<u64>,
}

impl CastConfigBuilder {
    /// Sets the number of tracer groups.
    #[inline]
    pub fn num_groups(mut self, num_groups: usize) -> Self {
        self.num_groups = Some(num_groups);
        self
    }

    /// Sets the number of tracers per group.
    #[inline]
    pub fn num_tracers(mut self, num_tracers: usize) -> Self {
        self.num_tracers = Some(num_tracers);
        self
    }

    /// Sets the exclusive upper bound of the input range.
    #[inline]
    pub fn range(mut self, range: u32) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the number of samples consumed per cast.
    #[inline]
    pub fn cast_size(mut self, cast_size: usize) -> Self {
        self.cast_size = Some(cast_size);
        self
    }

    /// Sets the number of casts.
    #[inline]
    pub fn num_casts(mut self, num_casts: usize) -> Self {
        self.num_casts = Some(num_casts);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionError` for any parameter outside its domain.
    pub fn build(self) -> Result<CastConfig> {
        let config = CastConfig {
            num_groups: self.num_groups.unwrap_or(DEFAULT_NUM_GROUPS),
            num_tracers: self.num_tracers.unwrap_or(DEFAULT_NUM_TRACERS),
            range: self.range.unwrap_or(DEFAULT_RANGE),
            cast_size: self.cast_size.unwrap_or(DEFAULT_CAST_SIZE),
            num_casts: self.num_casts.unwrap_or(DEFAULT_NUM_CASTS),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuoyError;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_defaults() {
        let config = CastConfig::builder().build().unwrap();

        assert_eq!(config, CastConfig::default());
        assert_eq!(config.num_groups(), 99);
        assert_eq!(config.num_tracers(), 11);
        assert_eq!(config.range(), 1_000_000);
        assert_eq!(config.cast_size(), 10_000);
        assert_eq!(config.num_casts(), 3);
        assert_eq!(config.seed(), None);
        assert_eq!(config.group_width(), 1);
        assert_eq!(config.total_samples(), 30_000);
    }

    #[test]
    fn test_builder_with_seed() {
        let config = CastConfig::builder().seed(42).build().unwrap();
        assert_eq!(config.seed(), Some(42));

        let config = CastConfig::builder().seed(42).maybe_seed(None).build().unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_invalid_group_count() {
        let result = CastConfig::builder().num_groups(50).build();
        assert_eq!(
            result,
            Err(BuoyError::Precondition(PreconditionError::InvalidGroupCount(50)))
        );

        assert!(CastConfig::builder().num_groups(0).build().is_err());
        assert!(CastConfig::builder().num_groups(100).build().is_err());
    }

    #[test]
    fn test_valid_group_counts() {
        let counts: Vec<usize> = valid_group_counts().collect();
        assert_eq!(counts, vec![1, 3, 4, 9, 19, 24, 49, 99]);
    }

    #[test]
    fn test_invalid_scalars() {
        assert!(matches!(
            CastConfig::builder().num_tracers(1).build(),
            Err(BuoyError::Precondition(PreconditionError::InvalidTracerCount(1)))
        ));
        assert!(matches!(
            CastConfig::builder().range(1).build(),
            Err(BuoyError::Precondition(PreconditionError::InvalidRange(1)))
        ));
        assert!(matches!(
            CastConfig::builder().cast_size(0).build(),
            Err(BuoyError::Precondition(PreconditionError::InvalidCastSize(0)))
        ));
        assert!(matches!(
            CastConfig::builder().num_casts(0).build(),
            Err(BuoyError::Precondition(PreconditionError::InvalidCastCount(0)))
        ));
    }

    #[test]
    fn test_target_percentiles() {
        let config = CastConfig::builder().num_groups(4).build().unwrap();
        let taus = config.target_percentiles();

        assert_eq!(taus.len(), 4);
        for (tau, expected) in taus.iter().zip([0.2, 0.4, 0.6, 0.8]) {
            assert_relative_eq!(*tau, expected, epsilon = 1e-12);
        }
        assert!(taus.iter().all(|&t| t > 0.0 && t < 1.0));
    }
}
