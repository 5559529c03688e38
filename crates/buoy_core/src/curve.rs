//! The 101-point buoy curve and its uniform-reference error metric.

use std::ops::Index;

use crate::error::{BuoyError, Result};

/// Number of buoys: one per integer percentile 0..=100.
pub const BUOY_COUNT: usize = 101;

/// Per-percentile estimates `B[0..=100]` produced by the linker.
///
/// # Examples
///
/// ```rust
/// use buoy_core::curve::{uniform_reference, BuoyCurve};
///
/// let curve = BuoyCurve::from(uniform_reference(999));
/// assert_eq!(curve[50], 499);
/// assert_eq!(curve.uniform_error(999), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct BuoyCurve([u32; BUOY_COUNT]);

impl BuoyCurve {
    /// Buoy values in percentile order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consumes the curve, returning the underlying array.
    #[inline]
    pub fn into_inner(self) -> [u32; BUOY_COUNT] {
        self.0
    }

    /// Iterates over the buoys in percentile order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    /// Returns true if the curve is non-decreasing.
    pub fn is_monotone(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Error against the uniform quantiles of `[0, r]`; see [`uniform_error`].
    #[inline]
    pub fn uniform_error(&self, r: u32) -> f64 {
        uniform_error(&self.0, r)
    }
}

impl From<[u32; BUOY_COUNT]> for BuoyCurve {
    fn from(values: [u32; BUOY_COUNT]) -> Self {
        Self(values)
    }
}

impl TryFrom<Vec<u32>> for BuoyCurve {
    type Error = BuoyError;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        let len = values.len();
        let values: [u32; BUOY_COUNT] = values.try_into().map_err(|_| {
            BuoyError::invalid_parameter("curve", format!("expected {} buoys, got {}", BUOY_COUNT, len))
        })?;
        Ok(Self(values))
    }
}

impl From<BuoyCurve> for Vec<u32> {
    fn from(curve: BuoyCurve) -> Self {
        curve.0.to_vec()
    }
}

impl Index<usize> for BuoyCurve {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a BuoyCurve {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Exact percentiles of the uniform distribution on `[0, r]`: `A[i] = ⌊i · r / 100⌋`.
pub fn uniform_reference(r: u32) -> [u32; BUOY_COUNT] {
    let mut reference = [0u32; BUOY_COUNT];
    for (i, a) in reference.iter_mut().enumerate() {
        *a = (i as u64 * u64::from(r) / 100) as u32;
    }
    reference
}

/// Normalised L1 distance from the uniform reference:
/// `Σ |A[i] - B[i]| / Σ A[i]` with `A = uniform_reference(r)`.
///
/// Returns 0 when the reference sums to zero and the curve matches it.
///
/// # Examples
///
/// ```rust
/// use buoy_core::curve::{uniform_error, uniform_reference};
///
/// let mut curve = uniform_reference(1_000);
/// curve[50] += 50;
/// let err = uniform_error(&curve, 1_000);
/// assert!((err - 50.0 / 50_500.0).abs() < 1e-12);
/// ```
pub fn uniform_error(curve: &[u32], r: u32) -> f64 {
    let reference = uniform_reference(r);
    let (diff, total) = reference
        .iter()
        .zip(curve.iter())
        .fold((0u64, 0u64), |(diff, total), (&a, &b)| {
            (diff + u64::from(a.abs_diff(b)), total + u64::from(a))
        });

    if total == 0 {
        return if diff == 0 { 0.0 } else { f64::INFINITY };
    }
    diff as f64 / total as f64
}
