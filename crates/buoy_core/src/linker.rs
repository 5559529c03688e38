//! Buoy linker: expands `G + 2` locations into the 101-point curve.
//!
//! With `w = 100 / (G + 1)`, percentile `k` is an anchor when `k mod w = 0`
//! and copies `L[k / w]`. Every other percentile interpolates linearly
//! between its two neighbouring anchors and rounds down.

use crate::cast::is_valid_group_count;
use crate::curve::{BuoyCurve, BUOY_COUNT};
use crate::error::{InvariantError, PreconditionError, Result};

/// Links buoy locations into a [`BuoyCurve`].
///
/// # Errors
///
/// Returns `PreconditionError::InvalidLocationCount` unless
/// `locations.len() == G + 2` for a valid group count `G`.
///
/// # Examples
///
/// ```rust
/// use buoy_core::linker::link_buoys;
///
/// let curve = link_buoys(&[0, 250, 500, 750, 999]).unwrap();
/// assert_eq!(curve[0], 0);
/// assert_eq!(curve[25], 250);
/// assert_eq!(curve[10], 100);
/// assert_eq!(curve[100], 999);
/// ```
pub fn link_buoys(locations: &[u32]) -> Result<BuoyCurve> {
    let len = locations.len();
    if len < 3 || !is_valid_group_count(len - 2) {
        return Err(PreconditionError::InvalidLocationCount(len).into());
    }
    let width = 100 / (len - 1);

    let at = |index: usize| -> Result<u32> {
        locations
            .get(index)
            .copied()
            .ok_or_else(|| InvariantError::LinkerIndexOutOfBounds { index, len }.into())
    };

    let mut buoys = [0u32; BUOY_COUNT];
    for (k, buoy) in buoys.iter_mut().enumerate() {
        if k % width == 0 {
            *buoy = at(k / width)?;
            continue;
        }

        let loc = k as f64 / width as f64;
        let floor = loc.floor();
        let frac = loc - floor;
        let lower = f64::from(at(floor as usize)?);
        let upper = f64::from(at(loc.ceil() as usize)?);
        *buoy = (frac * (upper - lower) + lower).floor() as u32;
    }

    Ok(BuoyCurve::from(buoys))
}
