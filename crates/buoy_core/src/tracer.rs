//! Unit-step stochastic update of a single tracer.
//!
//! A tracer `x` chasing the τ-quantile sees a sample `s` and an auxiliary
//! uniform `u`:
//!
//! | Condition | Move |
//! |-----------|------|
//! | `s > x` and `u < τ` | `x + 1` |
//! | `s < x` and `u > τ` | `x - 1` |
//! | otherwise | none |
//!
//! The expected drift is `τ - F(x)`, which vanishes at the τ-quantile.
//! Steps are always one lattice point.

/// Applies one update to `x`.
///
/// # Examples
///
/// ```
/// use buoy_core::tracer::update;
///
/// assert_eq!(update(10, 20, 0.1, 0.5), 11);
/// assert_eq!(update(10, 5, 0.9, 0.5), 9);
/// assert_eq!(update(10, 20, 0.9, 0.5), 10);
/// assert_eq!(update(10, 10, 0.1, 0.5), 10);
/// ```
#[inline]
pub fn update(x: u32, sample: u32, u: f64, percentile: f64) -> u32 {
    if sample > x {
        if u < percentile {
            return x + 1;
        }
    } else if sample < x && u > percentile {
        return x - 1;
    }
    x
}

/// Applies one update to `x`, refusing to rise past `ceiling` or fall below 0.
///
/// # Examples
///
/// ```
/// use buoy_core::tracer::update_clamped;
///
/// // Already at the ceiling: the increment is refused.
/// assert_eq!(update_clamped(99, 150, 0.0, 0.5, 99), 99);
/// assert_eq!(update_clamped(98, 150, 0.0, 0.5, 99), 99);
/// ```
#[inline]
pub fn update_clamped(x: u32, sample: u32, u: f64, percentile: f64, ceiling: u32) -> u32 {
    if sample > x {
        if u < percentile && x < ceiling {
            return x + 1;
        }
    } else if sample < x && u > percentile && x > 0 {
        return x - 1;
    }
    x
}

/// Relative error `(actual - estimate) / actual` of an estimate.
///
/// Returns 0 when both are zero and ±infinity when only `actual` is zero.
#[inline]
pub fn relative_error(actual: u32, estimate: u32) -> f64 {
    let diff = f64::from(actual) - f64::from(estimate);
    if actual == 0 {
        if estimate == 0 {
            return 0.0;
        }
        return diff * f64::INFINITY;
    }
    diff / f64::from(actual)
}

/// Exact τ-quantile target `round(τ · max)` used to score single-percentile runs.
#[inline]
pub fn quantile_target(percentile: f64, max: u32) -> u32 {
    (percentile * f64::from(max)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_update_table() {
        // s > x
        assert_eq!(update(5, 6, 0.2, 0.3), 6);
        assert_eq!(update(5, 6, 0.3, 0.3), 5);
        assert_eq!(update(5, 6, 0.8, 0.3), 5);
        // s < x
        assert_eq!(update(5, 4, 0.8, 0.3), 4);
        assert_eq!(update(5, 4, 0.3, 0.3), 5);
        assert_eq!(update(5, 4, 0.2, 0.3), 5);
        // s == x
        assert_eq!(update(5, 5, 0.0, 0.3), 5);
        assert_eq!(update(5, 5, 0.99, 0.3), 5);
    }

    #[test]
    fn test_clamped_floor() {
        assert_eq!(update_clamped(0, 0, 0.99, 0.5, 10), 0);
        assert_eq!(update_clamped(1, 0, 0.99, 0.5, 10), 0);
    }

    #[test]
    fn test_clamped_ceiling_lets_tracer_fall() {
        // A tracer above the ceiling can still descend.
        assert_eq!(update_clamped(12, 3, 0.99, 0.5, 10), 11);
        assert_eq!(update_clamped(12, 30, 0.0, 0.5, 10), 12);
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(100, 90), 0.1);
        assert_eq!(relative_error(100, 110), -0.1);
        assert_eq!(relative_error(0, 0), 0.0);
        assert!(relative_error(0, 3).is_infinite());
    }

    #[test]
    fn test_quantile_target() {
        assert_eq!(quantile_target(0.75, 999_999), 749_999);
        assert_eq!(quantile_target(0.5, 10), 5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// A single update never moves a tracer by more than one step.
        #[test]
        fn prop_unit_step(x in 1u32..1_000_000, s in 0u32..1_000_000, u in 0.0f64..1.0, tau in 0.01f64..0.99) {
            let next = update(x, s, u, tau);
            prop_assert!(next.abs_diff(x) <= 1);
        }

        /// The clamped update keeps tracers inside [0, ceiling].
        #[test]
        fn prop_clamped_in_range(range in 2u32..1_000_000, x_frac in 0.0f64..1.0, s_frac in 0.0f64..1.0, u in 0.0f64..1.0, tau in 0.01f64..0.99) {
            let ceiling = range - 1;
            let x = (x_frac * f64::from(ceiling)) as u32;
            let s = (s_frac * f64::from(range)) as u32;
            let next = update_clamped(x, s.min(ceiling), u, tau, ceiling);
            prop_assert!(next <= ceiling);
            prop_assert!(next.abs_diff(x) <= 1);
        }

        /// Two tracers seeing the same sample and the same u never swap order.
        #[test]
        fn prop_shared_draw_preserves_order(a in 0u32..1000, gap in 0u32..1000, s in 0u32..2000, u in 0.0f64..1.0, tau in 0.01f64..0.99) {
            let b = a + gap;
            let a_next = update_clamped(a, s, u, tau, 1999);
            let b_next = update_clamped(b, s, u, tau, 1999);
            prop_assert!(a_next <= b_next);
        }
    }
}
