//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod cast;
pub mod shuffled;
pub mod tracer;

use rand::Rng;
use tracing::info;

/// Returns `seed`, or a fresh random seed that is logged so the run can be replayed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::thread_rng().gen();
            info!(seed, "no seed given, using a random one");
            seed
        }
    }
}

/// Formats a fraction as a percentage with two decimals, rounding halves
/// away from zero.
pub fn format_percent(fraction: f64) -> String {
    // `+ 0.0` turns a rounded `-0.0` into `0.0`.
    let hundredths = (fraction * 10_000.0).round() + 0.0;
    format!("{:.2}%", hundredths / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_rounds_half_up() {
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(0.012345), "1.23%");
        assert_eq!(format_percent(0.00126), "0.13%");
        assert_eq!(format_percent(-0.1), "-10.00%");
    }

    #[test]
    fn test_format_percent_rounds_negative_halves_away_from_zero() {
        assert_eq!(format_percent(0.03125), "3.13%");
        assert_eq!(format_percent(-0.03125), "-3.13%");
        assert_eq!(format_percent(-0.00001), "0.00%");
    }

    #[test]
    fn test_resolve_seed_keeps_explicit_seed() {
        assert_eq!(resolve_seed(Some(42)), 42);
    }
}
