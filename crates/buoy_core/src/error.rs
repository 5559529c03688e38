//! Error types for the floating-buoy estimator.
//!
//! This module provides:
//! - `PreconditionError`: a parameter outside its stated domain
//! - `InvariantError`: an internal invariant was broken (indicates a bug)
//! - `BuoyError`: the error type of every fallible core operation

use thiserror::Error;

/// Parameter outside its stated domain.
///
/// Surfaced to the caller; fatal for the current run.
///
/// # Examples
/// ```
/// use buoy_core::PreconditionError;
///
/// let err = PreconditionError::InvalidGroupCount(50);
/// assert!(err.to_string().contains("50"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// Group count not in [1, 99] or `100 mod (G + 1) != 0`.
    #[error("Invalid group count {0}: must be in [1, 99] with 100 divisible by (groups + 1)")]
    InvalidGroupCount(usize),

    /// Fewer than two tracers per group.
    #[error("Invalid tracer count {0}: each group needs at least 2 tracers")]
    InvalidTracerCount(usize),

    /// Input range too small.
    #[error("Invalid range {0}: must be at least 2")]
    InvalidRange(u32),

    /// Cast consumes no samples.
    #[error("Invalid cast size {0}: must be at least 1")]
    InvalidCastSize(usize),

    /// No casts requested.
    #[error("Invalid cast count {0}: must be at least 1")]
    InvalidCastCount(usize),

    /// Sampler bounds with `lo >= hi`.
    #[error("Invalid sampler bounds [{lo}, {hi}): lower bound must be below upper bound")]
    InvalidBounds {
        /// Inclusive lower bound
        lo: u32,
        /// Exclusive upper bound
        hi: u32,
    },

    /// Buoy location array whose length is not `G + 2` for a valid `G`.
    #[error("Invalid location count {0}: must be groups + 2 for a valid group count")]
    InvalidLocationCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Broken internal invariant.
///
/// Never produced by valid inputs; checked after every prune in debug builds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A tracer escaped the range its group may occupy.
    #[error("Tracer {index} of group {group} at {value} escaped [0, {ceiling}]")]
    TracerOutOfRange {
        /// Group index
        group: usize,
        /// Tracer index within the group
        index: usize,
        /// Offending value
        value: u32,
        /// Highest admissible value
        ceiling: u32,
    },

    /// Tracers of a group are no longer non-decreasing.
    #[error("Group {group} is not monotone at tracer {index}: {previous} > {value}")]
    NonMonotoneGroup {
        /// Group index
        group: usize,
        /// Index of the first tracer below its predecessor
        index: usize,
        /// Value of the predecessor
        previous: u32,
        /// Value of the tracer
        value: u32,
    },

    /// Linker read outside the location array.
    #[error("Linker index {index} out of bounds for {len} locations")]
    LinkerIndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the location array
        len: usize,
    },
}

/// Error type for the floating-buoy estimator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuoyError {
    /// Parameter outside its stated domain.
    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionError),

    /// Internal invariant violated.
    #[error("Internal invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl BuoyError {
    /// Returns true if this error was caused by caller-supplied parameters.
    #[inline]
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Create an invalid-parameter precondition error.
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::Precondition(PreconditionError::InvalidParameter {
            name,
            value: value.into(),
        })
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, BuoyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_display() {
        let err = PreconditionError::InvalidTracerCount(1);
        assert!(err.to_string().contains("Invalid tracer count 1"));

        let err = PreconditionError::InvalidBounds { lo: 5, hi: 5 };
        assert!(err.to_string().contains("[5, 5)"));
    }

    #[test]
    fn test_invariant_display() {
        let err = InvariantError::NonMonotoneGroup {
            group: 3,
            index: 4,
            previous: 10,
            value: 9,
        };
        assert!(err.to_string().contains("Group 3"));
        assert!(err.to_string().contains("10 > 9"));
    }

    #[test]
    fn test_buoy_error_classification() {
        let err: BuoyError = PreconditionError::InvalidRange(1).into();
        assert!(err.is_precondition());
        assert!(err.to_string().starts_with("Precondition violated"));

        let err: BuoyError = InvariantError::LinkerIndexOutOfBounds { index: 7, len: 3 }.into();
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = BuoyError::invalid_parameter("percentile", "must lie in (0, 1)");
        assert!(matches!(
            err,
            BuoyError::Precondition(PreconditionError::InvalidParameter {
                name: "percentile",
                ..
            })
        ));
    }
}
