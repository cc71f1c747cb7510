//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: invalid parameters rejected at construction
//! - `SampleError`: conditions detected while drawing from a distribution
//!
//! Engines never fail; degenerate seeds are remapped internally.

use thiserror::Error;

/// Construction-time errors for distributions.
///
/// Raised when parameters would make a distribution meaningless or would
/// make sampling loop forever.
///
/// # Examples
/// ```
/// use variate_core::error::DistributionError;
///
/// let err = DistributionError::EmptyCandidates;
/// assert_eq!(format!("{}", err), "Candidate set must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// A choice distribution was built from an empty candidate sequence.
    #[error("Candidate set must not be empty")]
    EmptyCandidates,

    /// Bounds are reversed or otherwise unusable.
    #[error("Invalid range [{lo}, {hi}]: {reason}")]
    InvalidRange {
        /// Lower bound, rendered for diagnostics.
        lo: String,
        /// Upper bound, rendered for diagnostics.
        hi: String,
        /// Why the range was rejected.
        reason: &'static str,
    },

    /// A constraint range does not intersect the inner distribution's range.
    #[error("Constraint [{lo}, {hi}] does not intersect achievable range [{min}, {max}]")]
    DisjointBounds {
        /// Constraint lower bound.
        lo: String,
        /// Constraint upper bound.
        hi: String,
        /// Inner distribution minimum.
        min: String,
        /// Inner distribution maximum.
        max: String,
    },

    /// A weighted entry was added with weight zero.
    #[error("Weights must be positive")]
    ZeroWeight,

    /// The running total weight would exceed `u64::MAX`.
    #[error("Total weight overflow: {total} + {weight} exceeds u64::MAX")]
    WeightOverflow {
        /// Total weight before the failed addition.
        total: u64,
        /// Weight that could not be added.
        weight: u64,
    },
}

impl DistributionError {
    /// Create an invalid-range error from displayable bounds.
    pub fn invalid_range(
        lo: impl std::fmt::Debug,
        hi: impl std::fmt::Debug,
        reason: &'static str,
    ) -> Self {
        Self::InvalidRange {
            lo: format!("{:?}", lo),
            hi: format!("{:?}", hi),
            reason,
        }
    }
}

/// Errors raised while drawing samples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A weighted choice was sampled before any entry was added.
    #[error("Cannot sample a weighted choice with zero total weight")]
    EmptyWeightTable,

    /// Every item of a unique-choice pool was drawn since the last reset.
    #[error("Unique-choice pool of {population} items is exhausted; call reset() first")]
    PoolExhausted {
        /// Number of items in the pool.
        population: usize,
    },

    /// A bounded rejection loop gave up without an accepted draw.
    #[error("No acceptable value after {attempts} attempts")]
    RejectionLimit {
        /// Number of draws attempted.
        attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = DistributionError::invalid_range(10, 3, "lo must not exceed hi");
        assert_eq!(
            err.to_string(),
            "Invalid range [10, 3]: lo must not exceed hi"
        );
    }

    #[test]
    fn test_weight_overflow_display() {
        let err = DistributionError::WeightOverflow {
            total: u64::MAX,
            weight: 1,
        };
        assert!(err.to_string().contains("exceeds u64::MAX"));
    }

    #[test]
    fn test_sample_error_display() {
        let err = SampleError::PoolExhausted { population: 10 };
        assert!(err.to_string().contains("10 items"));

        let err = SampleError::RejectionLimit { attempts: 64 };
        assert_eq!(err.to_string(), "No acceptable value after 64 attempts");
    }
}
