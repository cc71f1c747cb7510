//! Rejection-filtered wrapper around a bounded distribution.
//!
//! Draws from the inner distribution and redraws any value outside
//! `[lo, hi]`. With acceptance probability `p` the expected number of
//! inner draws per sample is `1 / p`. The accepted values follow the
//! inner law conditioned on acceptance; they are uniform over the
//! intersection only if the inner distribution is uniform.

use std::fmt;

use super::{BoundedDistribution, Distribution};
use crate::engine::RandomEngine;
use crate::error::{DistributionError, SampleError};

/// A distribution restricted to `[lo, hi]` by rejection sampling.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{
///     BoundedDistribution, ConstrainedDistribution, Distribution, UniformInteger,
/// };
/// use variate_core::engine::Xoshiro256StarStar;
///
/// let inner = UniformInteger::new(1_u32, 100).unwrap();
/// let teens = ConstrainedDistribution::new(inner, 13, 19).unwrap();
/// assert_eq!((teens.min(), teens.max()), (13, 19));
///
/// let mut rng = Xoshiro256StarStar::default();
/// let age = teens.sample(&mut rng);
/// assert!((13..=19).contains(&age));
/// ```
pub struct ConstrainedDistribution<D: BoundedDistribution> {
    inner: D,
    lo: D::Output,
    hi: D::Output,
    hi_exclusive: bool,
}

impl<D> ConstrainedDistribution<D>
where
    D: BoundedDistribution,
    D::Output: PartialOrd + Clone + fmt::Debug,
{
    /// Wraps `inner`, accepting only values in `[lo, hi]`.
    ///
    /// The effective bounds are the intersection of `[lo, hi]` with the
    /// inner range. When the inner range is half-open and `hi` reaches its
    /// upper bound, the effective range stays half-open.
    ///
    /// # Errors
    ///
    /// - `DistributionError::InvalidRange` if `lo > hi` or the bounds are
    ///   not comparable
    /// - `DistributionError::DisjointBounds` if `[lo, hi]` does not
    ///   intersect the inner range, which would never accept. A filter
    ///   starting at an exclusive `inner.max()` is disjoint.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(inner: D, lo: D::Output, hi: D::Output) -> Result<Self, DistributionError> {
        if !(lo <= hi) {
            return Err(DistributionError::invalid_range(
                lo,
                hi,
                "lo must not exceed hi",
            ));
        }

        let min = inner.min();
        let max = inner.max();
        let max_exclusive = inner.max_is_exclusive();
        let above = if max_exclusive { !(lo < max) } else { !(lo <= max) };
        if !(hi >= min) || above {
            return Err(DistributionError::DisjointBounds {
                lo: format!("{:?}", lo),
                hi: format!("{:?}", hi),
                min: format!("{:?}", min),
                max: format!("{:?}", max),
            });
        }

        let lo = if lo > min { lo } else { min };
        let (hi, hi_exclusive) = if hi < max {
            (hi, false)
        } else {
            (max, max_exclusive)
        };
        Ok(Self {
            inner,
            lo,
            hi,
            hi_exclusive,
        })
    }

    /// The wrapped distribution.
    #[inline]
    pub fn inner(&self) -> &D {
        &self.inner
    }

    #[inline]
    fn accepts(&self, value: &D::Output) -> bool {
        *value >= self.lo && *value <= self.hi
    }

    /// Draws with at most `max_attempts` inner draws.
    ///
    /// Needed when the inner distribution is discrete: a range can
    /// intersect `[min, max]` while containing none of its values.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::RejectionLimit` if no draw was accepted.
    pub fn try_sample<E: RandomEngine>(
        &self,
        engine: &mut E,
        max_attempts: usize,
    ) -> Result<D::Output, SampleError> {
        for _ in 0..max_attempts {
            let value = self.inner.sample(engine);
            if self.accepts(&value) {
                return Ok(value);
            }
        }
        Err(SampleError::RejectionLimit {
            attempts: max_attempts,
        })
    }
}

impl<D> Distribution for ConstrainedDistribution<D>
where
    D: BoundedDistribution,
    D::Output: PartialOrd + Clone + fmt::Debug,
{
    type Output = D::Output;

    /// Draws until a value in `[lo, hi]` is produced.
    ///
    /// Loops forever if the inner distribution cannot produce any value in
    /// the range; use [`ConstrainedDistribution::try_sample`] when that is
    /// possible.
    fn sample<E: RandomEngine>(&self, engine: &mut E) -> D::Output {
        loop {
            let value = self.inner.sample(engine);
            if self.accepts(&value) {
                return value;
            }
        }
    }
}

impl<D> BoundedDistribution for ConstrainedDistribution<D>
where
    D: BoundedDistribution,
    D::Output: PartialOrd + Clone + fmt::Debug,
{
    fn min(&self) -> D::Output {
        self.lo.clone()
    }

    fn max(&self) -> D::Output {
        self.hi.clone()
    }

    fn max_is_exclusive(&self) -> bool {
        self.hi_exclusive
    }
}

impl<D> Clone for ConstrainedDistribution<D>
where
    D: BoundedDistribution + Clone,
    D::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            lo: self.lo.clone(),
            hi: self.hi.clone(),
            hi_exclusive: self.hi_exclusive,
        }
    }
}

impl<D> fmt::Debug for ConstrainedDistribution<D>
where
    D: BoundedDistribution + fmt::Debug,
    D::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstrainedDistribution")
            .field("inner", &self.inner)
            .field("lo", &self.lo)
            .field("hi", &self.hi)
            .field("hi_exclusive", &self.hi_exclusive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{RandomChoice, UniformInteger, UniformReal};
    use crate::engine::{SeedableEngine, Xoshiro256StarStar};

    #[test]
    fn test_samples_within_filter() {
        let mut rng = Xoshiro256StarStar::with_seed(5);
        let inner = UniformInteger::new(0_i32, 99).unwrap();
        let dist = ConstrainedDistribution::new(inner, 40, 59).unwrap();

        for _ in 0..10_000 {
            let v = dist.sample(&mut rng);
            assert!((40..=59).contains(&v), "value {} outside [40, 59]", v);
        }
    }

    #[test]
    fn test_effective_bounds_are_intersection() {
        let inner = UniformInteger::new(10_u8, 20).unwrap();
        let dist = ConstrainedDistribution::new(inner, 0, 15).unwrap();
        assert_eq!(dist.min(), 10);
        assert_eq!(dist.max(), 15);
    }

    #[test]
    fn test_disjoint_bounds_rejected() {
        let inner = UniformInteger::new(10_u8, 20).unwrap();
        let err = ConstrainedDistribution::new(inner, 21, 30).unwrap_err();
        assert!(matches!(err, DistributionError::DisjointBounds { .. }));
    }

    #[test]
    fn test_filter_at_exclusive_upper_bound_is_disjoint() {
        let inner = UniformReal::new(0.0_f64, 1.0).unwrap();
        let err = ConstrainedDistribution::new(inner, 1.0, 2.0).unwrap_err();
        assert!(matches!(err, DistributionError::DisjointBounds { .. }));
    }

    #[test]
    fn test_filter_at_inclusive_upper_bound_is_accepted() {
        let mut rng = Xoshiro256StarStar::with_seed(6);
        let inner = UniformInteger::new(0_u8, 10).unwrap();
        let dist = ConstrainedDistribution::new(inner, 10, 20).unwrap();
        assert_eq!((dist.min(), dist.max()), (10, 10));
        assert!(!dist.max_is_exclusive());
        assert_eq!(dist.try_sample(&mut rng, 10_000).unwrap(), 10);
    }

    #[test]
    fn test_half_open_range_survives_nesting() {
        let mut rng = Xoshiro256StarStar::with_seed(6);
        let inner = UniformReal::new(0.0_f64, 1.0).unwrap();
        let upper = ConstrainedDistribution::new(inner, 0.5, 3.0).unwrap();
        assert_eq!(upper.max(), 1.0);
        assert!(upper.max_is_exclusive());

        let err = ConstrainedDistribution::new(upper.clone(), 1.0, 1.5).unwrap_err();
        assert!(matches!(err, DistributionError::DisjointBounds { .. }));

        let lower = ConstrainedDistribution::new(inner, 0.0, 0.25).unwrap();
        assert!(!lower.max_is_exclusive());

        for _ in 0..1000 {
            let v = upper.sample(&mut rng);
            assert!((0.5..1.0).contains(&v));
        }
    }

    #[test]
    fn test_degenerate_real_range_is_inclusive() {
        let inner = UniformReal::new(2.0_f64, 2.0).unwrap();
        assert!(!inner.max_is_exclusive());
        let dist = ConstrainedDistribution::new(inner, 2.0, 3.0).unwrap();
        let mut rng = Xoshiro256StarStar::with_seed(6);
        assert_eq!(dist.sample(&mut rng), 2.0);
    }

    #[test]
    fn test_reversed_filter_rejected() {
        let inner = UniformReal::new(0.0_f64, 1.0).unwrap();
        let err = ConstrainedDistribution::new(inner, 0.8, 0.2).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidRange { .. }));

        let err = ConstrainedDistribution::new(inner, f64::NAN, 0.5).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidRange { .. }));
    }

    #[test]
    fn test_try_sample_gives_up_on_gap() {
        let mut rng = Xoshiro256StarStar::with_seed(5);
        let inner = RandomChoice::new([1, 10]).unwrap();
        let dist = ConstrainedDistribution::new(inner, 3, 5).unwrap();

        let err = dist.try_sample(&mut rng, 64).unwrap_err();
        assert_eq!(err, SampleError::RejectionLimit { attempts: 64 });
    }

    #[test]
    fn test_try_sample_accepts() {
        let mut rng = Xoshiro256StarStar::with_seed(5);
        let inner = UniformInteger::new(0_u32, 9).unwrap();
        let dist = ConstrainedDistribution::new(inner, 5, 9).unwrap();
        let v = dist.try_sample(&mut rng, 1000).unwrap();
        assert!((5..=9).contains(&v));
    }

    #[test]
    fn test_nested_constraints() {
        let mut rng = Xoshiro256StarStar::with_seed(8);
        let inner = UniformInteger::new(0_u32, 1000).unwrap();
        let outer = ConstrainedDistribution::new(inner, 100, 500).unwrap();
        let nested = ConstrainedDistribution::new(outer, 400, 900).unwrap();

        assert_eq!((nested.min(), nested.max()), (400, 500));
        for _ in 0..1000 {
            let v = nested.sample(&mut rng);
            assert!((400..=500).contains(&v));
        }
    }
}
