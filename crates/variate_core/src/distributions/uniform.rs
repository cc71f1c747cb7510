//! Uniform integer and real transforms.
//!
//! ## Integer Bias Elimination
//!
//! For a range of `R` values drawn from `W`-bit words, reducing every word
//! modulo `R` would favour the first `2^W mod R` values. Words falling in
//! that trailing partial bucket are rejected and redrawn instead, so each
//! accepted residue has exactly `floor(2^W / R)` preimages. The rejection
//! probability per draw is `(2^W mod R) / 2^W`, always below one half, so
//! the expected number of draws is below two.
//!
//! 32-bit engines draw one word when `R <= 2^32` and two concatenated
//! words otherwise.
//!
//! ## Real Upper-Bound Policy
//!
//! [`UniformReal`] forms a unit value from the top 53 (`f64`) or 24
//! (`f32`) bits of a 64-bit draw, which is exact and lies in `[0, 1)`.
//! Scaling by `hi - lo` may still round up to `hi`; such results are
//! redrawn, so outputs always lie in `[lo, hi)`.

use std::fmt;

use num_traits::Float;

use super::{BoundedDistribution, Distribution};
use crate::engine::{EngineWord, RandomEngine};
use crate::error::DistributionError;

const SIGN_BIT: u64 = 1 << 63;

/// Draws a value in `[0, span]` without modulo bias.
pub(crate) fn sample_span<E: RandomEngine>(engine: &mut E, span: u64) -> u64 {
    if span == u64::MAX {
        return engine.next_bits64();
    }
    let range = span + 1;

    let bits = E::Word::BITS;
    if bits < 64 && range <= (1_u64 << bits) {
        let word_range = 1_u64 << bits;
        let limit = word_range - word_range % range;
        loop {
            let word = engine.next_word().to_u64();
            if word < limit {
                return word % range;
            }
        }
    }

    // 2^64 mod range, computed without 128-bit arithmetic.
    let rejected = range.wrapping_neg() % range;
    let limit = u64::MAX - rejected;
    loop {
        let word = engine.next_bits64();
        if word <= limit {
            return word % range;
        }
    }
}

/// Integer types supported by [`UniformInteger`].
///
/// Values are mapped order-preservingly onto `u64` so that one transform
/// serves every width and signedness up to 64 bits.
pub trait UniformInt: Copy + PartialOrd + fmt::Debug {
    /// Order-preserving map into `u64`.
    fn to_ordered(self) -> u64;

    /// Inverse of [`UniformInt::to_ordered`].
    fn from_ordered(value: u64) -> Self;
}

macro_rules! impl_uniform_unsigned {
    ($($t:ty),*) => {$(
        impl UniformInt for $t {
            #[inline]
            fn to_ordered(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_ordered(value: u64) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_uniform_signed {
    ($($t:ty),*) => {$(
        impl UniformInt for $t {
            #[inline]
            fn to_ordered(self) -> u64 {
                (self as i64 as u64) ^ SIGN_BIT
            }

            #[inline]
            fn from_ordered(value: u64) -> Self {
                (value ^ SIGN_BIT) as i64 as $t
            }
        }
    )*};
}

impl_uniform_unsigned!(u8, u16, u32, u64, usize);
impl_uniform_signed!(i8, i16, i32, i64, isize);

/// Uniform distribution over the integers in `[lo, hi]`.
///
/// Every value in the range has exactly equal probability.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{Distribution, UniformInteger};
/// use variate_core::engine::Pcg64;
///
/// let mut rng = Pcg64::new(42);
/// let dist = UniformInteger::new(-10_i32, 10).unwrap();
///
/// for _ in 0..100 {
///     let v = dist.sample(&mut rng);
///     assert!((-10..=10).contains(&v));
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformInteger<T> {
    lo: T,
    hi: T,
    base: u64,
    span: u64,
}

impl<T: UniformInt> UniformInteger<T> {
    /// Creates the distribution over `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidRange` if `lo > hi`.
    pub fn new(lo: T, hi: T) -> Result<Self, DistributionError> {
        if lo > hi {
            return Err(DistributionError::invalid_range(
                lo,
                hi,
                "lo must not exceed hi",
            ));
        }
        let base = lo.to_ordered();
        Ok(Self {
            lo,
            hi,
            base,
            span: hi.to_ordered() - base,
        })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }

    /// Number of distinct values, `hi - lo + 1`.
    #[inline]
    pub fn range_size(&self) -> u128 {
        u128::from(self.span) + 1
    }
}

impl<T: UniformInt> Distribution for UniformInteger<T> {
    type Output = T;

    #[inline]
    fn sample<E: RandomEngine>(&self, engine: &mut E) -> T {
        T::from_ordered(self.base + sample_span(engine, self.span))
    }
}

impl<T: UniformInt> BoundedDistribution for UniformInteger<T> {
    fn min(&self) -> T {
        self.lo
    }

    fn max(&self) -> T {
        self.hi
    }
}

/// Floating-point types supported by [`UniformReal`].
pub trait SampleFloat: Float + fmt::Debug {
    /// Significand precision in bits, including the implicit bit.
    const PRECISION: u32;

    /// Maps the top `PRECISION` bits of `bits` to a value in `[0, 1)`.
    fn unit_from_bits(bits: u64) -> Self;
}

impl SampleFloat for f64 {
    const PRECISION: u32 = 53;

    #[inline]
    fn unit_from_bits(bits: u64) -> Self {
        (bits >> (64 - Self::PRECISION)) as f64 * (1.0 / (1_u64 << Self::PRECISION) as f64)
    }
}

impl SampleFloat for f32 {
    const PRECISION: u32 = 24;

    #[inline]
    fn unit_from_bits(bits: u64) -> Self {
        (bits >> (64 - Self::PRECISION)) as f32 * (1.0 / (1_u32 << Self::PRECISION) as f32)
    }
}

/// Uniform distribution over the reals in `[lo, hi)`.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{Distribution, UniformReal};
/// use variate_core::engine::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::default();
/// let dist = UniformReal::new(-1.0_f64, 1.0).unwrap();
/// let x = dist.sample(&mut rng);
/// assert!(x >= -1.0 && x < 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformReal<T> {
    lo: T,
    hi: T,
    width: T,
}

impl<T: SampleFloat> UniformReal<T> {
    /// Creates the distribution over `[lo, hi)`.
    ///
    /// `lo == hi` is accepted and always yields `lo`.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidRange` if either bound is not
    /// finite, if `lo > hi`, or if `hi - lo` overflows.
    pub fn new(lo: T, hi: T) -> Result<Self, DistributionError> {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(DistributionError::invalid_range(
                lo,
                hi,
                "bounds must be finite",
            ));
        }
        if lo > hi {
            return Err(DistributionError::invalid_range(
                lo,
                hi,
                "lo must not exceed hi",
            ));
        }
        let width = hi - lo;
        if !width.is_finite() {
            return Err(DistributionError::invalid_range(
                lo,
                hi,
                "width must be finite",
            ));
        }
        Ok(Self { lo, hi, width })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Upper bound (exclusive).
    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }
}

impl<T: SampleFloat> Distribution for UniformReal<T> {
    type Output = T;

    fn sample<E: RandomEngine>(&self, engine: &mut E) -> T {
        if self.width == T::zero() {
            return self.lo;
        }
        loop {
            let unit = T::unit_from_bits(engine.next_bits64());
            let value = self.lo + unit * self.width;
            if value < self.hi {
                return value;
            }
        }
    }
}

impl<T: SampleFloat> BoundedDistribution for UniformReal<T> {
    fn min(&self) -> T {
        self.lo
    }

    fn max(&self) -> T {
        self.hi
    }

    /// `[lo, hi)` excludes `hi`, except in the degenerate `lo == hi` case.
    fn max_is_exclusive(&self) -> bool {
        self.lo < self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Lcg32, SeedableEngine, SplitMix64};
    use approx::assert_relative_eq;

    /// 32-bit engine replaying a fixed word sequence.
    struct ScriptedEngine {
        words: Vec<u32>,
        index: usize,
    }

    impl ScriptedEngine {
        fn new(words: Vec<u32>) -> Self {
            Self { words, index: 0 }
        }
    }

    impl RandomEngine for ScriptedEngine {
        type Word = u32;

        fn next_word(&mut self) -> u32 {
            let word = self.words[self.index];
            self.index += 1;
            word
        }
    }

    #[test]
    fn test_partial_bucket_is_rejected() {
        // 2^32 mod 3 == 1, so only u32::MAX falls in the partial bucket.
        let mut engine = ScriptedEngine::new(vec![u32::MAX, 5]);
        let dist = UniformInteger::new(0_u32, 2).unwrap();

        assert_eq!(dist.sample(&mut engine), 2);
        assert_eq!(engine.index, 2);
    }

    #[test]
    fn test_word_below_limit_is_accepted_first_time() {
        let mut engine = ScriptedEngine::new(vec![u32::MAX - 1]);
        let dist = UniformInteger::new(0_u32, 2).unwrap();

        // (2^32 - 2) mod 3 == 2
        assert_eq!(dist.sample(&mut engine), 2);
        assert_eq!(engine.index, 1);
    }

    #[test]
    fn test_wide_range_on_narrow_engine_uses_two_words() {
        let mut engine = ScriptedEngine::new(vec![1, 2]);
        let dist = UniformInteger::new(0_u64, 1 << 40).unwrap();

        assert_eq!(dist.sample(&mut engine), (1 << 32) | 2);
        assert_eq!(engine.index, 2);
    }

    #[test]
    fn test_power_of_two_range_never_rejects() {
        let mut engine = ScriptedEngine::new(vec![u32::MAX, 0, 7]);
        let dist = UniformInteger::new(0_u8, 255).unwrap();

        assert_eq!(dist.sample(&mut engine), 255);
        assert_eq!(dist.sample(&mut engine), 0);
        assert_eq!(dist.sample(&mut engine), 7);
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        let err = UniformInteger::new(5_i32, 4).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidRange { .. }));
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = SplitMix64::default();
        let dist = UniformInteger::new(-7_i16, -7).unwrap();
        for _ in 0..10 {
            assert_eq!(dist.sample(&mut rng), -7);
        }
        assert_eq!(dist.range_size(), 1);
    }

    #[test]
    fn test_full_signed_range() {
        let mut rng = SplitMix64::default();
        let dist = UniformInteger::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(dist.range_size(), 1_u128 << 64);

        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..100 {
            let v = dist.sample(&mut rng);
            saw_negative |= v < 0;
            saw_positive |= v > 0;
        }
        assert!(saw_negative && saw_positive);
    }

    #[test]
    fn test_signed_ordering_map() {
        assert!(i8::MIN.to_ordered() < (-1_i8).to_ordered());
        assert!((-1_i8).to_ordered() < 0_i8.to_ordered());
        assert!(0_i8.to_ordered() < i8::MAX.to_ordered());
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(i32::from_ordered(v.to_ordered()), v);
        }
    }

    #[test]
    fn test_small_signed_range_covers_all_values() {
        let mut rng = Lcg32::with_seed(1);
        let dist = UniformInteger::new(-3_i8, 3).unwrap();
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let v = dist.sample(&mut rng);
            seen[(v + 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_unit_from_bits_extremes() {
        assert_eq!(f64::unit_from_bits(0), 0.0);
        assert!(f64::unit_from_bits(u64::MAX) < 1.0);
        assert_relative_eq!(f64::unit_from_bits(1 << 63), 0.5);

        assert_eq!(f32::unit_from_bits(0), 0.0);
        assert!(f32::unit_from_bits(u64::MAX) < 1.0);
        assert_relative_eq!(f32::unit_from_bits(1 << 63), 0.5);
    }

    #[test]
    fn test_real_upper_bound_excluded() {
        // The largest unit value times a width of 1.0 rounds to exactly hi
        // when lo is large; such draws must be redrawn.
        let dist = UniformReal::new(1.0e16_f64, 1.0e16 + 2.0).unwrap();
        let mut engine = ScriptedEngine::new(vec![u32::MAX, u32::MAX, 0, 0]);
        assert_eq!(dist.sample(&mut engine), 1.0e16);
        assert_eq!(engine.index, 4);
    }

    #[test]
    fn test_real_degenerate_range() {
        let mut rng = SplitMix64::default();
        let dist = UniformReal::new(2.5_f32, 2.5).unwrap();
        assert_eq!(dist.sample(&mut rng), 2.5);
    }

    #[test]
    fn test_real_invalid_bounds() {
        assert!(UniformReal::new(1.0_f64, 0.0).is_err());
        assert!(UniformReal::new(f64::NAN, 1.0).is_err());
        assert!(UniformReal::new(0.0_f64, f64::INFINITY).is_err());
        assert!(UniformReal::new(-f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn test_real_range_and_mean() {
        let mut rng = SplitMix64::with_seed(11);
        let dist = UniformReal::new(-2.0_f64, 6.0).unwrap();
        let n = 100_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = dist.sample(&mut rng);
            assert!((-2.0..6.0).contains(&x));
            sum += x;
        }
        assert_relative_eq!(sum / n as f64, 2.0, epsilon = 0.05);
    }
}
