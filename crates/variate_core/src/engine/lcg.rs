//! Single-word linear congruential engines.
//!
//! `state = state * A + C (mod 2^W)`, returning the new state. These are
//! the fastest and statistically weakest engines here: the low bits have
//! short periods (bit `k` repeats every `2^(k+1)` draws). Distributions
//! built on them draw whole words, so the weakness mostly shows in
//! narrow power-of-two ranges.

use super::{impl_rng_core, RandomEngine, SeedableEngine};

/// 32-bit linear congruential engine (Numerical Recipes constants).
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{Lcg32, RandomEngine};
///
/// let mut rng = Lcg32::new(0);
/// assert_eq!(rng.next_word(), 1_013_904_223);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Multiplier.
    pub const MULTIPLIER: u32 = 1_664_525;
    /// Increment.
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Creates an engine with the given 32-bit state.
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RandomEngine for Lcg32 {
    type Word = u32;

    #[inline]
    fn next_word(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

impl SeedableEngine for Lcg32 {
    /// Folds the high half of the seed into the low half, so seeds that
    /// differ only above bit 31 still give different streams.
    #[inline]
    fn with_seed(seed: u64) -> Self {
        Self::new((seed ^ (seed >> 32)) as u32)
    }
}

impl Default for Lcg32 {
    fn default() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }
}

impl_rng_core!(Lcg32);

/// 64-bit linear congruential engine (Knuth's MMIX constants).
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{Lcg64, RandomEngine};
///
/// let mut rng = Lcg64::new(0);
/// assert_eq!(rng.next_word(), 0x1405_7b7e_f767_814f);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Multiplier.
    pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    /// Increment.
    pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Creates an engine with the given state.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomEngine for Lcg64 {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

impl SeedableEngine for Lcg64 {
    #[inline]
    fn with_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl Default for Lcg64 {
    fn default() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }
}

impl_rng_core!(Lcg64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg32_seed_folds_high_half() {
        assert_eq!(Lcg32::with_seed(5), Lcg32::new(5));
        assert_ne!(Lcg32::with_seed(1 << 40), Lcg32::with_seed(0));
    }

    #[test]
    fn test_lcg32_full_period_on_low_byte() {
        // An LCG mod 2^W with odd C and A = 1 (mod 4) has full period;
        // the low 8 bits therefore cycle through all 256 values.
        let mut rng = Lcg32::new(0);
        let mut seen = [false; 256];
        for _ in 0..256 {
            seen[(rng.next_word() & 0xff) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_lcg64_sequence() {
        let mut rng = Lcg64::default();
        assert_eq!(rng.next_word(), 0x1405_7b7e_f767_814f);
        assert_eq!(rng.next_word(), 0x1a08_ee11_84ba_6d32);
        assert_eq!(rng.next_word(), 0x9af6_7822_2e72_8119);
    }
}
