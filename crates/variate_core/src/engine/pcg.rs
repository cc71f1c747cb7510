//! Pcg64 generator (XSL-RR 128/64).
//!
//! 128-bit linear congruential state with an odd, seed-selectable
//! increment. Each output xor-folds the two halves of the pre-advance
//! state and rotates the result by its top six bits.

use super::{impl_rng_core, RandomEngine, SeedableEngine};

/// 128-bit LCG multiplier.
const MULTIPLIER: u128 = 0x2360_ed05_1fc6_5da4_4385_df64_9fcc_f645;

/// Increment used when no stream is selected.
pub const DEFAULT_INCREMENT: u128 = 0x5851_f42d_4c95_7f2d_1405_7b7e_f767_814f;

/// Pcg64 engine.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{Pcg64, RandomEngine};
///
/// let mut a = Pcg64::with_stream(42, 54);
/// assert_eq!(a.next_word(), 0x86b1_da1d_7206_2b68);
///
/// // Different streams from the same seed are independent sequences
/// let mut b = Pcg64::with_stream(42, 55);
/// assert_ne!(a.next_word(), b.next_word());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg64 {
    state: u128,
    increment: u128,
}

impl Pcg64 {
    /// Creates an engine on the default stream.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(u128::from(seed), DEFAULT_INCREMENT)
    }

    /// Creates an engine on the stream selected by `stream`.
    ///
    /// The increment is `stream << 1 | 1`, so streams differing only in
    /// the top bit coincide.
    #[inline]
    pub fn with_stream(seed: u128, stream: u128) -> Self {
        Self::from_parts(seed, (stream << 1) | 1)
    }

    /// Runs the reference seeding routine, then steps once more so that
    /// the pre-advance output matches the reference sequence.
    fn from_parts(seed: u128, increment: u128) -> Self {
        let mut pcg = Self {
            state: 0,
            increment,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(seed);
        pcg.step();
        pcg.step();
        pcg
    }

    /// Returns the increment (stream selector) of this engine.
    #[inline]
    pub fn increment(&self) -> u128 {
        self.increment
    }

    /// Advances the state by `delta` steps in O(log delta).
    ///
    /// Uses the square-and-multiply decomposition of the affine map
    /// `x -> a*x + c` (Brown, "Random Number Generation with Arbitrary
    /// Strides", 1994).
    pub fn advance(&mut self, mut delta: u128) {
        let mut acc_mult: u128 = 1;
        let mut acc_plus: u128 = 0;
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = self.increment;

        while delta > 0 {
            if delta & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }

        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    #[inline]
    fn output(state: u128) -> u64 {
        let rotation = (state >> 122) as u32;
        let folded = ((state >> 64) as u64) ^ (state as u64);
        folded.rotate_right(rotation)
    }
}

impl RandomEngine for Pcg64 {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        let state = self.state;
        self.step();
        Self::output(state)
    }

    #[inline]
    fn discard(&mut self, n: u64) {
        self.advance(u128::from(n));
    }
}

impl SeedableEngine for Pcg64 {
    #[inline]
    fn with_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl Default for Pcg64 {
    fn default() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }
}

impl_rng_core!(Pcg64);
