//! SplitMix64 generator.
//!
//! A single 64-bit counter advanced by the golden-ratio increment and
//! passed through a two-round multiply/xor-shift finaliser. Besides being
//! a usable engine on its own, it expands short seeds into the state
//! vectors of the wider engines.

use super::{impl_rng_core, RandomEngine, SeedableEngine};

/// Weyl-sequence increment (2^64 / golden ratio, odd).
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 engine.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{RandomEngine, SplitMix64};
///
/// let mut rng = SplitMix64::default();
/// assert_eq!(rng.next_word(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator whose counter starts at `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// The SplitMix64 output finaliser.
    ///
    /// A bijection on `u64` with strong avalanche; also used to fold
    /// multi-value seeds.
    #[inline]
    pub fn mix(value: u64) -> u64 {
        let mut z = value;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Fills `N` state words by successive draws from a generator seeded
    /// with `seed`.
    pub fn expand<const N: usize>(seed: u64) -> [u64; N] {
        let mut expander = Self::new(seed);
        std::array::from_fn(|_| expander.next_word())
    }
}

impl RandomEngine for SplitMix64 {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        Self::mix(self.state)
    }

    #[inline]
    fn discard(&mut self, n: u64) {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA.wrapping_mul(n));
    }
}

impl SeedableEngine for SplitMix64 {
    #[inline]
    fn with_seed(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }
}

impl_rng_core!(SplitMix64);
