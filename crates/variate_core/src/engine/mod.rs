//! # Random Engines
//!
//! This module defines the engine contract and the concrete generators
//! built on it.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: for a fixed engine type and seed the output
//!   sequence is fixed for all time and pinned by reference vectors
//! - **Static dispatch**: distributions are generic over `E: RandomEngine`;
//!   the word width is an associated type resolved at compile time
//! - **Single owner**: engines are plain values with no interior sharing
//!
//! ## Module Structure
//!
//! - [`splitmix`]: SplitMix64, also the seed expander for wider states
//! - [`xoshiro`]: Xoshiro256\*\*, the general-purpose engine
//! - [`pcg`]: Pcg64 (XSL-RR 128/64)
//! - [`lcg`]: Lcg32 and Lcg64
//! - [`std_rng`]: adapters over `rand` engines and the OS entropy source
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::engine::{Pcg64, RandomEngine, SeedableEngine};
//!
//! let mut rng = Pcg64::new(42);
//! let first = rng.next_word();
//!
//! rng.reseed(42);
//! assert_eq!(rng.next_word(), first);
//! ```

use std::fmt;

pub mod lcg;
pub mod pcg;
pub mod splitmix;
pub mod std_rng;
pub mod xoshiro;

pub use lcg::{Lcg32, Lcg64};
pub use pcg::Pcg64;
pub use splitmix::SplitMix64;
pub use std_rng::{EntropyRng, RngCoreAdapter, StdRng};
pub use xoshiro::Xoshiro256StarStar;


mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Fixed-width unsigned word produced by an engine.
///
/// Implemented for `u32` and `u64` only.
pub trait EngineWord:
    sealed::Sealed + Copy + Eq + Ord + fmt::Debug + fmt::LowerHex + Send + Sync + 'static
{
    /// Width of the word in bits.
    const BITS: u32;
    /// Smallest producible word.
    const MIN: Self;
    /// Largest producible word.
    const MAX: Self;

    /// Zero-extends the word to 64 bits.
    fn to_u64(self) -> u64;
}

impl EngineWord for u32 {
    const BITS: u32 = 32;
    const MIN: Self = 0;
    const MAX: Self = u32::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}

impl EngineWord for u64 {
    const BITS: u32 = 64;
    const MIN: Self = 0;
    const MAX: Self = u64::MAX;

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }
}

/// Capability shared by every engine: a deterministic stream of
/// fixed-width unsigned words.
///
/// Engines never fail. Every word in `[min_word(), max_word()]` is
/// producible.
pub trait RandomEngine {
    /// Output word type (`u32` or `u64`).
    type Word: EngineWord;

    /// Advances the state and returns one output word.
    fn next_word(&mut self) -> Self::Word;

    /// Smallest word this engine can produce.
    #[inline]
    fn min_word() -> Self::Word
    where
        Self: Sized,
    {
        Self::Word::MIN
    }

    /// Largest word this engine can produce.
    #[inline]
    fn max_word() -> Self::Word
    where
        Self: Sized,
    {
        Self::Word::MAX
    }

    /// Returns 64 uniformly distributed bits.
    ///
    /// 32-bit engines concatenate two consecutive words, the first one
    /// forming the high half.
    #[inline]
    fn next_bits64(&mut self) -> u64 {
        if Self::Word::BITS >= 64 {
            self.next_word().to_u64()
        } else {
            let hi = self.next_word().to_u64();
            let lo = self.next_word().to_u64();
            (hi << Self::Word::BITS) | lo
        }
    }

    /// Returns 32 uniformly distributed bits.
    ///
    /// 64-bit engines return the high half of one word.
    #[inline]
    fn next_bits32(&mut self) -> u32 {
        let word = self.next_word().to_u64();
        if Self::Word::BITS >= 64 {
            (word >> 32) as u32
        } else {
            word as u32
        }
    }

    /// Advances the state by `n` words, discarding the output.
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next_word();
        }
    }
}

/// Engines whose state is fully determined by a 64-bit seed.
///
/// Seeding the same value always produces the same state, and reseeding
/// an existing instance is indistinguishable from constructing a fresh
/// one.
pub trait SeedableEngine: RandomEngine + Sized {
    /// Seed used by `Default`.
    const DEFAULT_SEED: u64 = 0;

    /// Creates an engine seeded with `seed`.
    fn with_seed(seed: u64) -> Self;

    /// Creates an engine from several seed values.
    ///
    /// The values are folded with [`fold_seeds`]; a single value behaves
    /// exactly like [`SeedableEngine::with_seed`].
    fn with_seeds(seeds: &[u64]) -> Self {
        Self::with_seed(fold_seeds(seeds, Self::DEFAULT_SEED))
    }

    /// Resets the state as if freshly constructed with `seed`.
    fn reseed(&mut self, seed: u64) {
        *self = Self::with_seed(seed);
    }

    /// Resets the state as if freshly constructed with `seeds`.
    fn reseed_with(&mut self, seeds: &[u64]) {
        *self = Self::with_seeds(seeds);
    }
}

/// Folds a sequence of seed values into one.
///
/// The first value is kept. For each further value the accumulator is
/// passed through the SplitMix64 finaliser, xored with the value and
/// finalised again, so the fold depends on order and repeated values do
/// not cancel. An empty slice yields `empty`.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::fold_seeds;
///
/// assert_eq!(fold_seeds(&[17], 0), 17);
/// assert_eq!(fold_seeds(&[], 5), 5);
/// assert_ne!(fold_seeds(&[1, 2], 0), fold_seeds(&[2, 1], 0));
/// assert_ne!(fold_seeds(&[5, 5], 0), 0);
/// ```
pub fn fold_seeds(seeds: &[u64], empty: u64) -> u64 {
    match seeds.split_first() {
        None => empty,
        Some((&first, rest)) => rest
            .iter()
            .fold(first, |acc, &value| SplitMix64::mix(SplitMix64::mix(acc) ^ value)),
    }
}

/// Implements `rand::RngCore` for an engine so it can drive `rand`
/// distributions and `Rng` helpers.
macro_rules! impl_rng_core {
    ($engine:ty) => {
        impl rand::RngCore for $engine {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                $crate::engine::RandomEngine::next_bits32(self)
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                $crate::engine::RandomEngine::next_bits64(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                for chunk in dest.chunks_mut(8) {
                    let bytes = $crate::engine::RandomEngine::next_bits64(self).to_le_bytes();
                    chunk.copy_from_slice(&bytes[..chunk.len()]);
                }
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    };
}

pub(crate) use impl_rng_core;
