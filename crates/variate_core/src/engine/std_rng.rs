//! Adapters exposing `rand` engines through [`RandomEngine`].
//!
//! - [`StdRng`]: the `rand` standard engine, seedable
//! - [`EntropyRng`]: the operating system entropy source
//! - [`RngCoreAdapter`]: any other `rand::RngCore`
//!
//! `StdRng` is reproducible for a given seed only within one `rand`
//! release; the algorithm behind `rand::rngs::StdRng` may change between
//! releases. Use the engines in this crate when bit-exact reproducibility
//! across versions matters.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};

use super::{RandomEngine, SeedableEngine};

/// The `rand` standard engine behind the engine contract.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{RandomEngine, SeedableEngine, StdRng};
///
/// let mut a = StdRng::with_seed(12345);
/// let mut b = StdRng::with_seed(12345);
/// assert_eq!(a.next_word(), b.next_word());
/// ```
#[derive(Clone, Debug)]
pub struct StdRng {
    inner: rand::rngs::StdRng,
}

impl StdRng {
    /// Creates an engine seeded from the operating system entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source is unavailable.
    pub fn from_entropy() -> Self {
        Self {
            inner: rand::rngs::StdRng::from_entropy(),
        }
    }
}

impl RandomEngine for StdRng {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

impl SeedableEngine for StdRng {
    #[inline]
    fn with_seed(seed: u64) -> Self {
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRng {
    fn default() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }
}

impl RngCore for StdRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// The operating system entropy source behind the engine contract.
///
/// Not seedable and not reproducible. Each word is a system call into the
/// platform source (`getrandom`, `BCryptGenRandom`, ...), so it is far
/// slower than the deterministic engines; on some platforms it can block
/// early in boot until the kernel pool is initialised. Typical use is
/// drawing a seed for a deterministic engine.
///
/// # Panics
///
/// `next_word` panics if the platform source reports an error.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{EntropyRng, RandomEngine, SeedableEngine, Xoshiro256StarStar};
///
/// let seed = EntropyRng::new().next_word();
/// let _rng = Xoshiro256StarStar::with_seed(seed);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyRng {
    inner: OsRng,
}

impl EntropyRng {
    /// Creates a handle to the entropy source.
    #[inline]
    pub fn new() -> Self {
        Self { inner: OsRng }
    }
}

impl RandomEngine for EntropyRng {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Exposes any `rand::RngCore` as a 64-bit [`RandomEngine`].
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use variate_core::engine::{RandomEngine, RngCoreAdapter};
///
/// let mut engine = RngCoreAdapter::new(rand::rngs::StdRng::seed_from_u64(1));
/// let _word: u64 = engine.next_word();
/// ```
#[derive(Clone, Debug)]
pub struct RngCoreAdapter<R> {
    inner: R,
}

impl<R: RngCore> RngCoreAdapter<R> {
    /// Wraps `inner`.
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped engine.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> RandomEngine for RngCoreAdapter<R> {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        self.inner.next_u64()
    }
}
