//! Xoshiro256\*\* generator.
//!
//! Four 64-bit words of state, output scrambled as `rotl(s1 * 5, 7) * 9`
//! before the xorshift-rotate advance. Reference: Blackman & Vigna,
//! "Scrambled Linear Pseudorandom Number Generators" (2018).

use super::{impl_rng_core, RandomEngine, SeedableEngine, SplitMix64};

/// Jump polynomial equivalent to 2^128 calls of `next_word`.
const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Jump polynomial equivalent to 2^192 calls of `next_word`.
const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

/// Xoshiro256\*\* engine.
///
/// Seeds are expanded into the 256-bit state with four SplitMix64 draws.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{RandomEngine, Xoshiro256StarStar};
///
/// let mut rng = Xoshiro256StarStar::default();
/// assert_eq!(rng.next_word(), 0x99ec_5f36_cb75_f2b4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Creates an engine from a raw state vector.
    ///
    /// The all-zero state is a fixed point of the transition, so it is
    /// replaced by the state of the default seed.
    pub fn from_state(state: [u64; 4]) -> Self {
        if state == [0; 4] {
            Self::with_seed(Self::DEFAULT_SEED)
        } else {
            Self { s: state }
        }
    }

    /// Advances the state by 2^128 steps.
    ///
    /// Successive jumps from one seed give up to 2^128 non-overlapping
    /// streams, one per thread.
    pub fn jump(&mut self) {
        self.apply_polynomial(&JUMP);
    }

    /// Advances the state by 2^192 steps.
    ///
    /// Intended for partitioning streams across processes, each of which
    /// may then `jump` per thread.
    pub fn long_jump(&mut self) {
        self.apply_polynomial(&LONG_JUMP);
    }

    fn apply_polynomial(&mut self, polynomial: &[u64; 4]) {
        let mut acc = [0_u64; 4];
        for &word in polynomial {
            for bit in 0..64 {
                if word & (1_u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.next_word();
            }
        }
        self.s = acc;
    }
}

impl RandomEngine for Xoshiro256StarStar {
    type Word = u64;

    #[inline]
    fn next_word(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

impl SeedableEngine for Xoshiro256StarStar {
    fn with_seed(seed: u64) -> Self {
        let s = SplitMix64::expand::<4>(seed);
        // Four consecutive SplitMix64 outputs cannot all be zero, since
        // the finaliser is a bijection over distinct counters.
        Self { s }
    }
}

impl Default for Xoshiro256StarStar {
    fn default() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }
}

impl_rng_core!(Xoshiro256StarStar);
