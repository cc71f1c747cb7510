//! Engine selection by name.
//!
//! Commands are generic over [`RandomEngine`]; [`with_engine!`] expands a
//! command body once per engine kind so every engine runs with its native
//! word width.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use variate_core::engine::{EntropyRng, RandomEngine};

use crate::config::ConfigError;

/// Engines selectable from the command line and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineKind {
    /// SplitMix64
    SplitMix64,
    /// Xoshiro256**
    #[default]
    Xoshiro256StarStar,
    /// PCG XSL-RR 128/64
    Pcg64,
    /// 32-bit linear congruential
    Lcg32,
    /// 64-bit linear congruential
    Lcg64,
    /// The `rand` standard engine
    Std,
    /// Operating system entropy
    Entropy,
}

impl EngineKind {
    /// Every kind, in listing order.
    pub const ALL: [EngineKind; 7] = [
        EngineKind::SplitMix64,
        EngineKind::Xoshiro256StarStar,
        EngineKind::Pcg64,
        EngineKind::Lcg32,
        EngineKind::Lcg64,
        EngineKind::Std,
        EngineKind::Entropy,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::SplitMix64 => "splitmix64",
            EngineKind::Xoshiro256StarStar => "xoshiro256starstar",
            EngineKind::Pcg64 => "pcg64",
            EngineKind::Lcg32 => "lcg32",
            EngineKind::Lcg64 => "lcg64",
            EngineKind::Std => "std",
            EngineKind::Entropy => "entropy",
        }
    }

    /// Native output word width in bits.
    pub fn word_bits(&self) -> u32 {
        match self {
            EngineKind::Lcg32 => 32,
            _ => 64,
        }
    }

    /// Whether the engine's sequence is determined by a seed.
    pub fn is_seedable(&self) -> bool {
        !matches!(self, EngineKind::Entropy)
    }

    /// One-line description for `variate engines`.
    pub fn description(&self) -> &'static str {
        match self {
            EngineKind::SplitMix64 => "fast 64-bit mixer, also used to expand seeds",
            EngineKind::Xoshiro256StarStar => "general-purpose default, jumpable",
            EngineKind::Pcg64 => "128-bit state with selectable streams",
            EngineKind::Lcg32 => "Numerical Recipes LCG, low bits are weak",
            EngineKind::Lcg64 => "MMIX LCG, low bits are weak",
            EngineKind::Std => "rand StdRng, stable only within one rand release",
            EngineKind::Entropy => "operating system entropy, not reproducible",
        }
    }
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "splitmix64" | "splitmix" => Ok(EngineKind::SplitMix64),
            "xoshiro256starstar" | "xoshiro256**" | "xoshiro" => {
                Ok(EngineKind::Xoshiro256StarStar)
            }
            "pcg64" | "pcg" => Ok(EngineKind::Pcg64),
            "lcg32" => Ok(EngineKind::Lcg32),
            "lcg64" => Ok(EngineKind::Lcg64),
            "std" | "stdrng" => Ok(EngineKind::Std),
            "entropy" | "os" => Ok(EngineKind::Entropy),
            _ => Err(ConfigError::InvalidEngine(s.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EngineKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EngineKind::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Draws a seed from the operating system entropy source.
pub fn entropy_seed() -> u64 {
    EntropyRng::new().next_word()
}

/// Binds `$rng` to a freshly seeded engine of `$kind` and evaluates `$body`.
///
/// `$seed` is ignored for [`EngineKind::Entropy`].
macro_rules! with_engine {
    ($kind:expr, $seed:expr, |$rng:ident| $body:expr) => {{
        use variate_core::engine::SeedableEngine as _;
        let seed: u64 = $seed;
        match $kind {
            $crate::engine::EngineKind::SplitMix64 => {
                let mut $rng = variate_core::engine::SplitMix64::with_seed(seed);
                $body
            }
            $crate::engine::EngineKind::Xoshiro256StarStar => {
                let mut $rng = variate_core::engine::Xoshiro256StarStar::with_seed(seed);
                $body
            }
            $crate::engine::EngineKind::Pcg64 => {
                let mut $rng = variate_core::engine::Pcg64::with_seed(seed);
                $body
            }
            $crate::engine::EngineKind::Lcg32 => {
                let mut $rng = variate_core::engine::Lcg32::with_seed(seed);
                $body
            }
            $crate::engine::EngineKind::Lcg64 => {
                let mut $rng = variate_core::engine::Lcg64::with_seed(seed);
                $body
            }
            $crate::engine::EngineKind::Std => {
                let mut $rng = variate_core::engine::StdRng::with_seed(seed);
                $body
            }
            $crate::engine::EngineKind::Entropy => {
                let mut $rng = variate_core::engine::EntropyRng::new();
                $body
            }
        }
    }};
}

pub(crate) use with_engine;
