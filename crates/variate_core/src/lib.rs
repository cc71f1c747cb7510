//! # variate_core: Deterministic Engines and Distribution Sampling
//!
//! ## Role
//!
//! variate_core is the foundation of the workspace, providing:
//! - Seedable pseudo-random engines (`engine`): SplitMix64, Xoshiro256\*\*,
//!   Pcg64, Lcg32/Lcg64 and adapters over `rand` engines
//! - Unbiased uniform transforms (`distributions::uniform`)
//! - Composite distributions: random choice, weighted choice, constrained
//!   (rejection-filtered) sampling and sampling without replacement
//! - Version-4 UUID generation (`uuid`)
//! - Error types: `DistributionError`, `SampleError` (`error`)
//!
//! ## Ownership Model
//!
//! Engines and distributions are plain values owned by the caller. There
//! is no shared or global generator anywhere in this crate; parallel
//! callers construct one engine per thread, typically by seeding each
//! from a SplitMix64 stream or by calling [`engine::Xoshiro256StarStar::jump`].
//!
//! Engines are statistical generators and must not be used for
//! cryptographic purposes.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::distributions::{Distribution, UniformInteger, WeightedChoice};
//! use variate_core::engine::{RandomEngine, SeedableEngine, Xoshiro256StarStar};
//!
//! let mut engine = Xoshiro256StarStar::with_seed(2024);
//!
//! let die = UniformInteger::new(1_u32, 6).unwrap();
//! let roll = die.sample(&mut engine);
//! assert!((1..=6).contains(&roll));
//!
//! let mut table = WeightedChoice::new();
//! table.add(3, ["common"]).unwrap().add(1, ["rare"]).unwrap();
//! assert_eq!(table.total_weight(), 4);
//! let _pick: &str = table.sample(&mut engine);
//!
//! // Same seed, same sequence
//! let mut a = Xoshiro256StarStar::with_seed(7);
//! let mut b = Xoshiro256StarStar::with_seed(7);
//! assert_eq!(a.next_word(), b.next_word());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod engine;
pub mod error;
pub mod uuid;

pub use distributions::{
    BoundedDistribution, ConstrainedDistribution, Distribution, FiniteDistribution, RandomChoice,
    UniformInteger, UniformReal, UniqueChoice, WeightedChoice,
};
pub use engine::{
    EntropyRng, Lcg32, Lcg64, Pcg64, RandomEngine, SeedableEngine, SplitMix64, StdRng,
    Xoshiro256StarStar,
};
pub use error::{DistributionError, SampleError};
pub use crate::uuid::RandomUuid;
