//! # Distributions
//!
//! Transforms from raw engine words to values with a specified law.
//!
//! Data flows one way: engine, then uniform transform, then composite
//! distribution, then caller. Distributions borrow the engine only for
//! the duration of a draw and never keep a reference to it.
//!
//! ## Module Structure
//!
//! - [`uniform`]: [`UniformInteger`] and [`UniformReal`]
//! - [`choice`]: [`RandomChoice`]
//! - [`weighted`]: [`WeightedChoice`]
//! - [`constrained`]: [`ConstrainedDistribution`]
//! - [`unique`]: [`UniqueChoice`]
//!
//! ## Rejection Loops
//!
//! Three places redraw instead of transforming: the uniform integer
//! transform (bias elimination, fewer than 2 expected draws), constrained
//! sampling (expected `1/p` draws for acceptance probability `p`) and
//! unique choice (a single attempt is rejected with probability at most one
//! half).
//! Each loop is written out in the sampling function it belongs to.

use crate::engine::RandomEngine;

pub mod choice;
pub mod constrained;
pub mod uniform;
pub mod unique;
pub mod weighted;

pub use choice::RandomChoice;
pub use constrained::ConstrainedDistribution;
pub use uniform::{SampleFloat, UniformInt, UniformInteger, UniformReal};
pub use unique::UniqueChoice;
pub use weighted::WeightedChoice;


/// A probability law over `Output`, sampled with a caller-supplied engine.
pub trait Distribution {
    /// Type of the sampled values.
    type Output;

    /// Draws one value.
    fn sample<E: RandomEngine>(&self, engine: &mut E) -> Self::Output;

    /// Draws `n` values into a new vector.
    fn sample_n<E: RandomEngine>(&self, engine: &mut E, n: usize) -> Vec<Self::Output> {
        (0..n).map(|_| self.sample(engine)).collect()
    }
}

/// A distribution whose achievable values lie in a known range.
pub trait BoundedDistribution: Distribution {
    /// Smallest value the distribution can produce.
    fn min(&self) -> Self::Output;

    /// Largest value the distribution can produce, or the exclusive upper
    /// bound when [`BoundedDistribution::max_is_exclusive`] holds.
    fn max(&self) -> Self::Output;

    /// Whether `max()` itself is never produced.
    fn max_is_exclusive(&self) -> bool {
        false
    }
}

/// A distribution over a finite, indexed population.
///
/// Sampling without replacement ([`UniqueChoice`]) works on indices, so
/// it needs index-level access to the population.
pub trait FiniteDistribution {
    /// Population item type.
    type Item;

    /// Number of items in the population.
    fn population(&self) -> usize;

    /// Draws an index in `0..population()` with the distribution's law.
    fn draw_index<E: RandomEngine>(&self, engine: &mut E) -> usize;

    /// Returns the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= population()`.
    fn item(&self, index: usize) -> &Self::Item;

    /// Relative weight of `index`: the probability of drawing it is
    /// `index_weight(index)` over the sum across the population.
    ///
    /// The sum must fit in a `u64`.
    fn index_weight(&self, _index: usize) -> u64 {
        1
    }

    /// Whether every index is equally likely.
    fn is_uniform(&self) -> bool {
        false
    }
}
