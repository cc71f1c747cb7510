//! Uniform choice from an explicit candidate set.

use super::uniform::sample_span;
use super::{BoundedDistribution, Distribution, FiniteDistribution};
use crate::engine::RandomEngine;
use crate::error::DistributionError;

/// Uniform pick from a fixed, non-empty sequence of candidates.
///
/// Each candidate has probability `1 / size()`; duplicates in the input
/// are separate candidates and therefore weigh proportionally more.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{Distribution, RandomChoice};
/// use variate_core::engine::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::default();
/// let suits = RandomChoice::new(["clubs", "diamonds", "hearts", "spades"]).unwrap();
/// assert_eq!(suits.size(), 4);
///
/// let suit = suits.sample(&mut rng);
/// assert!(suits.candidates().contains(&suit));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomChoice<T> {
    candidates: Vec<T>,
}

impl<T> RandomChoice<T> {
    /// Creates the distribution from a candidate sequence.
    ///
    /// # Errors
    ///
    /// Returns `DistributionError::EmptyCandidates` if the sequence is empty.
    pub fn new<I: IntoIterator<Item = T>>(candidates: I) -> Result<Self, DistributionError> {
        let candidates: Vec<T> = candidates.into_iter().collect();
        if candidates.is_empty() {
            return Err(DistributionError::EmptyCandidates);
        }
        Ok(Self { candidates })
    }

    /// Number of candidates.
    #[inline]
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    /// The candidates, in construction order.
    #[inline]
    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    /// Draws a candidate by reference, avoiding a clone for large types.
    #[inline]
    pub fn sample_ref<E: RandomEngine>(&self, engine: &mut E) -> &T {
        &self.candidates[self.draw_index(engine)]
    }
}

impl<T: Clone> Distribution for RandomChoice<T> {
    type Output = T;

    #[inline]
    fn sample<E: RandomEngine>(&self, engine: &mut E) -> T {
        self.sample_ref(engine).clone()
    }
}

impl<T: Clone + PartialOrd> BoundedDistribution for RandomChoice<T> {
    /// Smallest candidate; O(n).
    fn min(&self) -> T {
        self.candidates
            .iter()
            .fold(&self.candidates[0], |min, c| if c < min { c } else { min })
            .clone()
    }

    /// Largest candidate; O(n).
    fn max(&self) -> T {
        self.candidates
            .iter()
            .fold(&self.candidates[0], |max, c| if c > max { c } else { max })
            .clone()
    }
}

impl<T> FiniteDistribution for RandomChoice<T> {
    type Item = T;

    #[inline]
    fn population(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    fn draw_index<E: RandomEngine>(&self, engine: &mut E) -> usize {
        sample_span(engine, (self.candidates.len() - 1) as u64) as usize
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self.candidates[index]
    }

    fn is_uniform(&self) -> bool {
        true
    }
}
