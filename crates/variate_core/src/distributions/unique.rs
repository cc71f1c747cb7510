//! Sampling without replacement.
//!
//! [`UniqueChoice`] wraps a finite distribution and records which indices
//! were returned since the last [`UniqueChoice::reset`], along with their
//! combined weight. Each draw redraws indices from the inner law until an
//! unreturned one comes up.
//!
//! Plain rejection degrades as the pool empties: an attempt is rejected
//! with probability `drawn_weight / total_weight`. Once the drawn weight
//! reaches half the total, the draw instead picks among the remaining
//! indices directly, with probability proportional to their weights. The
//! probability that a single attempt is rejected therefore never exceeds
//! one half, and the expected number of inner draws per call stays below
//! two. Both paths give successive weighted sampling without replacement.

use super::uniform::sample_span;
use super::FiniteDistribution;
use crate::engine::RandomEngine;
use crate::error::SampleError;

/// Sampling without replacement from a finite population.
///
/// Drawing from an exhausted pool is a precondition violation reported as
/// `SampleError::PoolExhausted`; it never loops.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{RandomChoice, UniqueChoice};
/// use variate_core::engine::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::default();
/// let mut deck = UniqueChoice::new(RandomChoice::new(1..=5).unwrap());
///
/// let mut hand: Vec<i32> = (0..5).map(|_| deck.draw(&mut rng).unwrap()).collect();
/// hand.sort();
/// assert_eq!(hand, vec![1, 2, 3, 4, 5]);
///
/// assert!(deck.draw(&mut rng).is_err());
/// deck.reset();
/// assert!(deck.draw(&mut rng).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct UniqueChoice<D> {
    inner: D,
    drawn: Vec<bool>,
    drawn_count: usize,
    total_weight: u64,
    drawn_weight: u64,
}

impl<D: FiniteDistribution> UniqueChoice<D> {
    /// Wraps `inner` with an empty drawn-record.
    pub fn new(inner: D) -> Self {
        let population = inner.population();
        let total_weight = (0..population)
            .map(|index| inner.index_weight(index))
            .fold(0_u64, u64::saturating_add);
        Self {
            inner,
            drawn: vec![false; population],
            drawn_count: 0,
            total_weight,
            drawn_weight: 0,
        }
    }

    /// The wrapped distribution.
    #[inline]
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Size of the population.
    #[inline]
    pub fn population(&self) -> usize {
        self.drawn.len()
    }

    /// Number of items returned since the last reset.
    #[inline]
    pub fn drawn(&self) -> usize {
        self.drawn_count
    }

    /// Number of items still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.drawn.len() - self.drawn_count
    }

    /// Whether every item has been returned since the last reset.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.drawn_count == self.drawn.len()
    }

    /// Clears the drawn-record so the whole population can be drawn again.
    pub fn reset(&mut self) {
        self.drawn.iter_mut().for_each(|d| *d = false);
        self.drawn_count = 0;
        self.drawn_weight = 0;
    }

    /// Draws an index not returned since the last reset.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::PoolExhausted` if every index has been drawn.
    pub fn draw_index<E: RandomEngine>(&mut self, engine: &mut E) -> Result<usize, SampleError> {
        let population = self.drawn.len();
        if self.drawn_count == population {
            return Err(SampleError::PoolExhausted { population });
        }

        let remaining_weight = self.total_weight.saturating_sub(self.drawn_weight);
        let index = if remaining_weight <= self.drawn_weight {
            self.pick_remaining(engine, remaining_weight)
        } else {
            // Each attempt is accepted with probability above one half.
            loop {
                let candidate = self.inner.draw_index(engine);
                if !self.drawn[candidate] {
                    break candidate;
                }
            }
        };

        self.drawn[index] = true;
        self.drawn_count += 1;
        self.drawn_weight = self
            .drawn_weight
            .saturating_add(self.inner.index_weight(index));
        Ok(index)
    }

    /// Draws an item by reference.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::PoolExhausted` if every item has been drawn.
    pub fn draw_ref<E: RandomEngine>(&mut self, engine: &mut E) -> Result<&D::Item, SampleError> {
        let index = self.draw_index(engine)?;
        Ok(self.inner.item(index))
    }

    /// Draws until the pool is exhausted, returning the remaining items in
    /// draw order.
    pub fn drain<E: RandomEngine>(&mut self, engine: &mut E) -> Vec<D::Item>
    where
        D::Item: Clone,
    {
        let mut items = Vec::with_capacity(self.remaining());
        while let Ok(index) = self.draw_index(engine) {
            items.push(self.inner.item(index).clone());
        }
        items
    }

    fn undrawn(&self) -> impl Iterator<Item = usize> + '_ {
        self.drawn
            .iter()
            .enumerate()
            .filter(|(_, &drawn)| !drawn)
            .map(|(index, _)| index)
    }

    fn nth_remaining(&self, n: usize) -> usize {
        self.undrawn()
            .nth(n)
            .unwrap_or_else(|| unreachable!("n < remaining() by construction"))
    }

    /// Picks an undrawn index with probability proportional to its weight,
    /// in one bounded draw. Falls back to a uniform pick when only
    /// zero-weight items remain.
    fn pick_remaining<E: RandomEngine>(&self, engine: &mut E, remaining_weight: u64) -> usize {
        if self.inner.is_uniform() || remaining_weight == 0 {
            let n = sample_span(engine, (self.remaining() - 1) as u64);
            return self.nth_remaining(n as usize);
        }

        let mut target = sample_span(engine, remaining_weight - 1);
        for index in self.undrawn() {
            let weight = self.inner.index_weight(index);
            if target < weight {
                return index;
            }
            target -= weight;
        }
        unreachable!("target < remaining weight by construction")
    }
}

impl<D> UniqueChoice<D>
where
    D: FiniteDistribution,
    D::Item: Clone,
{
    /// Draws an item not returned since the last reset.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::PoolExhausted` if every item has been drawn.
    pub fn draw<E: RandomEngine>(&mut self, engine: &mut E) -> Result<D::Item, SampleError> {
        self.draw_ref(engine).cloned()
    }
}
