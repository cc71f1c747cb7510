//! Weighted choice over an incrementally built table.
//!
//! Entries are kept as `(cumulative_weight, value)` pairs in insertion
//! order. Sampling draws `u` uniformly from `[1, total_weight]` and
//! returns the first entry whose cumulative weight is at least `u`, found
//! by binary search. Entry `i` covers exactly `weight_i` of the
//! `total_weight` possible draws, so its probability is
//! `weight_i / total_weight` exactly.

use super::uniform::sample_span;
use super::{Distribution, FiniteDistribution};
use crate::engine::RandomEngine;
use crate::error::{DistributionError, SampleError};

#[derive(Clone, Debug, PartialEq, Eq)]
struct WeightedEntry<T> {
    cumulative: u64,
    value: T,
}

/// Choice with probability proportional to integer weights.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{Distribution, WeightedChoice};
/// use variate_core::engine::Xoshiro256StarStar;
///
/// let mut table = WeightedChoice::from_groups([(1, vec!['a']), (2, vec!['b', 'c'])]).unwrap();
/// assert_eq!(table.total_weight(), 5);
///
/// table.add(5, ['d']).unwrap();
/// assert_eq!(table.total_weight(), 10);
///
/// let mut rng = Xoshiro256StarStar::default();
/// let v = table.sample(&mut rng);
/// assert!(['a', 'b', 'c', 'd'].contains(&v));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedChoice<T> {
    entries: Vec<WeightedEntry<T>>,
    total_weight: u64,
}

impl<T> Default for WeightedChoice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedChoice<T> {
    /// Creates an empty table.
    ///
    /// An empty table cannot be sampled until at least one entry is added.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total_weight: 0,
        }
    }

    /// Builds a table from `(weight, values)` groups, in order.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`WeightedChoice::add`].
    pub fn from_groups<G, V>(groups: G) -> Result<Self, DistributionError>
    where
        G: IntoIterator<Item = (u64, V)>,
        V: IntoIterator<Item = T>,
    {
        let mut table = Self::new();
        for (weight, values) in groups {
            table.add(weight, values)?;
        }
        Ok(table)
    }

    /// Adds each value with the given weight.
    ///
    /// Every value contributes `weight` independently, so adding three
    /// values with weight 2 raises the total by 6. Returns `self` for
    /// chaining.
    ///
    /// # Errors
    ///
    /// - `DistributionError::ZeroWeight` if `weight == 0`
    /// - `DistributionError::WeightOverflow` if the total would exceed
    ///   `u64::MAX`; entries added before the overflowing one are kept
    pub fn add<I: IntoIterator<Item = T>>(
        &mut self,
        weight: u64,
        values: I,
    ) -> Result<&mut Self, DistributionError> {
        if weight == 0 {
            return Err(DistributionError::ZeroWeight);
        }
        for value in values {
            let cumulative = self.total_weight.checked_add(weight).ok_or(
                DistributionError::WeightOverflow {
                    total: self.total_weight,
                    weight,
                },
            )?;
            self.entries.push(WeightedEntry { cumulative, value });
            self.total_weight = cumulative;
        }
        Ok(self)
    }

    /// Sum of all weights added so far.
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn weight(&self, index: usize) -> u64 {
        let previous = match index {
            0 => 0,
            _ => self.entries[index - 1].cumulative,
        };
        self.entries[index].cumulative - previous
    }

    /// Iterates over `(weight, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> + '_ {
        (0..self.entries.len()).map(move |i| (self.weight(i), &self.entries[i].value))
    }

    /// Draws a value by reference.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::EmptyWeightTable` if no entry has been added.
    pub fn try_sample_ref<E: RandomEngine>(&self, engine: &mut E) -> Result<&T, SampleError> {
        let index = self.try_draw_index(engine)?;
        Ok(&self.entries[index].value)
    }

    fn try_draw_index<E: RandomEngine>(&self, engine: &mut E) -> Result<usize, SampleError> {
        if self.total_weight == 0 {
            return Err(SampleError::EmptyWeightTable);
        }
        let target = 1 + sample_span(engine, self.total_weight - 1);
        Ok(self.entries.partition_point(|e| e.cumulative < target))
    }
}

impl<T: Clone> WeightedChoice<T> {
    /// Draws a value.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::EmptyWeightTable` if no entry has been added.
    pub fn try_sample<E: RandomEngine>(&self, engine: &mut E) -> Result<T, SampleError> {
        self.try_sample_ref(engine).cloned()
    }
}

impl<T: Clone> Distribution for WeightedChoice<T> {
    type Output = T;

    /// Draws a value.
    ///
    /// # Panics
    ///
    /// Panics if the table is empty (`total_weight() == 0`). Use
    /// [`WeightedChoice::try_sample`] to handle that case.
    fn sample<E: RandomEngine>(&self, engine: &mut E) -> T {
        match self.try_sample(engine) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> FiniteDistribution for WeightedChoice<T> {
    type Item = T;

    #[inline]
    fn population(&self) -> usize {
        self.entries.len()
    }

    /// # Panics
    ///
    /// Panics if the table is empty.
    fn draw_index<E: RandomEngine>(&self, engine: &mut E) -> usize {
        match self.try_draw_index(engine) {
            Ok(index) => index,
            Err(err) => panic!("{}", err),
        }
    }

    #[inline]
    fn item(&self, index: usize) -> &T {
        &self.entries[index].value
    }

    #[inline]
    fn index_weight(&self, index: usize) -> u64 {
        self.weight(index)
    }
}
