//! Sparse counting of arbitrary hashable values into a growing map
//!
//! Unlike dense counting there is no domain to declare: a key appears in the
//! map the first time its value is observed. Memory grows with the number of
//! distinct values rather than with the size of a level range.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};
use tabula_core::{check_len, Numeric, Result};
use tracing::debug;

use crate::traits::{scale_map, weight_sum};

/// Input length from which [`CountAlgorithm::Auto`] switches to sorting
pub const DEFAULT_SORT_THRESHOLD: usize = 1 << 16;

/// Strategy for counting values that are both hashable and ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountAlgorithm {
    /// Sort for long inputs, hash otherwise
    #[default]
    Auto,
    /// One map update per observation
    Hash,
    /// Sort a copy of the input and add each run of equal values at once
    Sort,
}

/// Sparse counter configuration
///
/// The algorithm only affects how [`SparseCounter::accumulate_ordered`]
/// works, never its result. Unordered keys and weighted counts always use
/// hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparseCounter {
    /// Counting strategy for ordered keys
    pub algorithm: CountAlgorithm,
    /// Input length at which `Auto` prefers sorting
    pub sort_threshold: usize,
}

impl Default for SparseCounter {
    fn default() -> Self {
        Self {
            algorithm: CountAlgorithm::Auto,
            sort_threshold: DEFAULT_SORT_THRESHOLD,
        }
    }
}

impl SparseCounter {
    /// Create a counter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the counting strategy
    pub fn with_algorithm(mut self, algorithm: CountAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the length at which `Auto` switches to sorting
    pub fn with_sort_threshold(mut self, sort_threshold: usize) -> Self {
        self.sort_threshold = sort_threshold;
        self
    }

    /// The concrete strategy used for an input of length `n`
    pub fn resolve(&self, n: usize) -> CountAlgorithm {
        match self.algorithm {
            CountAlgorithm::Auto if n >= self.sort_threshold => CountAlgorithm::Sort,
            CountAlgorithm::Auto => CountAlgorithm::Hash,
            other => other,
        }
    }

    /// Add one count per observed value into `map`
    pub fn accumulate<'m, K, C, S, I>(
        &self,
        map: &'m mut HashMap<K, C, S>,
        data: I,
    ) -> &'m mut HashMap<K, C, S>
    where
        K: Hash + Eq,
        C: Numeric,
        S: BuildHasher,
        I: IntoIterator<Item = K>,
    {
        accumulate(map, data)
    }

    /// Add `weights[i]` to the entry of `data[i]`
    pub fn accumulate_weighted<'m, K, W, S>(
        &self,
        map: &'m mut HashMap<K, W, S>,
        data: &[K],
        weights: &[W],
    ) -> Result<&'m mut HashMap<K, W, S>>
    where
        K: Hash + Eq + Clone,
        W: Numeric,
        S: BuildHasher,
    {
        accumulate_weighted(map, data, weights)
    }

    /// Add one count per observed value, using the configured strategy
    pub fn accumulate_ordered<'m, K, C, S>(
        &self,
        map: &'m mut HashMap<K, C, S>,
        data: &[K],
    ) -> &'m mut HashMap<K, C, S>
    where
        K: Hash + Ord + Clone,
        C: Numeric,
        S: BuildHasher,
    {
        let algorithm = self.resolve(data.len());
        debug!("Counting {} ordered values with {:?}", data.len(), algorithm);
        match algorithm {
            CountAlgorithm::Sort => add_sorted_runs(map, data),
            _ => {
                accumulate(map, data.iter().cloned());
            }
        }
        map
    }

    /// Count every distinct value
    pub fn tabulate<K, I>(&self, data: I) -> HashMap<K, usize>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = K>,
    {
        let mut map = HashMap::new();
        accumulate(&mut map, data);
        map
    }

    /// Sum the weights of every distinct value
    pub fn tabulate_weighted<K, W>(&self, data: &[K], weights: &[W]) -> Result<HashMap<K, W>>
    where
        K: Hash + Eq + Clone,
        W: Numeric,
    {
        let mut map = HashMap::new();
        accumulate_weighted(&mut map, data, weights)?;
        Ok(map)
    }

    /// Count every distinct value, using the configured strategy
    pub fn tabulate_ordered<K>(&self, data: &[K]) -> HashMap<K, usize>
    where
        K: Hash + Ord + Clone,
    {
        let mut map = HashMap::new();
        self.accumulate_ordered(&mut map, data);
        map
    }

    /// Counts divided by the number of observations
    pub fn proportions<K>(&self, data: &[K]) -> HashMap<K, f64>
    where
        K: Hash + Eq + Clone,
    {
        let counts = self.tabulate(data.iter().cloned());
        scale_map(&counts, data.len() as f64)
    }

    /// Weighted counts divided by the sum of all weights
    pub fn proportions_weighted<K, W>(&self, data: &[K], weights: &[W]) -> Result<HashMap<K, f64>>
    where
        K: Hash + Eq + Clone,
        W: Numeric,
    {
        let counts = self.tabulate_weighted(data, weights)?;
        Ok(scale_map(&counts, weight_sum(weights)))
    }
}

/// Add one count per observed value into `map`
///
/// Keys are created with the zero of `C` on first sight.
pub fn accumulate<K, C, S, I>(map: &mut HashMap<K, C, S>, data: I) -> &mut HashMap<K, C, S>
where
    K: Hash + Eq,
    C: Numeric,
    S: BuildHasher,
    I: IntoIterator<Item = K>,
{
    for value in data {
        *map.entry(value).or_insert_with(C::zero) += C::one();
    }
    map
}

/// Add `weights[i]` to the entry of `data[i]`
///
/// Lengths are checked before the map is touched. Unseen keys start at the
/// zero of the weight type.
pub fn accumulate_weighted<'m, K, W, S>(
    map: &'m mut HashMap<K, W, S>,
    data: &[K],
    weights: &[W],
) -> Result<&'m mut HashMap<K, W, S>>
where
    K: Hash + Eq + Clone,
    W: Numeric,
    S: BuildHasher,
{
    check_len(data.len(), weights.len(), "weights")?;
    for (value, &w) in data.iter().zip(weights) {
        *map.entry(value.clone()).or_insert_with(W::zero) += w;
    }
    Ok(map)
}

fn add_sorted_runs<K, C, S>(map: &mut HashMap<K, C, S>, data: &[K])
where
    K: Hash + Ord + Clone,
    C: Numeric,
    S: BuildHasher,
{
    let mut sorted = data.to_vec();
    sorted.sort_unstable();

    let mut values = sorted.into_iter();
    let Some(mut current) = values.next() else {
        return;
    };
    let mut run = C::one();
    for value in values {
        if value == current {
            run += C::one();
        } else {
            *map.entry(std::mem::replace(&mut current, value)).or_insert_with(C::zero) += run;
            run = C::one();
        }
    }
    *map.entry(current).or_insert_with(C::zero) += run;
}
