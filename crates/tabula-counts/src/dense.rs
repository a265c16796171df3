//! Dense counting of integer levels into range-indexed tables
//!
//! Each observation costs one range check and one indexed add. Values outside
//! the level range are skipped without any signal, which lets callers count
//! only a sub-range of a larger dataset.

use crate::levels::LevelRange;
use crate::traits::{scale, weight_sum};
use tabula_core::{check_len, Error, Level, Numeric, Result};
use tracing::instrument;

/// Add one count per in-range value of `data` into `table`
///
/// `table[v - levels.low()]` is incremented for every `v` in `levels`; other
/// values are dropped. The table is validated before it is touched and must
/// have exactly `levels.len()` slots. The engine never resets the table, so
/// successive calls accumulate.
pub fn accumulate<'t, L: Level, C: Numeric>(
    table: &'t mut [C],
    data: &[L],
    levels: &LevelRange<L>,
) -> Result<&'t mut [C]> {
    check_table(table, levels)?;
    add_units(table, data, levels);
    Ok(table)
}

/// Add `weights[i]` for every in-range `data[i]` into `table`
///
/// Weights are expected to be non-negative; this is not checked. Both the
/// table length and the weight length are validated before any slot changes.
pub fn accumulate_weighted<'t, L: Level, W: Numeric>(
    table: &'t mut [W],
    data: &[L],
    levels: &LevelRange<L>,
    weights: &[W],
) -> Result<&'t mut [W]> {
    check_table(table, levels)?;
    check_len(data.len(), weights.len(), "weights")?;
    add_weights(table, data, levels, weights);
    Ok(table)
}

fn check_table<L: Level, C>(table: &[C], levels: &LevelRange<L>) -> Result<()> {
    if table.len() != levels.len() {
        return Err(Error::size_mismatch(levels.len(), table.len(), "count table"));
    }
    Ok(())
}

// Callers guarantee table.len() == levels.len()
fn add_units<L: Level, C: Numeric>(table: &mut [C], data: &[L], levels: &LevelRange<L>) {
    let (low, high) = (levels.low(), levels.high());
    let base = low.widen();
    for &v in data {
        if low <= v && v <= high {
            table[(v.widen() - base) as usize] += C::one();
        }
    }
}

fn add_weights<L: Level, W: Numeric>(
    table: &mut [W],
    data: &[L],
    levels: &LevelRange<L>,
    weights: &[W],
) {
    let (low, high) = (levels.low(), levels.high());
    let base = low.widen();
    for (&v, &w) in data.iter().zip(weights) {
        if low <= v && v <= high {
            table[(v.widen() - base) as usize] += w;
        }
    }
}

/// Dense counter over a fixed level range
///
/// # Example
///
/// ```rust
/// use tabula_counts::{DenseCounter, LevelRange};
///
/// let counter = DenseCounter::new(LevelRange::new(1, 3).unwrap());
/// assert_eq!(counter.tabulate(&[0, 1, 2, 3, 100]), vec![1, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseCounter<L> {
    levels: LevelRange<L>,
}

impl<L: Level> DenseCounter<L> {
    /// Create a counter over `levels`
    pub fn new(levels: LevelRange<L>) -> Self {
        Self { levels }
    }

    /// Create a counter over `[1, k]`
    pub fn one_to(k: L) -> Result<Self> {
        Ok(Self::new(LevelRange::one_to(k)?))
    }

    /// Create a counter over the min–max span of `data`
    #[instrument(level = "debug", skip_all, fields(n = data.len()))]
    pub fn span(data: &[L]) -> Result<Self> {
        Ok(Self::new(LevelRange::span(data)?))
    }

    /// The level range of this counter
    pub fn levels(&self) -> &LevelRange<L> {
        &self.levels
    }

    /// Allocate a zeroed table of the right length
    pub fn zeros<C: Numeric>(&self) -> Vec<C> {
        vec![C::zero(); self.levels.len()]
    }

    /// Accumulate unit counts into a caller-supplied table
    pub fn accumulate<'t, C: Numeric>(
        &self,
        table: &'t mut [C],
        data: &[L],
    ) -> Result<&'t mut [C]> {
        accumulate(table, data, &self.levels)
    }

    /// Accumulate weights into a caller-supplied table
    pub fn accumulate_weighted<'t, W: Numeric>(
        &self,
        table: &'t mut [W],
        data: &[L],
        weights: &[W],
    ) -> Result<&'t mut [W]> {
        accumulate_weighted(table, data, &self.levels, weights)
    }

    /// Count the in-range values of `data`
    pub fn tabulate(&self, data: &[L]) -> Vec<usize> {
        let mut table = self.zeros();
        add_units(&mut table, data, &self.levels);
        table
    }

    /// Sum the weights of the in-range values of `data`
    pub fn tabulate_weighted<W: Numeric>(&self, data: &[L], weights: &[W]) -> Result<Vec<W>> {
        let mut table = self.zeros();
        self.accumulate_weighted(&mut table, data, weights)?;
        Ok(table)
    }

    /// Counts divided by the number of observations
    ///
    /// The divisor is `data.len()`, including values that fell outside the
    /// range, so the result sums to less than one when values were dropped.
    pub fn proportions(&self, data: &[L]) -> Vec<f64> {
        scale(&self.tabulate(data), data.len() as f64)
    }

    /// Weighted counts divided by the sum of all weights
    pub fn proportions_weighted<W: Numeric>(&self, data: &[L], weights: &[W]) -> Result<Vec<f64>> {
        let table = self.tabulate_weighted(data, weights)?;
        Ok(scale(&table, weight_sum(weights)))
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use crate::ops::add_into;
    use rayon::prelude::*;
    use tracing::debug;

    /// Observations handled by one worker before its partial table is merged
    const CHUNK_SIZE: usize = 1 << 16;

    impl<L: Level> DenseCounter<L> {
        /// Count in parallel, one partial table per worker
        ///
        /// Equal to [`DenseCounter::tabulate`]; each worker owns its table, so
        /// no table is ever shared between threads.
        pub fn par_tabulate(&self, data: &[L]) -> Vec<usize> {
            let n = self.levels.len();
            debug!(
                "Parallel tabulation of {} values in chunks of {} into {} slots",
                data.len(),
                CHUNK_SIZE,
                n
            );
            data.par_chunks(CHUNK_SIZE)
                .fold(
                    || vec![0usize; n],
                    |mut table, chunk| {
                        add_units(&mut table, chunk, &self.levels);
                        table
                    },
                )
                .reduce(
                    || vec![0usize; n],
                    |mut a, b| {
                        add_into(&mut a, &b);
                        a
                    },
                )
        }

        /// Weighted counterpart of [`DenseCounter::par_tabulate`]
        pub fn par_tabulate_weighted<W: Numeric>(
            &self,
            data: &[L],
            weights: &[W],
        ) -> Result<Vec<W>> {
            check_len(data.len(), weights.len(), "weights")?;
            let n = self.levels.len();
            Ok(data
                .par_chunks(CHUNK_SIZE)
                .zip(weights.par_chunks(CHUNK_SIZE))
                .fold(
                    || vec![W::zero(); n],
                    |mut table, (d, w)| {
                        add_weights(&mut table, d, &self.levels, w);
                        table
                    },
                )
                .reduce(
                    || vec![W::zero(); n],
                    |mut a, b| {
                        add_into(&mut a, &b);
                        a
                    },
                ))
        }
    }
}
