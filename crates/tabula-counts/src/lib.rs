//! Frequency and weight tabulation
//!
//! This crate counts occurrences of discrete values, optionally weighted, and
//! turns the counts into proportions. Two strategies are offered:
//!
//! - **Dense** ([`DenseCounter`], [`JointDenseCounter`]): integer values in a
//!   known [`LevelRange`] are counted into a pre-sized table with one indexed
//!   add per observation. Values outside the range are dropped silently.
//! - **Sparse** ([`SparseCounter`]): arbitrary hashable values are counted
//!   into a `HashMap` that grows as new values are seen.
//!
//! Every strategy has three families of entry points: `accumulate*` adds into
//! an existing container, `tabulate*` allocates and counts, `proportions*`
//! returns normalized results. The free functions at the crate root accept the
//! domain as an explicit range, as `[1, k]`, or inferred from the data span.
//!
//! # Examples
//!
//! ## Dense counts
//!
//! ```rust
//! use tabula_counts::{counts, counts_weighted, LevelRange, Levels};
//!
//! let data = [0, 1, 2, 3, 100];
//! let levels = LevelRange::new(1, 3).unwrap();
//! assert_eq!(counts(&data, levels).unwrap(), vec![1, 1, 1]);
//!
//! // Domain inferred from the data
//! assert_eq!(counts(&[5, 5, 7], Levels::Span).unwrap(), vec![2, 0, 1]);
//!
//! // Weighted, with levels [1, 2]
//! let w = counts_weighted(&[1, 2, 2], Levels::OneTo(2), &[0.5, 1.0, 1.5]).unwrap();
//! assert_eq!(w, vec![0.5, 2.5]);
//! ```
//!
//! ## Joint counts
//!
//! ```rust
//! use tabula_counts::{counts2, JointLevels};
//!
//! let table = counts2(&[1, 1, 2], &[1, 2, 2], JointLevels::SquareOneTo(2)).unwrap();
//! assert_eq!(table[(0, 1)], 1);
//! assert_eq!(table[(1, 0)], 0);
//! ```
//!
//! ## Sparse counts and proportions
//!
//! ```rust
//! use tabula_counts::{count_map, proportion_map, Proportions};
//!
//! let words = ["to", "be", "or", "not", "to", "be"];
//! let counts = count_map(words);
//! assert_eq!(counts["to"], 2);
//!
//! let p = counts.proportions();
//! assert!((p["not"] - 1.0 / 6.0).abs() < 1e-12);
//! assert_eq!(proportion_map(&words)["be"], p["be"]);
//! ```
//!
//! # Concurrency
//!
//! Accumulation takes the table by `&mut`, so one table cannot be filled from
//! several threads at once without an external lock. To count in parallel,
//! give each worker its own table and combine them with [`MergeCounts`]; the
//! `parallel` feature provides [`DenseCounter::par_tabulate`] doing exactly
//! that.

pub mod dense;
pub mod joint;
pub mod levels;
pub mod ops;
pub mod sparse;
pub mod traits;
pub mod types;

use std::collections::HashMap;
use std::hash::Hash;

// Re-export main types and traits
pub use dense::DenseCounter;
pub use joint::JointDenseCounter;
pub use levels::{JointLevels, LevelRange, Levels};
pub use ops::MergeCounts;
pub use sparse::{CountAlgorithm, SparseCounter};
pub use traits::{Proportions, Total};
pub use types::Table2;

pub use tabula_core::{Error, Level, Numeric, Result};

// Convenience functions

/// Count the values of `data` over a level domain
pub fn counts<L: Level>(data: &[L], levels: impl Into<Levels<L>>) -> Result<Vec<usize>> {
    let levels = levels.into().resolve(data)?;
    Ok(DenseCounter::new(levels).tabulate(data))
}

/// Sum the weights of the values of `data` over a level domain
pub fn counts_weighted<L: Level, W: Numeric>(
    data: &[L],
    levels: impl Into<Levels<L>>,
    weights: &[W],
) -> Result<Vec<W>> {
    let levels = levels.into().resolve(data)?;
    DenseCounter::new(levels).tabulate_weighted(data, weights)
}

/// Count the pairs `(x[i], y[i])` over a joint level domain
pub fn counts2<L: Level>(
    x: &[L],
    y: &[L],
    levels: impl Into<JointLevels<L>>,
) -> Result<Table2<usize>> {
    let (rx, ry) = levels.into().resolve(x, y)?;
    JointDenseCounter::new(rx, ry).tabulate(x, y)
}

/// Sum the weights of the pairs `(x[i], y[i])` over a joint level domain
pub fn counts2_weighted<L: Level, W: Numeric>(
    x: &[L],
    y: &[L],
    levels: impl Into<JointLevels<L>>,
    weights: &[W],
) -> Result<Table2<W>> {
    let (rx, ry) = levels.into().resolve(x, y)?;
    JointDenseCounter::new(rx, ry).tabulate_weighted(x, y, weights)
}

/// Dense counts divided by `data.len()`
pub fn proportions<L: Level>(data: &[L], levels: impl Into<Levels<L>>) -> Result<Vec<f64>> {
    let levels = levels.into().resolve(data)?;
    Ok(DenseCounter::new(levels).proportions(data))
}

/// Weighted dense counts divided by the sum of all weights
pub fn proportions_weighted<L: Level, W: Numeric>(
    data: &[L],
    levels: impl Into<Levels<L>>,
    weights: &[W],
) -> Result<Vec<f64>> {
    let levels = levels.into().resolve(data)?;
    DenseCounter::new(levels).proportions_weighted(data, weights)
}

/// Joint counts divided by the number of pairs
pub fn proportions2<L: Level>(
    x: &[L],
    y: &[L],
    levels: impl Into<JointLevels<L>>,
) -> Result<Table2<f64>> {
    let (rx, ry) = levels.into().resolve(x, y)?;
    JointDenseCounter::new(rx, ry).proportions(x, y)
}

/// Weighted joint counts divided by the sum of all weights
pub fn proportions2_weighted<L: Level, W: Numeric>(
    x: &[L],
    y: &[L],
    levels: impl Into<JointLevels<L>>,
    weights: &[W],
) -> Result<Table2<f64>> {
    let (rx, ry) = levels.into().resolve(x, y)?;
    JointDenseCounter::new(rx, ry).proportions_weighted(x, y, weights)
}

/// Count every distinct value
pub fn count_map<K, I>(data: I) -> HashMap<K, usize>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    SparseCounter::new().tabulate(data)
}

/// Sum the weights of every distinct value
pub fn count_map_weighted<K, W>(data: &[K], weights: &[W]) -> Result<HashMap<K, W>>
where
    K: Hash + Eq + Clone,
    W: Numeric,
{
    SparseCounter::new().tabulate_weighted(data, weights)
}

/// Count every distinct value, divided by `data.len()`
pub fn proportion_map<K>(data: &[K]) -> HashMap<K, f64>
where
    K: Hash + Eq + Clone,
{
    SparseCounter::new().proportions(data)
}

/// Weighted counts of every distinct value, divided by the sum of all weights
pub fn proportion_map_weighted<K, W>(data: &[K], weights: &[W]) -> Result<HashMap<K, f64>>
where
    K: Hash + Eq + Clone,
    W: Numeric,
{
    SparseCounter::new().proportions_weighted(data, weights)
}
