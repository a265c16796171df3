//! Frequency and weight tabulation
//!
//! Umbrella crate re-exporting the tabula workspace:
//!
//! - [`tabula_core`]: the shared [`Error`] type and the [`Level`] / [`Numeric`] traits
//! - [`tabula_counts`]: dense, joint and sparse counters, proportions and merging
//!
//! ```rust
//! use tabula::{counts, count_map, LevelRange};
//!
//! let levels = LevelRange::new(1, 3).unwrap();
//! assert_eq!(counts(&[0, 1, 2, 3, 100], levels).unwrap(), vec![1, 1, 1]);
//! assert_eq!(count_map(["a", "b", "a"])["a"], 2);
//! ```

pub use tabula_core;
pub use tabula_counts;

pub use tabula_core::{Error, Level, Numeric, Result};
pub use tabula_counts::{
    count_map, count_map_weighted, counts, counts2, counts2_weighted, counts_weighted,
    proportion_map, proportion_map_weighted, proportions, proportions2, proportions2_weighted,
    proportions_weighted, CountAlgorithm, DenseCounter, JointDenseCounter, JointLevels,
    LevelRange, Levels, MergeCounts, Proportions, SparseCounter, Table2, Total,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tabula_core::prelude::*;
    pub use tabula_counts::{
        DenseCounter, JointDenseCounter, LevelRange, Levels, MergeCounts, Proportions,
        SparseCounter, Table2,
    };
}
