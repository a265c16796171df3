//! Operations combining partial count results
//!
//! Counting a long or windowed stream in batches and merging the partial
//! results gives the same answer as counting everything at once.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::types::Table2;
use tabula_core::{Error, Numeric, Result};

/// Add another partial count result into this one
pub trait MergeCounts<Rhs: ?Sized = Self> {
    /// Add `other` entry-wise into `self`
    ///
    /// Dense results must have identical shapes; nothing is modified when
    /// they do not.
    fn merge(&mut self, other: &Rhs) -> Result<()>;
}

impl<C: Numeric> MergeCounts for [C] {
    fn merge(&mut self, other: &[C]) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::size_mismatch(self.len(), other.len(), "merged count table"));
        }
        add_into(self, other);
        Ok(())
    }
}

impl<C: Numeric> MergeCounts for Table2<C> {
    fn merge(&mut self, other: &Table2<C>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape(), "merged joint table"));
        }
        add_into(self.as_mut_slice(), other.as_slice());
        Ok(())
    }
}

impl<K, C, S> MergeCounts for HashMap<K, C, S>
where
    K: Hash + Eq + Clone,
    C: Numeric,
    S: BuildHasher,
{
    fn merge(&mut self, other: &HashMap<K, C, S>) -> Result<()> {
        for (key, &count) in other {
            *self.entry(key.clone()).or_insert_with(C::zero) += count;
        }
        Ok(())
    }
}

/// Slot-wise addition of equally sized tables
pub(crate) fn add_into<C: Numeric>(dst: &mut [C], src: &[C]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}
