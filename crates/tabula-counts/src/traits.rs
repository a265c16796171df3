//! Core traits shared by every count shape

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::types::Table2;
use tabula_core::Numeric;

/// Sum of all entries of a count result
pub trait Total {
    /// Total expressed in f64
    fn total_f64(&self) -> f64;
}

/// Rescale a count result into proportions
///
/// Every entry is multiplied by `1 / total`, where `total` is the sum of all
/// entries. A zero total is not special-cased: entries become NaN (or
/// infinite, for nonzero entries).
pub trait Proportions {
    /// Same shape as the source, with f64 entries
    type Output;

    /// Compute proportions of the total
    fn proportions(&self) -> Self::Output;
}

impl<C: Numeric> Total for [C] {
    fn total_f64(&self) -> f64 {
        self.iter().map(Numeric::as_f64).sum()
    }
}

impl<C: Numeric> Total for Table2<C> {
    fn total_f64(&self) -> f64 {
        self.as_slice().total_f64()
    }
}

impl<K, C: Numeric, S> Total for HashMap<K, C, S> {
    fn total_f64(&self) -> f64 {
        self.values().map(Numeric::as_f64).sum()
    }
}

impl<C: Numeric> Proportions for [C] {
    type Output = Vec<f64>;

    fn proportions(&self) -> Vec<f64> {
        scale(self, self.total_f64())
    }
}

impl<C: Numeric> Proportions for Table2<C> {
    type Output = Table2<f64>;

    fn proportions(&self) -> Table2<f64> {
        let inv = 1.0 / self.total_f64();
        self.map(|c| c.as_f64() * inv)
    }
}

impl<K, C, S> Proportions for HashMap<K, C, S>
where
    K: Hash + Eq + Clone,
    C: Numeric,
    S: BuildHasher,
{
    type Output = HashMap<K, f64>;

    fn proportions(&self) -> HashMap<K, f64> {
        scale_map(self, self.total_f64())
    }
}

/// Multiply every count by `1 / total`
pub(crate) fn scale<C: Numeric>(counts: &[C], total: f64) -> Vec<f64> {
    let inv = 1.0 / total;
    counts.iter().map(|c| c.as_f64() * inv).collect()
}

/// Multiply every mapped count by `1 / total`
pub(crate) fn scale_map<K, C, S>(counts: &HashMap<K, C, S>, total: f64) -> HashMap<K, f64>
where
    K: Hash + Eq + Clone,
    C: Numeric,
{
    let inv = 1.0 / total;
    counts
        .iter()
        .map(|(k, c)| (k.clone(), c.as_f64() * inv))
        .collect()
}

/// Sum of a weight sequence in f64
pub(crate) fn weight_sum<W: Numeric>(weights: &[W]) -> f64 {
    weights.total_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_slice_proportions() {
        let counts = vec![1usize, 2, 1];
        let p = counts.proportions();
        assert_eq!(p, vec![0.25, 0.5, 0.25]);
        assert_eq!(counts.total_f64(), 4.0);
    }

    #[test]
    fn test_table_proportions() {
        let t = Table2::from_vec(2, 2, vec![1.0, 1.0, 0.0, 2.0]).unwrap();
        let p = t.proportions();
        assert_eq!(p.shape(), (2, 2));
        assert_relative_eq!(p[(1, 1)], 0.5);
        assert_relative_eq!(p.as_slice().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_map_proportions() {
        let mut m = HashMap::new();
        m.insert("a", 3u32);
        m.insert("b", 1u32);
        let p = m.proportions();
        assert_relative_eq!(p["a"], 0.75);
        assert_relative_eq!(p["b"], 0.25);
    }

    #[test]
    fn test_zero_total_is_not_trapped() {
        let p = vec![0usize, 0].proportions();
        assert!(p.iter().all(|v| v.is_nan()));

        let empty: Vec<u8> = Vec::new();
        assert!(empty.proportions().is_empty());
    }
}
