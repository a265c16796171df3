//! Joint dense counting of paired integer sequences
//!
//! A pair `(x[i], y[i])` is counted only when both components lie in their
//! axis range; a pair with either component outside is skipped entirely.

use crate::levels::LevelRange;
use crate::traits::weight_sum;
use crate::types::Table2;
use tabula_core::{check_len, Error, Level, Numeric, Result};
use tracing::instrument;

/// Add one count per in-range pair into `table`
///
/// The table must have shape `(levels.0.len(), levels.1.len())` and `x`, `y`
/// must have equal lengths; both are checked before the table is touched.
pub fn accumulate<'t, L: Level, C: Numeric>(
    table: &'t mut Table2<C>,
    x: &[L],
    y: &[L],
    levels: (&LevelRange<L>, &LevelRange<L>),
) -> Result<&'t mut Table2<C>> {
    check_table(table, levels)?;
    check_len(x.len(), y.len(), "paired y sequence")?;
    add_pairs(table, x, y, levels, |_| C::one());
    Ok(table)
}

/// Add `weights[i]` for every in-range pair into `table`
pub fn accumulate_weighted<'t, L: Level, W: Numeric>(
    table: &'t mut Table2<W>,
    x: &[L],
    y: &[L],
    levels: (&LevelRange<L>, &LevelRange<L>),
    weights: &[W],
) -> Result<&'t mut Table2<W>> {
    check_table(table, levels)?;
    check_len(x.len(), y.len(), "paired y sequence")?;
    check_len(x.len(), weights.len(), "weights")?;
    add_pairs(table, x, y, levels, |i| weights[i]);
    Ok(table)
}

fn check_table<L: Level, C>(
    table: &Table2<C>,
    (rx, ry): (&LevelRange<L>, &LevelRange<L>),
) -> Result<()> {
    let expected = (rx.len(), ry.len());
    if table.shape() != expected {
        return Err(Error::shape_mismatch(expected, table.shape(), "joint count table"));
    }
    Ok(())
}

// Callers guarantee the table shape and x.len() == y.len()
fn add_pairs<L: Level, C: Numeric>(
    table: &mut Table2<C>,
    x: &[L],
    y: &[L],
    (rx, ry): (&LevelRange<L>, &LevelRange<L>),
    increment: impl Fn(usize) -> C,
) {
    let ncols = table.ncols();
    let cells = table.as_mut_slice();
    for (i, (&a, &b)) in x.iter().zip(y).enumerate() {
        if let (Some(row), Some(col)) = (rx.offset(a), ry.offset(b)) {
            cells[row * ncols + col] += increment(i);
        }
    }
}

/// Joint dense counter over a pair of level ranges
///
/// # Example
///
/// ```rust
/// use tabula_counts::{JointDenseCounter, LevelRange};
///
/// let counter = JointDenseCounter::square(LevelRange::new(1, 2).unwrap());
/// let table = counter.tabulate(&[1, 1, 2], &[1, 2, 2]).unwrap();
/// assert_eq!(table.as_slice(), &[1, 1, 0, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointDenseCounter<L> {
    x_levels: LevelRange<L>,
    y_levels: LevelRange<L>,
}

impl<L: Level> JointDenseCounter<L> {
    /// Create a counter with one range per axis
    pub fn new(x_levels: LevelRange<L>, y_levels: LevelRange<L>) -> Self {
        Self { x_levels, y_levels }
    }

    /// Create a counter using the same range on both axes
    pub fn square(levels: LevelRange<L>) -> Self {
        Self::new(levels, levels)
    }

    /// Create a counter over `[1, kx] × [1, ky]`
    pub fn one_to(kx: L, ky: L) -> Result<Self> {
        Ok(Self::new(LevelRange::one_to(kx)?, LevelRange::one_to(ky)?))
    }

    /// Create a counter over `[1, k] × [1, k]`
    pub fn square_one_to(k: L) -> Result<Self> {
        Ok(Self::square(LevelRange::one_to(k)?))
    }

    /// Create a counter whose axes span `x` and `y` independently
    #[instrument(level = "debug", skip_all, fields(nx = x.len(), ny = y.len()))]
    pub fn span(x: &[L], y: &[L]) -> Result<Self> {
        Ok(Self::new(LevelRange::span(x)?, LevelRange::span(y)?))
    }

    /// The x-axis level range
    pub fn x_levels(&self) -> &LevelRange<L> {
        &self.x_levels
    }

    /// The y-axis level range
    pub fn y_levels(&self) -> &LevelRange<L> {
        &self.y_levels
    }

    /// Shape of the tables this counter fills
    pub fn shape(&self) -> (usize, usize) {
        (self.x_levels.len(), self.y_levels.len())
    }

    /// Allocate a zeroed table of the right shape
    ///
    /// Fails when the number of cells overflows `usize`, even though each
    /// axis on its own is addressable.
    pub fn zeros<C: Numeric>(&self) -> Result<Table2<C>> {
        let (nrows, ncols) = self.shape();
        Table2::zeros(nrows, ncols)
    }

    fn ranges(&self) -> (&LevelRange<L>, &LevelRange<L>) {
        (&self.x_levels, &self.y_levels)
    }

    /// Accumulate unit counts into a caller-supplied table
    pub fn accumulate<'t, C: Numeric>(
        &self,
        table: &'t mut Table2<C>,
        x: &[L],
        y: &[L],
    ) -> Result<&'t mut Table2<C>> {
        accumulate(table, x, y, self.ranges())
    }

    /// Accumulate weights into a caller-supplied table
    pub fn accumulate_weighted<'t, W: Numeric>(
        &self,
        table: &'t mut Table2<W>,
        x: &[L],
        y: &[L],
        weights: &[W],
    ) -> Result<&'t mut Table2<W>> {
        accumulate_weighted(table, x, y, self.ranges(), weights)
    }

    /// Count the in-range pairs
    pub fn tabulate(&self, x: &[L], y: &[L]) -> Result<Table2<usize>> {
        let mut table = self.zeros()?;
        self.accumulate(&mut table, x, y)?;
        Ok(table)
    }

    /// Sum the weights of the in-range pairs
    pub fn tabulate_weighted<W: Numeric>(
        &self,
        x: &[L],
        y: &[L],
        weights: &[W],
    ) -> Result<Table2<W>> {
        let mut table = self.zeros()?;
        self.accumulate_weighted(&mut table, x, y, weights)?;
        Ok(table)
    }

    /// Joint counts divided by the number of pairs
    pub fn proportions(&self, x: &[L], y: &[L]) -> Result<Table2<f64>> {
        let table = self.tabulate(x, y)?;
        let inv = 1.0 / x.len() as f64;
        Ok(table.map(|&c| c as f64 * inv))
    }

    /// Weighted joint counts divided by the sum of all weights
    pub fn proportions_weighted<W: Numeric>(
        &self,
        x: &[L],
        y: &[L],
        weights: &[W],
    ) -> Result<Table2<f64>> {
        let table = self.tabulate_weighted(x, y, weights)?;
        let inv = 1.0 / weight_sum(weights);
        Ok(table.map(|w| w.as_f64() * inv))
    }
}
