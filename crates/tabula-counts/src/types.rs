//! Core types for count table representation

use std::fmt;
use std::ops::{Index, IndexMut};

use tabula_core::{Error, Numeric, Result};

/// A two-dimensional count table (contingency table)
///
/// Stored row-major: rows follow the x levels, columns the y levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Table2<C> {
    data: Vec<C>,
    nrows: usize,
    ncols: usize,
}

impl<C: Numeric> Table2<C> {
    /// Create a zero-initialized table
    ///
    /// Fails if `nrows * ncols` overflows `usize`.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        let len = cell_count(nrows, ncols)?;
        Ok(Self {
            data: vec![C::zero(); len],
            nrows,
            ncols,
        })
    }

    /// Sum of every cell in the count type
    pub fn total(&self) -> C {
        tabula_core::numeric::total(&self.data)
    }
}

fn cell_count(nrows: usize, ncols: usize) -> Result<usize> {
    nrows.checked_mul(ncols).ok_or_else(|| {
        Error::InvalidParameter(format!("table shape {nrows}x{ncols} overflows"))
    })
}

impl<C> Table2<C> {
    /// Wrap row-major data in a table of the given shape
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<C>) -> Result<Self> {
        let expected = cell_count(nrows, ncols)?;
        if data.len() != expected {
            return Err(Error::size_mismatch(expected, data.len(), "table data"));
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Get the shape as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of rows (x levels)
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (y levels)
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get a cell, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        if row < self.nrows && col < self.ncols {
            self.data.get(row * self.ncols + col)
        } else {
            None
        }
    }

    /// Get one row
    pub fn row(&self, row: usize) -> &[C] {
        &self.data[row * self.ncols..(row + 1) * self.ncols]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        // chunks_exact panics on zero; a table with no columns has no cells either
        self.data.chunks_exact(self.ncols.max(1))
    }

    /// Iterate over `((row, col), value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &C)> {
        let ncols = self.ncols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / ncols, i % ncols), v))
    }

    /// Row-major cell data
    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    /// Mutable row-major cell data
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.data
    }

    /// Consume the table, returning its row-major data
    pub fn into_vec(self) -> Vec<C> {
        self.data
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<D>(&self, f: impl FnMut(&C) -> D) -> Table2<D> {
        Table2 {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<C> Index<(usize, usize)> for Table2<C> {
    type Output = C;

    fn index(&self, (row, col): (usize, usize)) -> &C {
        assert!(row < self.nrows && col < self.ncols, "index ({row}, {col}) out of bounds");
        &self.data[row * self.ncols + col]
    }
}

impl<C> IndexMut<(usize, usize)> for Table2<C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut C {
        assert!(row < self.nrows && col < self.ncols, "index ({row}, {col}) out of bounds");
        &mut self.data[row * self.ncols + col]
    }
}

impl<C: fmt::Display> fmt::Display for Table2<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table2({}x{})", self.nrows, self.ncols)?;
        for row in self.rows().take(self.nrows) {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "  [{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
