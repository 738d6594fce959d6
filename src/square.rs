//! The magic square grid type
//!
//! All grid state lives in one owned contiguous row-major buffer; there are
//! no per-row allocations and no shared ownership. Zero doubles as the
//! "unoccupied" marker while the generator is filling the grid.

use std::fmt;

use crate::error::Error;
use crate::magic_constant;
use crate::order::Order;

/// An n×n grid of cells, addressed by (row, col) in [0, n).
///
/// Freshly constructed grids are all zeros; a completed grid holds each of
/// 1..n² exactly once with every row, column, and main diagonal summing to
/// the magic constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSquare {
    order: usize,
    cells: Vec<u32>,
}

impl MagicSquare {
    /// Allocate a zeroed order×order grid.
    ///
    /// The buffer is this crate's only allocation; failure surfaces as a
    /// single `Error::Allocation` instead of aborting mid-construction.
    pub fn zeroed(order: Order) -> Result<Self, Error> {
        let order = order.get();
        let len = order * order;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { cells: len })?;
        cells.resize(len, 0);
        Ok(Self { order, cells })
    }

    /// Grid dimension n.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.order && col < self.order,
            "cell ({row}, {col}) out of bounds for order {}",
            self.order
        );
        row * self.order + col
    }

    /// Read the cell at (row, col). Panics on out-of-bounds indices.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    /// Write the cell at (row, col). Panics on out-of-bounds indices.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        let i = self.index(row, col);
        self.cells[i] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[u32] {
        assert!(row < self.order, "row {row} out of bounds for order {}", self.order);
        &self.cells[row * self.order..(row + 1) * self.order]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.order)
    }

    /// The sum every line of a completed grid must reach: n(n²+1)/2.
    pub fn magic_constant(&self) -> u64 {
        magic_constant(self.order)
    }

    /// Whether the grid is a completed magic square: each of 1..n² exactly
    /// once, and all rows, columns, and both main diagonals at the magic
    /// constant.
    pub fn is_magic(&self) -> bool {
        let n = self.order;
        let target = self.magic_constant();

        // Every value in 1..n², no repeats
        let mut seen = vec![false; n * n];
        for &v in &self.cells {
            let slot = (v as usize).checked_sub(1).and_then(|i| seen.get_mut(i));
            match slot {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }

        for row in self.rows() {
            if row.iter().map(|&v| u64::from(v)).sum::<u64>() != target {
                return false;
            }
        }
        for col in 0..n {
            let sum: u64 = (0..n).map(|row| u64::from(self.get(row, col))).sum();
            if sum != target {
                return false;
            }
        }
        let main: u64 = (0..n).map(|i| u64::from(self.get(i, i))).sum();
        let anti: u64 = (0..n).map(|i| u64::from(self.get(i, n - 1 - i))).sum();
        main == target && anti == target
    }
}

impl fmt::Display for MagicSquare {
    /// Comma-separated rows, one per line: the same row layout the file
    /// format uses, handy for debug dumps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl MagicSquare {
    /// Build a grid straight from rows (tests only).
    pub(crate) fn from_rows(rows: &[&[u32]]) -> Self {
        let order = rows.len();
        let mut cells = Vec::with_capacity(order * order);
        for row in rows {
            assert_eq!(row.len(), order, "ragged test grid");
            cells.extend_from_slice(row);
        }
        Self { order, cells }
    }
}
