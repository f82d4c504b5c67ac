//! Hexagonal grid topology: id/coordinate mapping and neighbor resolution.
//!
//! Cells are stored row-major (`id = row * columns + column`). Odd rows are
//! shifted half a cell to the right, so the diagonal neighbors above and
//! below sit at `column + 1` on odd rows and at `column - 1` on even rows.
//! There is no wraparound at the edges.

use crate::error::{EngineError, Result};

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Immutable grid dimensions. Never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create a grid topology. Both dimensions must be non-zero and the
    /// cell count must not exceed [`MAX_CELLS`].
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(EngineError::EmptyGrid { rows, columns });
        }
        match rows.checked_mul(columns) {
            Some(len) if len <= MAX_CELLS => Ok(Grid { rows, columns }),
            _ => Err(EngineError::GridTooLarge { rows, columns }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Calculate the linear id for a coordinate.
    #[inline]
    pub fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Checked form of [`Grid::index_of`].
    pub fn checked_index(&self, row: usize, column: usize) -> Result<usize> {
        if !self.in_bounds(row, column) {
            return Err(EngineError::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.index_of(row, column))
    }

    /// Inverse of [`Grid::index_of`].
    #[inline]
    pub fn row_column_of(&self, id: usize) -> (usize, usize) {
        (id / self.columns, id % self.columns)
    }

    /// Ids of the 2 to 6 hexagonal neighbors of `id`, in a fixed order:
    /// left, right, above, above-diagonal, below, below-diagonal.
    pub fn neighbors_of(&self, id: usize) -> Vec<usize> {
        debug_assert!(id < self.len(), "cell id {} outside grid", id);
        let (row, column) = self.row_column_of(id);
        let at_row_start = column == 0;
        let at_row_end = column + 1 == self.columns;
        let odd_row = row % 2 == 1;

        let mut neighbors = Vec::with_capacity(6);

        if !at_row_start {
            neighbors.push(self.index_of(row, column - 1));
        }
        if !at_row_end {
            neighbors.push(self.index_of(row, column + 1));
        }

        // Diagonal column shared by the row above and the row below
        let diagonal = if odd_row {
            (!at_row_end).then(|| column + 1)
        } else {
            (!at_row_start).then(|| column - 1)
        };

        if row > 0 {
            neighbors.push(self.index_of(row - 1, column));
            if let Some(dc) = diagonal {
                neighbors.push(self.index_of(row - 1, dc));
            }
        }
        if row + 1 < self.rows {
            neighbors.push(self.index_of(row + 1, column));
            if let Some(dc) = diagonal {
                neighbors.push(self.index_of(row + 1, dc));
            }
        }

        neighbors
    }

    /// Move an id by `delta` cells, wrapping around the whole grid.
    /// Used by cursor navigation (`±1` horizontally, `±columns` vertically).
    pub fn wrapping_offset(&self, id: usize, delta: isize) -> usize {
        let len = self.len() as isize;
        (id as isize + delta).rem_euclid(len) as usize
    }

    /// Leading indent, in half cells, that renderers apply to a row.
    pub fn row_indent(&self, row: usize) -> usize {
        row % 2
    }
}
