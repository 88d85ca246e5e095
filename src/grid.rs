// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The binary output grid of a render.

use std::fmt;

/// A `rows` x `columns` block of binary cells, stored row-major.  A 1
/// marks a bounded sample, a 0 an escaped one; nothing else is ever
/// stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// An all-zero grid.
    pub fn new(rows: usize, columns: usize) -> Grid {
        Grid {
            rows,
            columns,
            cells: vec![0 as u8; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `row`, `column`.  Panics when out of range.
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.cells[self.offset(row, column)]
    }

    /// Mark the cell at `row`, `column` as bounded.
    pub fn mark(&mut self, row: usize, column: usize) {
        let offset = self.offset(row, column);
        self.cells[offset] = 1;
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// The raw row-major cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// How many cells are marked bounded.
    pub fn count_bounded(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// 8-bit grayscale samples for the grid, row-major: bounded cells
    /// are white, escaped cells black.
    pub fn to_luma(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|&cell| if cell == 1 { 255 } else { 0 })
            .collect()
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) outside a {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}

/// Renders the grid as lines of `0` and `1`, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in self.row(row) {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
