//! The input field: a rectangular grid of occupied/empty cells.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::GridError;
use crate::coord::Coord;
use crate::mask::{CellMask, MaskError};

/// A rectangular, zero-indexed grid of binary cells.
///
/// Dimensions are fixed at construction and every grid has at least one cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    occupied: CellMask,
}

impl Grid {
    /// Create an empty (all water) grid. Fails if either dimension is zero
    /// or the grid would exceed [`MAX_CELLS`](crate::MAX_CELLS).
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let occupied = CellMask::try_new(rows, cols).map_err(|e| match e {
            MaskError::SizeTooLarge { rows, cols } => GridError::TooLarge { rows, cols },
            e => GridError::MaskError(e),
        })?;
        Ok(Grid { occupied })
    }

    /// Build a grid from rows of `0`/`1` values.
    ///
    /// Rejects an empty grid, rows of differing width and values other than
    /// 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Grid::new(rows.len(), width)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => grid.occupied.set(r, c)?,
                    value => return Err(GridError::NonBinary { row: r, col: c, value }),
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.occupied.rows()
    }

    pub fn cols(&self) -> usize {
        self.occupied.cols()
    }

    /// Returns `true` if `cell` is inside the grid and occupied.
    pub fn is_occupied(&self, cell: Coord) -> bool {
        cell.to_index()
            .and_then(|(r, c)| self.occupied.get(r, c).ok())
            .unwrap_or(false)
    }

    /// Returns `true` if `cell` lies inside the grid.
    pub fn contains(&self, cell: Coord) -> bool {
        cell.to_index()
            .map(|(r, c)| r < self.rows() && c < self.cols())
            .unwrap_or(false)
    }

    /// Mark the cell at (`row`, `col`) occupied or empty.
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) -> Result<(), GridError> {
        if occupied {
            self.occupied.set(row, col)?;
        } else {
            self.occupied.clear(row, col)?;
        }
        Ok(())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.occupied
            .iter_set_bits()
            .map(|(r, c)| Coord::new(r as i32, c as i32))
    }

    /// Occupancy as a bit mask.
    pub fn mask(&self) -> &CellMask {
        &self.occupied
    }

    /// The grid as rows of `0`/`1` values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|c| u8::from(self.occupied.get(r, c).unwrap_or(false)))
                    .collect()
            })
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse one row per non-blank line. Cells are `0` or `1`; spaces, tabs
    /// and commas between them are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '0' => row.push(0),
                    '1' => row.push(1),
                    ' ' | '\t' | ',' | '\r' => {}
                    ch => return Err(GridError::InvalidCharacter { line: idx, col, ch }),
                }
            }
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if c > 0 {
                    write!(f, " ")?;
                }
                let bit = if self.occupied.get(r, c).unwrap_or(false) {
                    '1'
                } else {
                    '0'
                };
                write!(f, "{}", bit)?;
            }
            if r + 1 < self.rows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid {{ {:?} }}", self.occupied)
    }
}
