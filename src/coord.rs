//! Grid coordinates.
//!
//! Coordinates are signed so that cells just outside the grid (for example
//! the boundary of a ship sitting in a corner) can still be named.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

/// A `(row, col)` position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a coordinate at (`row`, `col`).
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row-major ordering: by row first, then by column.
    pub fn row_major(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.col.cmp(&other.col))
    }

    /// Chebyshev distance, `max(|Δrow|, |Δcol|)`.
    pub fn chebyshev(&self, other: &Self) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }

    /// The coordinate as unsigned indices, or `None` if either component is negative.
    pub fn to_index(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some((row, col))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row_major(other)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
