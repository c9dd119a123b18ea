//! Error types shared across the crate.

use crate::mask::MaskError;
use crate::ship::ShipKind;

/// Errors returned while building a [`Grid`](crate::Grid) from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Underlying mask error (cell index outside the grid).
    MaskError(MaskError),
    /// No rows, or rows without any cells.
    Empty,
    /// More cells than a grid can hold.
    TooLarge { rows: usize, cols: usize },
    /// A row whose width differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell value other than 0 or 1.
    NonBinary { row: usize, col: usize, value: u8 },
    /// A character in text input that is neither a cell nor a separator.
    /// `line` and `col` are zero-based positions in the source text.
    InvalidCharacter { line: usize, col: usize, ch: char },
}

impl From<MaskError> for GridError {
    fn from(err: MaskError) -> Self {
        GridError::MaskError(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::MaskError(e) => write!(f, "Mask error: {}", e),
            GridError::Empty => write!(f, "Grid has no cells"),
            GridError::TooLarge { rows, cols } => {
                write!(f, "Grid of {}x{} cells is too large", rows, cols)
            }
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::NonBinary { row, col, value } => {
                write!(f, "Cell ({}, {}) has value {}, expected 0 or 1", row, col, value)
            }
            GridError::InvalidCharacter { line, col, ch } => {
                write!(f, "Unexpected character {:?} at line {}, column {}", ch, line + 1, col + 1)
            }
        }
    }
}

/// Errors returned by the random fleet generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Underlying grid error.
    GridError(GridError),
    /// No legal spot was found for a ship (the field is too small or too crowded).
    UnableToPlaceShip(ShipKind),
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        PlacementError::GridError(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::GridError(e) => write!(f, "Grid error: {}", e),
            PlacementError::UnableToPlaceShip(kind) => write!(f, "Unable to place {}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MaskError {}
#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
