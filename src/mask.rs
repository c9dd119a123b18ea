//! A packed bit set over the cells of a `rows × cols` grid.
//!
//! Cells are stored row-major in 64-bit words. The mask is used both for the
//! occupancy of a [`Grid`](crate::Grid) and for the set of cells claimed by
//! the scanner.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Largest number of cells a mask may hold. Keeps every row and column index
/// representable as an `i32` coordinate.
pub const MAX_CELLS: usize = 1 << 24;

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Requested `rows × cols` exceeds [`MAX_CELLS`] (or overflows `usize`).
    SizeTooLarge { rows: usize, cols: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::SizeTooLarge { rows, cols } => {
                write!(f, "SizeTooLarge: {}x{} exceeds {} cells", rows, cols, MAX_CELLS)
            }
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `rows × cols` bit set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CellMask {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl CellMask {
    /// Create an empty mask (all bits cleared) without size check.
    ///
    /// Callers pass dimensions already accepted by [`CellMask::try_new`];
    /// anything larger panics.
    pub fn new(rows: usize, cols: usize) -> Self {
        let bits = rows * cols;
        CellMask {
            rows,
            cols,
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if `rows * cols`
    /// exceeds [`MAX_CELLS`].
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, MaskError> {
        match rows.checked_mul(cols) {
            Some(bits) if bits <= MAX_CELLS => Ok(Self::new(rows, cols)),
            _ => Err(MaskError::SizeTooLarge { rows, cols }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        let (word, bit) = self.locate(row, col)?;
        Ok((self.words[word] >> bit) & 1 == 1)
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] |= 1u64 << bit;
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] &= !(1u64 << bit);
        Ok(())
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), MaskError> {
        if row >= self.rows || col >= self.cols {
            return Err(MaskError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.cols + col;
        Ok((idx / WORD_BITS, idx % WORD_BITS))
    }

    /// Iterator over the set bits, in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_> {
        SetBits { mask: self, idx: 0 }
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}x{}>:", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a mask.
#[derive(Clone, Copy)]
pub struct SetBits<'a> {
    mask: &'a CellMask,
    idx: usize,
}

impl Iterator for SetBits<'_> {
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let total = self.mask.rows * self.mask.cols;
        while self.idx < total {
            let idx = self.idx;
            self.idx += 1;
            if (self.mask.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1 {
                return Some((idx / self.mask.cols, idx % self.mask.cols));
            }
        }
        None
    }
}
