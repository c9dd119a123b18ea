//! Ship definitions: kinds, orientation and the cells a ship covers.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step along the ship's axis.
    pub fn step(self) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(0, 1),
            Orientation::Vertical => Coord::new(1, 0),
        }
    }
}

/// Kind of ship. Each kind has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Submarine,
    Destroyer,
    Cruiser,
    Battleship,
}

impl ShipKind {
    /// All kinds, longest first. This is the order the scanner searches in.
    pub const LONGEST_FIRST: [ShipKind; 4] = [
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Destroyer,
        ShipKind::Submarine,
    ];

    const LENGTHS: [(ShipKind, usize); 4] = [
        (ShipKind::Submarine, 1),
        (ShipKind::Destroyer, 2),
        (ShipKind::Cruiser, 3),
        (ShipKind::Battleship, 4),
    ];

    /// Number of cells a ship of this kind covers.
    pub fn length(self) -> usize {
        Self::LENGTHS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, len)| *len)
            .unwrap_or(0)
    }

    /// The kind whose length is `len`, if any.
    pub fn from_length(len: usize) -> Option<ShipKind> {
        Self::LENGTHS
            .iter()
            .find(|(_, l)| *l == len)
            .map(|(kind, _)| *kind)
    }

    /// Ship's name.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Battleship => "Battleship",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship: a straight, contiguous run of cells along one axis.
///
/// Cells are stored in ascending order along the axis of travel, starting
/// from the seed cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    cells: Vec<Coord>,
}

impl Ship {
    /// Lay out a ship of `kind` starting at `seed` and extending right
    /// (horizontal) or down (vertical).
    pub fn new(kind: ShipKind, seed: Coord, orientation: Orientation) -> Self {
        let step = orientation.step();
        let mut cells = Vec::with_capacity(kind.length());
        let mut cell = seed;
        for _ in 0..kind.length() {
            cells.push(cell);
            cell = cell + step;
        }
        Ship {
            kind,
            orientation,
            cells,
        }
    }

    /// Ship's kind.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Orientation of the ship. Submarines report the orientation they
    /// were detected in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coord {
        self.cells[0]
    }

    /// Cells covered by the ship, in order along its axis.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if the ship covers `cell`.
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// All cells at Chebyshev distance 1 from the ship that are not part of
    /// it. The result is not clipped to any grid.
    pub fn boundary(&self) -> BTreeSet<Coord> {
        let mut boundary = BTreeSet::new();
        for &cell in &self.cells {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let neighbour = cell + Coord::new(dr, dc);
                    if !self.contains(neighbour) {
                        boundary.insert(neighbour);
                    }
                }
            }
        }
        boundary
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.kind)?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}
