//! Ship detection.
//!
//! The scanner walks the grid once per ship length, longest first, and for
//! each length once per orientation: all rows, then all columns. A window of
//! the current length slides along every line; a window whose cells are all
//! occupied and not yet claimed becomes a ship and its cells are claimed.
//!
//! Searching longest first keeps a straight run from being split into
//! several shorter ships. Runs longer than any ship are not rejected here: a
//! run of five cells comes out as a battleship plus a submarine, and it is
//! the validator's adjacency check that flags the field.

use alloc::vec::Vec;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::mask::CellMask;
use crate::ship::{Orientation, Ship, ShipKind};

/// Detect every ship on `grid`, in discovery order.
///
/// The grid is not modified; claimed cells are tracked in a separate mask.
/// Every occupied cell ends up in exactly one returned ship.
pub fn scan(grid: &Grid) -> Vec<Ship> {
    let mut claimed = CellMask::new(grid.rows(), grid.cols());
    let mut ships = Vec::new();
    for kind in ShipKind::LONGEST_FIRST {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            scan_lines(grid, &mut claimed, kind, orientation, &mut ships);
        }
    }
    ships
}

/// Slide a `kind`-length window along every line running in `orientation`.
fn scan_lines(
    grid: &Grid,
    claimed: &mut CellMask,
    kind: ShipKind,
    orientation: Orientation,
    ships: &mut Vec<Ship>,
) {
    let len = kind.length();
    let (lines, line_len) = match orientation {
        Orientation::Horizontal => (grid.rows(), grid.cols()),
        Orientation::Vertical => (grid.cols(), grid.rows()),
    };
    if len > line_len {
        return;
    }
    let step = orientation.step();

    for line in 0..lines {
        for start in 0..=line_len - len {
            let seed = match orientation {
                Orientation::Horizontal => Coord::new(line as i32, start as i32),
                Orientation::Vertical => Coord::new(start as i32, line as i32),
            };
            let mut cell = seed;
            let mut free = true;
            for _ in 0..len {
                if !is_free(grid, claimed, cell) {
                    free = false;
                    break;
                }
                cell = cell + step;
            }
            if !free {
                continue;
            }

            let ship = Ship::new(kind, seed, orientation);
            for &cell in ship.cells() {
                let claim = cell
                    .to_index()
                    .map(|(r, c)| claimed.set(r, c).is_ok())
                    .unwrap_or(false);
                if !claim {
                    log::warn!("cell {} of {} lies outside the claim mask", cell, ship);
                }
            }
            log::debug!("found ship: {}", ship);
            ships.push(ship);
        }
    }
}

/// Occupied on the grid and not yet part of a detected ship.
fn is_free(grid: &Grid, claimed: &CellMask, cell: Coord) -> bool {
    if !grid.is_occupied(cell) {
        return false;
    }
    match cell.to_index() {
        Some((r, c)) => !claimed.get(r, c).unwrap_or(true),
        None => false,
    }
}
