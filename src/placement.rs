//! Random placement of a legal fleet.

use rand::Rng;

use crate::common::PlacementError;
use crate::config::FleetRules;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::ship::{Orientation, Ship, ShipKind};

const ATTEMPTS_PER_SHIP: usize = 100;
const ATTEMPTS_PER_FIELD: usize = 20;

/// Returns a random (origin, orientation) for a ship of `kind` that stays on
/// the grid and keeps clear of every occupied cell, diagonals included.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    grid: &Grid,
    kind: ShipKind,
) -> Result<(Coord, Orientation), PlacementError> {
    let len = kind.length();
    for _ in 0..ATTEMPTS_PER_SHIP {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orient {
            Orientation::Horizontal if len <= grid.cols() => (grid.rows() - 1, grid.cols() - len),
            Orientation::Vertical if len <= grid.rows() => (grid.rows() - len, grid.cols() - 1),
            _ => continue,
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let origin = Coord::new(r as i32, c as i32);
        let ship = Ship::new(kind, origin, orient);
        if keeps_clear(grid, &ship) {
            return Ok((origin, orient));
        }
    }
    Err(PlacementError::UnableToPlaceShip(kind))
}

fn keeps_clear(grid: &Grid, ship: &Ship) -> bool {
    ship.cells().iter().all(|c| !grid.is_occupied(*c))
        && ship.boundary().iter().all(|c| !grid.is_occupied(*c))
}

/// Generate a `rows × cols` field holding the fleet described by `rules`,
/// with no two ships touching.
///
/// Placement is greedy, longest ships first; if a ship cannot be placed the
/// whole field is started over a bounded number of times.
pub fn random_field<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    rules: &FleetRules,
) -> Result<Grid, PlacementError> {
    let mut last_err = PlacementError::UnableToPlaceShip(ShipKind::Battleship);
    for _ in 0..ATTEMPTS_PER_FIELD {
        match try_field(rng, rows, cols, rules) {
            Ok(grid) => return Ok(grid),
            Err(e @ PlacementError::UnableToPlaceShip(_)) => last_err = e,
            Err(e) => return Err(e),
        }
    }
    Err(last_err)
}

fn try_field<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    rules: &FleetRules,
) -> Result<Grid, PlacementError> {
    let mut grid = Grid::new(rows, cols)?;
    for (kind, count) in rules.iter() {
        for _ in 0..count {
            let (origin, orient) = random_placement(rng, &grid, kind)?;
            for cell in Ship::new(kind, origin, orient).cells() {
                if let Some((r, c)) = cell.to_index() {
                    grid.set(r, c, true)?;
                }
            }
        }
    }
    Ok(grid)
}
