//! Field validation: fleet composition plus the no-touching rule.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::config::FleetRules;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::scanner::scan;
use crate::ship::{Ship, ShipKind};
use crate::tally::FleetTally;

/// A reason a field is not legal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// Wrong number of ships of one kind.
    FleetMismatch {
        kind: ShipKind,
        expected: usize,
        found: usize,
    },
    /// Two ships touch, sideways or at a corner. Indices refer to
    /// [`Report::ships`], `first < second`.
    ShipsTouching { first: usize, second: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::FleetMismatch {
                kind,
                expected,
                found,
            } => write!(f, "expected {} {}(s), found {}", expected, kind, found),
            Violation::ShipsTouching { first, second } => {
                write!(f, "ships #{} and #{} touch", first, second)
            }
        }
    }
}

/// Outcome of inspecting a field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub ships: Vec<Ship>,
    pub tally: FleetTally,
    pub violations: Vec<Violation>,
}

impl Report {
    /// A field is valid when nothing was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks fields against a fleet composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    rules: FleetRules,
}

impl Validator {
    pub fn new(rules: FleetRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &FleetRules {
        &self.rules
    }

    /// Scan `grid` and collect every violation.
    pub fn inspect(&self, grid: &Grid) -> Report {
        let ships = scan(grid);
        let tally = FleetTally::from_ships(&ships);

        let mut violations = Vec::new();
        for kind in ShipKind::LONGEST_FIRST {
            let expected = self.rules.expected(kind);
            let found = tally.count(kind);
            if expected != found {
                violations.push(Violation::FleetMismatch {
                    kind,
                    expected,
                    found,
                });
            }
        }
        for (first, second) in touching_pairs(&ships) {
            violations.push(Violation::ShipsTouching { first, second });
        }

        for v in &violations {
            log::debug!("violation: {}", v);
        }
        log::info!(
            "{}x{} field with {} ship(s): {}",
            grid.rows(),
            grid.cols(),
            ships.len(),
            if violations.is_empty() { "valid" } else { "invalid" }
        );

        Report {
            ships,
            tally,
            violations,
        }
    }

    /// Returns `true` if `grid` holds exactly the expected fleet and no two
    /// ships touch.
    pub fn validate(&self, grid: &Grid) -> bool {
        self.inspect(grid).is_valid()
    }
}

/// Validate `grid` against the standard fleet.
pub fn validate(grid: &Grid) -> bool {
    Validator::default().validate(grid)
}

/// Inspect `grid` against the standard fleet.
pub fn inspect(grid: &Grid) -> Report {
    Validator::default().inspect(grid)
}

/// Check raw rows for well-formedness, then validate them against the
/// standard fleet.
pub fn validate_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<bool, GridError> {
    let grid = Grid::from_rows(rows)?;
    Ok(validate(&grid))
}

/// Index pairs `(i, j)`, `i < j`, of ships where one lies in the other's
/// boundary. Each pair appears once, in ascending order.
pub fn touching_pairs(ships: &[Ship]) -> Vec<(usize, usize)> {
    let mut owner: BTreeMap<Coord, usize> = BTreeMap::new();
    for (i, ship) in ships.iter().enumerate() {
        for &cell in ship.cells() {
            owner.insert(cell, i);
        }
    }

    let mut pairs = BTreeSet::new();
    for (i, ship) in ships.iter().enumerate() {
        for cell in ship.boundary() {
            if let Some(&j) = owner.get(&cell) {
                if j != i {
                    pairs.insert((i.min(j), i.max(j)));
                }
            }
        }
    }
    pairs.into_iter().collect()
}
