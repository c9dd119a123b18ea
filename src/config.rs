use crate::ship::ShipKind;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

/// Expected fleet composition: how many ships of each kind a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetRules {
    counts: [(ShipKind, usize); 4],
}

impl FleetRules {
    /// One battleship, two cruisers, three destroyers, four submarines.
    pub const STANDARD: FleetRules = FleetRules::new(1, 2, 3, 4);

    /// Build a composition from per-kind counts.
    pub const fn new(battleships: usize, cruisers: usize, destroyers: usize, submarines: usize) -> Self {
        FleetRules {
            counts: [
                (ShipKind::Battleship, battleships),
                (ShipKind::Cruiser, cruisers),
                (ShipKind::Destroyer, destroyers),
                (ShipKind::Submarine, submarines),
            ],
        }
    }

    /// Number of ships of `kind` the fleet must contain.
    pub fn expected(&self, kind: ShipKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// `(kind, count)` pairs, longest kind first.
    pub fn iter(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Total number of ships in the fleet.
    pub fn ship_count(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Total number of occupied cells a legal field holds.
    pub fn total_cells(&self) -> usize {
        self.counts.iter().map(|(k, n)| k.length() * n).sum()
    }
}

impl Default for FleetRules {
    fn default() -> Self {
        Self::STANDARD
    }
}
