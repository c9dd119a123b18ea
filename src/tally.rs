//! Counting detected ships by kind.

use alloc::collections::BTreeMap;

use crate::ship::{Ship, ShipKind};

/// Number of detected ships per kind. Kinds never seen count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetTally {
    counts: BTreeMap<ShipKind, usize>,
}

impl FleetTally {
    /// Tally `ships` by kind.
    pub fn from_ships(ships: &[Ship]) -> Self {
        let mut counts = BTreeMap::new();
        for ship in ships {
            *counts.entry(ship.kind()).or_insert(0) += 1;
        }
        FleetTally { counts }
    }

    pub fn count(&self, kind: ShipKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of ships counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(kind, count)` for every kind seen at least once, shortest kind first.
    pub fn iter(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        self.counts.iter().map(|(k, n)| (*k, *n))
    }
}
