//! Commonly used types and utilities for ease of import.

pub use crate::{inspect, scan, validate, FleetRules, Grid, GridError, Report, Ship, ShipKind, Validator};
