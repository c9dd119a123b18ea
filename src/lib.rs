#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod coord;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod placement;
pub mod prelude;
mod scanner;
mod ship;
mod tally;
mod validator;

pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::{CellMask, MaskError, SetBits, MAX_CELLS};
pub use placement::{random_field, random_placement};
pub use scanner::scan;
pub use ship::*;
pub use tally::FleetTally;
pub use validator::{inspect, touching_pairs, validate, validate_rows, Report, Validator, Violation};
