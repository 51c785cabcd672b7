#![cfg_attr(not(feature = "std"), no_std)]

//! Two-player grid battle engine: boards and fleets, an autonomous opponent,
//! and an async match controller.

mod board;
mod cells;
mod common;
mod config;
mod opponent;
mod player;
mod ship;
#[cfg(feature = "std")]
mod controller;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use cells::{CellIter, CellSet, CellSetError};
pub use common::*;
pub use config::*;
pub use opponent::*;
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use controller::*;
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
