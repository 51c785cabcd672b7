//! Common types for the engine: errors, shot results and sides.

use core::fmt;

use crate::cells::CellSetError;
use crate::ship::ShipType;

/// Result of firing at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk(ShipType),
    /// Shot landed in open water.
    Miss,
    /// The cell had already been fired upon; nothing changed.
    AlreadyAttacked,
}

impl AttackOutcome {
    /// `true` when the shot landed on a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::Sunk(_))
    }
}

/// A resolved shot: where it went and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub row: usize,
    pub col: usize,
    pub outcome: AttackOutcome,
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => f.write_str("human"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Structural errors: malformed input the engine cannot act on.
///
/// Placements that merely do not fit and repeated attacks are not errors;
/// they come back as `Ok(false)` and [`AttackOutcome::AlreadyAttacked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship name is not one of the five fleet classes.
    InvalidShipType,
    /// Direction is neither horizontal nor vertical.
    InvalidDirection,
    /// Unknown fleet placement method.
    InvalidPlacementMethod,
    /// A ship of this type is already on the board.
    ShipAlreadyPlaced(ShipType),
    /// Every cell of the target board has been fired upon.
    NoTargetsRemaining,
    /// Randomized placement exhausted its retry budget.
    FleetPlacementFailed { attempts: usize },
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        match err {
            CellSetError::OutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidShipType => write!(f, "Ship name is not a valid fleet ship"),
            BoardError::InvalidDirection => {
                write!(f, "Direction must be \"horizontal\" or \"vertical\"")
            }
            BoardError::InvalidPlacementMethod => write!(f, "Unknown fleet placement method"),
            BoardError::ShipAlreadyPlaced(ship) => {
                write!(f, "A {} is already placed on the board", ship)
            }
            BoardError::NoTargetsRemaining => write!(f, "Every cell has already been attacked"),
            BoardError::FleetPlacementFailed { attempts } => {
                write!(f, "Unable to place the fleet after {} attempts", attempts)
            }
        }
    }
}

impl core::error::Error for BoardError {}
