//! One side's grid: ship placements and attack history.

use core::fmt;

use crate::cells::CellSet;
use crate::common::{AttackOutcome, BoardError};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipType};

/// Set of attacked cells on a board.
pub type Cells = CellSet<u128, BOARD_SIZE>;

/// Snapshot of every cell: the ship covering it, if any.
pub type Grid = [[Option<Ship>; BOARD_SIZE]; BOARD_SIZE];

/// Ship placements and attack history for one side.
///
/// Cells store the [`ShipType`] of their occupant, which doubles as the
/// index into the fleet registry. Every cell a ship covers therefore resolves
/// to the same counter, and each type can be placed at most once.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<ShipType>; BOARD_SIZE]; BOARD_SIZE],
    fleet: [Option<Ship>; NUM_SHIPS],
    missed: Cells,
    landed: Cells,
}

impl Board {
    /// Create an empty board (no ships, no attacks).
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            fleet: [None; NUM_SHIPS],
            missed: Cells::new(),
            landed: Cells::new(),
        }
    }

    /// `true` iff (row, col) lies on the board.
    pub fn is_valid_coordinate(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    fn check_coordinate(row: usize, col: usize) -> Result<(), BoardError> {
        if Self::is_valid_coordinate(row, col) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Place `ship_type` anchored at (row, col) extending in `orientation`.
    ///
    /// Returns `Ok(false)` when the ship would overlap another or run past
    /// the edge. Errors only on an off-board anchor or a type that is
    /// already on the board.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        ship_type: ShipType,
        orientation: Orientation,
    ) -> Result<bool, BoardError> {
        Self::check_coordinate(row, col)?;
        if self.fleet[ship_type.index()].is_some() {
            return Err(BoardError::ShipAlreadyPlaced(ship_type));
        }
        if !self.verify_ship_placement(row, col, ship_type, orientation) {
            log::trace!(
                "{} does not fit at ({}, {}) {}",
                ship_type,
                row,
                col,
                orientation
            );
            return Ok(false);
        }
        for (r, c) in orientation.cells(row, col, ship_type.length()) {
            self.cells[r][c] = Some(ship_type);
        }
        self.fleet[ship_type.index()] = Some(Ship::new(ship_type));
        Ok(true)
    }

    /// String-typed placement, as received from an external source.
    pub fn place_ship_named(
        &mut self,
        row: usize,
        col: usize,
        ship_name: &str,
        direction: &str,
    ) -> Result<bool, BoardError> {
        Self::check_coordinate(row, col)?;
        let ship_type: ShipType = ship_name.parse()?;
        let orientation: Orientation = direction.parse()?;
        self.place_ship(row, col, ship_type, orientation)
    }

    /// Capacity check: the ship stays on the board and every cell is free.
    fn verify_ship_placement(
        &self,
        row: usize,
        col: usize,
        ship_type: ShipType,
        orientation: Orientation,
    ) -> bool {
        if ship_type.length() > orientation.space_from(row, col) {
            return false;
        }
        orientation
            .cells(row, col, ship_type.length())
            .all(|(r, c)| self.cells[r][c].is_none())
    }

    /// Fire at (row, col).
    ///
    /// A cell resolves at most once; later shots at it report
    /// [`AttackOutcome::AlreadyAttacked`] and leave the board untouched.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, BoardError> {
        Self::check_coordinate(row, col)?;
        if self.missed.contains(row, col)? || self.landed.contains(row, col)? {
            return Ok(AttackOutcome::AlreadyAttacked);
        }
        let occupant = match self.cells[row][col] {
            Some(ship_type) => self.fleet[ship_type.index()].as_mut(),
            None => None,
        };
        let Some(ship) = occupant else {
            self.missed.insert(row, col)?;
            return Ok(AttackOutcome::Miss);
        };
        self.landed.insert(row, col)?;
        ship.hit();
        if ship.is_sunk() {
            Ok(AttackOutcome::Sunk(ship.ship_type()))
        } else {
            Ok(AttackOutcome::Hit)
        }
    }

    /// `true` iff at least one ship is placed and every placed ship is sunk.
    pub fn report_ship_status(&self) -> bool {
        let mut placed = self.fleet.iter().flatten().peekable();
        placed.peek().is_some() && placed.all(Ship::is_sunk)
    }

    /// Occupant of (row, col), borrowed from the registry.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<&Ship>, BoardError> {
        Self::check_coordinate(row, col)?;
        Ok(self.cells[row][col].and_then(|t| self.fleet[t.index()].as_ref()))
    }

    /// Copy of the grid with each cell's ship state.
    pub fn grid(&self) -> Grid {
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid[r][c] = cell.and_then(|t| self.fleet[t.index()]);
            }
        }
        grid
    }

    /// Copy of the fleet registry, indexed in [`FLEET`] order.
    pub fn ships(&self) -> [Option<Ship>; NUM_SHIPS] {
        self.fleet
    }

    /// Copy of the placed ship of `ship_type`, if any.
    pub fn ship(&self, ship_type: ShipType) -> Option<Ship> {
        self.fleet[ship_type.index()]
    }

    pub fn ships_placed(&self) -> usize {
        self.fleet.iter().flatten().count()
    }

    /// `true` once every fleet type is on the board.
    pub fn is_fleet_complete(&self) -> bool {
        FLEET.iter().all(|t| self.fleet[t.index()].is_some())
    }

    pub fn missed_attacks(&self) -> Cells {
        self.missed
    }

    pub fn landed_attacks(&self) -> Cells {
        self.landed
    }

    /// Every cell fired upon, hit or miss.
    pub fn attacked(&self) -> Cells {
        self.missed | self.landed
    }

    /// Return to the freshly-created state.
    pub fn reset(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        self.fleet = [None; NUM_SHIPS];
        self.missed.clear();
        self.landed.clear();
    }

    /// Text rendering; `reveal` shows intact ship cells.
    pub fn view(&self, reveal: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("fleet", &self.fleet)
            .field("missed", &self.missed)
            .field("landed", &self.landed)
            .finish()
    }
}

/// Display adapter returned by [`Board::view`].
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        for r in 0..BOARD_SIZE {
            write!(f, "\n{:2} ", r + 1)?;
            for c in 0..BOARD_SIZE {
                let ch = if self.board.landed.contains(r, c).unwrap_or(false) {
                    'X'
                } else if self.board.missed.contains(r, c).unwrap_or(false) {
                    'o'
                } else if self.reveal && self.board.cells[r][c].is_some() {
                    'S'
                } else {
                    '.'
                };
                write!(f, " {}", ch)?;
            }
        }
        Ok(())
    }
}
