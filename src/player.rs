use crate::board::Board;
use crate::common::{AttackOutcome, BoardError};
use crate::ship::{Orientation, ShipType};

/// One side of the match: owns a board and forwards actions to it.
#[derive(Debug, Clone, Default)]
pub struct Player {
    board: Board,
}

impl Player {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// Read-only view of this player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fire at (row, col) on `opponent`'s board.
    pub fn attack(
        &self,
        opponent: &mut Player,
        row: usize,
        col: usize,
    ) -> Result<AttackOutcome, BoardError> {
        opponent.board.receive_attack(row, col)
    }

    /// Place a ship on this player's board; see [`Board::place_ship`].
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        ship_type: ShipType,
        orientation: Orientation,
    ) -> Result<bool, BoardError> {
        self.board.place_ship(row, col, ship_type, orientation)
    }

    /// `true` once every ship on this player's board is sunk.
    pub fn fleet_sunk(&self) -> bool {
        self.board.report_ship_status()
    }

    pub fn reset(&mut self) {
        self.board.reset();
    }
}
