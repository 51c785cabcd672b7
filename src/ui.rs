#![cfg(feature = "std")]

//! Plain-text terminal front end: coordinate parsing and a stdout presenter.

use crate::board::Board;
use crate::common::{AttackOutcome, Coordinate, Shot, Side};
use crate::config::BOARD_SIZE;
use crate::input::Presenter;

/// Format (row, col) as e.g. `B7`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse a coordinate such as `B7` or `j10` into zero-based (row, col).
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid row '{}' - must be a number 1-10", row_str));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(Coordinate::new(row - 1, col))
}

/// Print both boards side by side in sequence: own fleet revealed, the
/// opponent's hidden.
pub fn print_boards(own: &Board, opponent: &Board) {
    println!("\nYour fleet:");
    println!("{}", own.view(true));
    println!("\nOpponent waters:");
    println!("{}", opponent.view(false));
    println!("Legend: S=Ship  X=Hit  o=Miss  .=Water");
}

/// [`Presenter`] writing one line per shot to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn cell_outcome(&mut self, side: Side, shot: Shot) {
        let who = match side {
            Side::Opponent => "You fire",
            Side::Human => "Opponent fires",
        };
        let what = match shot.outcome {
            AttackOutcome::Hit => "hit!".to_string(),
            AttackOutcome::Sunk(ship) => format!("hit and sunk the {}!", ship),
            AttackOutcome::Miss => "miss.".to_string(),
            AttackOutcome::AlreadyAttacked => "already fired there, shot wasted.".to_string(),
        };
        println!("{} at {}: {}", who, coord_to_string(shot.row, shot.col), what);
    }

    fn announce_winner(&mut self, winner: Side) {
        match winner {
            Side::Human => println!("\nAll enemy ships destroyed. You win!"),
            Side::Opponent => println!("\nYour fleet has been sunk. The opponent wins."),
        }
    }
}
