//! Ship types, orientations and the per-ship hit counter.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cells a ship of `length` covers when anchored at (`row`, `col`).
    ///
    /// Cells past the board edge are still yielded; callers check capacity
    /// before trusting them.
    pub fn cells(
        self,
        row: usize,
        col: usize,
        length: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        (0..length).map(move |i| match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Number of cells left between (`row`, `col`) and the board edge in
    /// this direction, the anchor included.
    pub fn space_from(self, row: usize, col: usize) -> usize {
        match self {
            Orientation::Horizontal => BOARD_SIZE.saturating_sub(col),
            Orientation::Vertical => BOARD_SIZE.saturating_sub(row),
        }
    }
}

impl FromStr for Orientation {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(BoardError::InvalidDirection)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// One of the five ship classes in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "carrier",
            ShipType::Battleship => "battleship",
            ShipType::Cruiser => "cruiser",
            ShipType::Submarine => "submarine",
            ShipType::Destroyer => "destroyer",
        }
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ShipType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::config::FLEET
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or(BoardError::InvalidShipType)
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed vessel and the number of times it has been struck.
///
/// Copies are independent: a `Ship` handed out by the board is a snapshot
/// and never aliases the board's own counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hit_count: usize,
}

impl Ship {
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            hit_count: 0,
        }
    }

    /// Build a ship from its name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, BoardError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Register one more strike.
    pub fn hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.length()
    }
}
