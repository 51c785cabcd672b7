use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet every side must place, in placement order.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::Carrier,
    ShipType::Battleship,
    ShipType::Cruiser,
    ShipType::Submarine,
    ShipType::Destroyer,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Whole-fleet attempts made by the autonomous opponent before giving up.
pub const MAX_FLEET_ATTEMPTS: usize = 50;

/// Random draws spent on a single ship before the fleet attempt is discarded.
pub const MAX_SHIP_ATTEMPTS: usize = 100;

/// Attack used for the human side when no input source is supplied.
pub const DEFAULT_ATTACK: (usize, usize) = (0, 0);

/// Retry bounds for randomized fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementLimits {
    pub max_fleet_attempts: usize,
    pub max_ship_attempts: usize,
}

impl Default for PlacementLimits {
    fn default() -> Self {
        Self {
            max_fleet_attempts: MAX_FLEET_ATTEMPTS,
            max_ship_attempts: MAX_SHIP_ATTEMPTS,
        }
    }
}
