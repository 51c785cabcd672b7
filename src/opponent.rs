//! The computer-controlled side: randomized fleet placement with bounded
//! retries, and random targeting that never repeats a cell.

use core::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{BoardError, Shot};
use crate::config::{PlacementLimits, BOARD_SIZE, FLEET};
use crate::player::Player;
use crate::ship::{Orientation, ShipType};

/// How the opponent lays out its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMethod {
    /// Guess-and-check over uniformly random anchors and orientations.
    #[default]
    Random,
}

impl FromStr for PlacementMethod {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") || s.eq_ignore_ascii_case("randomly") {
            Ok(PlacementMethod::Random)
        } else {
            Err(BoardError::InvalidPlacementMethod)
        }
    }
}

/// Wraps a [`Player`] and drives it with the random source `R`.
#[derive(Debug)]
pub struct AutonomousOpponent<R = SmallRng> {
    player: Player,
    rng: R,
    limits: PlacementLimits,
}

#[cfg(feature = "std")]
impl AutonomousOpponent<SmallRng> {
    /// Opponent seeded from the thread-local generator.
    pub fn new(player: Player) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(player, SmallRng::from_rng(&mut seed_rng))
    }
}

impl AutonomousOpponent<SmallRng> {
    /// Opponent with a fixed seed; the same seed replays the same game.
    pub fn seeded(player: Player, seed: u64) -> Self {
        Self::with_rng(player, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AutonomousOpponent<R> {
    pub fn with_rng(player: Player, rng: R) -> Self {
        Self {
            player,
            rng,
            limits: PlacementLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: PlacementLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> PlacementLimits {
        self.limits
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Lay out the whole fleet with [`PlacementMethod::Random`].
    pub fn place_fleet(&mut self) -> Result<(), BoardError> {
        self.place_fleet_with(PlacementMethod::Random)
    }

    /// Lay out the whole fleet.
    ///
    /// Each attempt starts from an empty board and places every ship in
    /// [`FLEET`] order; one ship running out of draws discards the attempt.
    /// After `max_fleet_attempts` failures the board is left empty and
    /// [`BoardError::FleetPlacementFailed`] is returned.
    pub fn place_fleet_with(&mut self, method: PlacementMethod) -> Result<(), BoardError> {
        let PlacementMethod::Random = method;
        let attempts = self.limits.max_fleet_attempts;
        for attempt in 1..=attempts {
            self.player.reset();
            let mut complete = true;
            for ship_type in FLEET {
                if !self.place_one_ship(ship_type)? {
                    log::debug!(
                        "fleet attempt {}/{}: no room found for {}",
                        attempt,
                        attempts,
                        ship_type
                    );
                    complete = false;
                    break;
                }
            }
            if complete {
                log::debug!("fleet placed on attempt {}", attempt);
                return Ok(());
            }
        }
        self.player.reset();
        Err(BoardError::FleetPlacementFailed { attempts })
    }

    /// Try random anchors for one ship; `Ok(false)` once the draws run out.
    pub fn place_one_ship(&mut self, ship_type: ShipType) -> Result<bool, BoardError> {
        for _ in 0..self.limits.max_ship_attempts {
            let row = self.rng.random_range(0..BOARD_SIZE);
            let col = self.rng.random_range(0..BOARD_SIZE);
            let orientation = if self.rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.player.place_ship(row, col, ship_type, orientation)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Fire at a uniformly random cell of `target` not yet attacked.
    pub fn attack(&mut self, target: &mut Player) -> Result<Shot, BoardError> {
        let (row, col) = self.pick_target(target.board())?;
        let outcome = self.player.attack(target, row, col)?;
        Ok(Shot { row, col, outcome })
    }

    fn pick_target(&mut self, board: &Board) -> Result<(usize, usize), BoardError> {
        let open = !board.attacked();
        if open.is_empty() {
            return Err(BoardError::NoTargetsRemaining);
        }
        let pick = self.rng.random_range(0..open.len());
        open.iter().nth(pick).ok_or(BoardError::NoTargetsRemaining)
    }
}
