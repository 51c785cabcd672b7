#![cfg(feature = "std")]

//! Match orchestration: fleet setup, strict ping-pong turns, and game-over
//! detection between the human side and the autonomous opponent.

use anyhow::{anyhow, bail, Context};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Coordinate, Shot, Side};
use crate::config::DEFAULT_ATTACK;
use crate::input::{HumanInput, Presenter, ShipPosition};
use crate::opponent::{AutonomousOpponent, PlacementMethod};
use crate::player::Player;

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    AwaitingSetup,
    InProgress,
    Finished,
}

/// Runs one match at a time; [`MatchController::reset`] prepares a replay.
#[derive(Debug)]
pub struct MatchController<R = SmallRng> {
    human: Player,
    opponent: AutonomousOpponent<R>,
    placement: PlacementMethod,
    current_turn: Side,
    phase: MatchPhase,
    winner: Option<Side>,
    rounds: usize,
}

impl<R: Rng> MatchController<R> {
    pub fn new(human: Player, opponent: AutonomousOpponent<R>) -> Self {
        Self {
            human,
            opponent,
            placement: PlacementMethod::default(),
            current_turn: Side::Human,
            phase: MatchPhase::AwaitingSetup,
            winner: None,
            rounds: 0,
        }
    }

    /// How the opponent lays out its fleet during setup.
    pub fn with_placement(mut self, placement: PlacementMethod) -> Self {
        self.placement = placement;
        self
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn opponent(&self) -> &AutonomousOpponent<R> {
        &self.opponent
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Completed rounds (a round may end after the human's shot).
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Back to `AwaitingSetup` with both boards empty.
    pub fn reset(&mut self) {
        self.current_turn = Side::Human;
        self.phase = MatchPhase::AwaitingSetup;
        self.winner = None;
        self.rounds = 0;
        self.human.reset();
        self.opponent.player_mut().reset();
    }

    /// Reset, collect the human fleet, then let the opponent place its own.
    ///
    /// On any failure both boards are cleared and the match stays in
    /// `AwaitingSetup`; a partial fleet never reaches play.
    pub async fn setup_game(&mut self, input: &mut dyn HumanInput) -> anyhow::Result<()> {
        self.reset();
        let positions = input.ship_positions().await?;
        if let Err(err) = self.place_fleets(&positions) {
            self.reset();
            return Err(err);
        }
        self.phase = MatchPhase::InProgress;
        log::info!("match setup complete, human fires first");
        Ok(())
    }

    fn place_fleets(&mut self, positions: &[ShipPosition]) -> anyhow::Result<()> {
        self.place_human_fleet(positions)?;
        self.opponent
            .place_fleet_with(self.placement)
            .context("opponent could not place its fleet")?;
        Ok(())
    }

    fn place_human_fleet(&mut self, positions: &[ShipPosition]) -> anyhow::Result<()> {
        for position in positions {
            let (ship_type, orientation) = position
                .parse()
                .with_context(|| format!("invalid ship position {:?}", position))?;
            let placed = self
                .human
                .place_ship(position.row, position.col, ship_type, orientation)
                .with_context(|| format!("invalid ship position {:?}", position))?;
            if !placed {
                bail!(
                    "{} does not fit at ({}, {}) {}",
                    ship_type,
                    position.row,
                    position.col,
                    orientation
                );
            }
        }
        if !self.human.board().is_fleet_complete() {
            bail!(
                "human fleet incomplete: {} of {} ships placed",
                self.human.board().ships_placed(),
                crate::config::NUM_SHIPS
            );
        }
        Ok(())
    }

    /// Re-evaluate both fleets and record the winner if one is sunk.
    pub fn is_game_over(&mut self) -> bool {
        if self.phase == MatchPhase::Finished {
            return true;
        }
        let opponent_sunk = self.opponent.player().fleet_sunk();
        let human_sunk = self.human.fleet_sunk();
        if opponent_sunk {
            self.winner = Some(Side::Human);
        } else if human_sunk {
            self.winner = Some(Side::Opponent);
        }
        if self.winner.is_some() {
            self.phase = MatchPhase::Finished;
            log::info!("match finished after {} rounds", self.rounds);
        }
        self.is_finished()
    }

    /// One human shot followed, unless that ended the match, by one opponent
    /// shot. Without `input` the human fires at [`DEFAULT_ATTACK`].
    pub async fn play_round(
        &mut self,
        input: Option<&mut dyn HumanInput>,
        presenter: &mut dyn Presenter,
    ) -> anyhow::Result<()> {
        match self.phase {
            MatchPhase::AwaitingSetup => bail!("match has not been set up"),
            MatchPhase::Finished => return Ok(()),
            MatchPhase::InProgress => {}
        }
        if self.is_game_over() {
            return Ok(());
        }

        let target = match input {
            Some(input) => input.attack_position().await?,
            None => Coordinate::from(DEFAULT_ATTACK),
        };
        self.take_turn(target, presenter)?;
        if !self.is_game_over() {
            self.take_turn(target, presenter)?;
            self.is_game_over();
        }
        self.rounds += 1;
        Ok(())
    }

    /// Fire one shot for the side whose turn it is, then hand over the turn.
    /// `target` is used only on the human's turn.
    fn take_turn(
        &mut self,
        target: Coordinate,
        presenter: &mut dyn Presenter,
    ) -> anyhow::Result<()> {
        log::trace!(
            "opponent board before {} turn:\n{}",
            self.current_turn,
            self.opponent.player().board().view(true)
        );
        let shot = match self.current_turn {
            Side::Human => {
                let outcome = self
                    .human
                    .attack(self.opponent.player_mut(), target.row, target.col)?;
                Shot {
                    row: target.row,
                    col: target.col,
                    outcome,
                }
            }
            Side::Opponent => self.opponent.attack(&mut self.human)?,
        };
        let fired_upon = self.current_turn.other();
        log::debug!(
            "{} fired at ({}, {}): {:?}",
            self.current_turn,
            shot.row,
            shot.col,
            shot.outcome
        );
        presenter.cell_outcome(fired_upon, shot);
        self.current_turn = fired_upon;
        Ok(())
    }

    /// Set up, play rounds until a fleet is sunk, announce and return the
    /// winner.
    pub async fn play_match(
        &mut self,
        input: &mut dyn HumanInput,
        presenter: &mut dyn Presenter,
    ) -> anyhow::Result<Side> {
        self.setup_game(&mut *input).await?;
        while !self.is_finished() {
            self.play_round(Some(&mut *input), &mut *presenter).await?;
        }
        let winner = self
            .winner
            .ok_or_else(|| anyhow!("match finished without a winner"))?;
        presenter.announce_winner(winner);
        Ok(winner)
    }
}
