#![cfg(feature = "std")]

//! Seams between the controller and whatever collects human input or shows
//! results: ship layouts, attack coordinates, and outcome notifications.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

use crate::common::{BoardError, Coordinate, Shot, Side};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::ship::{Orientation, ShipType};

/// One requested ship placement, as supplied by the human side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipPosition {
    pub row: usize,
    pub col: usize,
    pub ship_name: String,
    pub direction: String,
}

impl ShipPosition {
    pub fn new(row: usize, col: usize, ship_type: ShipType, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            ship_name: ship_type.name().to_string(),
            direction: orientation.to_string(),
        }
    }

    /// Parse the name and direction fields.
    pub fn parse(&self) -> Result<(ShipType, Orientation), BoardError> {
        Ok((self.ship_name.parse()?, self.direction.parse()?))
    }
}

/// Decode a JSON array of ship positions.
pub fn ship_positions_from_json(json: &str) -> anyhow::Result<Vec<ShipPosition>> {
    serde_json::from_str(json).context("malformed ship position records")
}

/// A known-good human layout.
pub fn default_ship_positions() -> Vec<ShipPosition> {
    vec![
        ShipPosition::new(0, 0, ShipType::Carrier, Orientation::Horizontal),
        ShipPosition::new(2, 0, ShipType::Battleship, Orientation::Vertical),
        ShipPosition::new(5, 2, ShipType::Cruiser, Orientation::Horizontal),
        ShipPosition::new(7, 5, ShipType::Submarine, Orientation::Vertical),
        ShipPosition::new(9, 7, ShipType::Destroyer, Orientation::Horizontal),
    ]
}

/// Source of the human side's decisions.
///
/// Both calls may suspend until the input is available.
#[async_trait::async_trait]
pub trait HumanInput: Send {
    /// Resolves once at least [`NUM_SHIPS`] positions are available.
    async fn ship_positions(&mut self) -> anyhow::Result<Vec<ShipPosition>>;

    /// Resolves with the next cell to fire at.
    async fn attack_position(&mut self) -> anyhow::Result<Coordinate>;
}

/// Receives every shot and the final result.
pub trait Presenter {
    /// Called after each shot; `side` owns the board that was fired upon.
    fn cell_outcome(&mut self, side: Side, shot: Shot);

    /// Called exactly once when the match is decided.
    fn announce_winner(&mut self, winner: Side);
}

/// [`Presenter`] that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn cell_outcome(&mut self, side: Side, shot: Shot) {
        log::info!(
            "shot at {} board ({}, {}): {:?}",
            side,
            shot.row,
            shot.col,
            shot.outcome
        );
    }

    fn announce_winner(&mut self, winner: Side) {
        log::info!("winner: {}", winner);
    }
}

/// Fixed ship layout plus a queue of attacks.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    positions: Vec<ShipPosition>,
    attacks: VecDeque<Coordinate>,
}

impl ScriptedInput {
    pub fn new<I>(positions: Vec<ShipPosition>, attacks: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Self {
            positions,
            attacks: attacks.into_iter().collect(),
        }
    }

    /// Fires at every cell in row-major order.
    pub fn sweep(positions: Vec<ShipPosition>) -> Self {
        let cells = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)));
        Self::new(positions, cells)
    }

    pub fn remaining_attacks(&self) -> usize {
        self.attacks.len()
    }
}

#[async_trait::async_trait]
impl HumanInput for ScriptedInput {
    async fn ship_positions(&mut self) -> anyhow::Result<Vec<ShipPosition>> {
        Ok(self.positions.clone())
    }

    async fn attack_position(&mut self) -> anyhow::Result<Coordinate> {
        self.attacks
            .pop_front()
            .ok_or_else(|| anyhow!("scripted input has no attacks left"))
    }
}

/// Producer half of a [`ChannelInput`], held by the UI.
#[derive(Debug, Clone)]
pub struct InputHandle {
    ships: watch::Sender<Vec<ShipPosition>>,
    attacks: mpsc::UnboundedSender<Coordinate>,
}

impl InputHandle {
    /// Record one more ship position.
    pub fn record_ship(&self, position: ShipPosition) {
        self.ships.send_modify(|positions| positions.push(position));
    }

    /// Forget recorded positions, e.g. before a new match.
    pub fn clear_ships(&self) {
        self.ships.send_modify(Vec::clear);
    }

    /// Submit an attack coordinate.
    pub fn record_attack(&self, coordinate: Coordinate) -> anyhow::Result<()> {
        self.attacks
            .send(coordinate)
            .map_err(|_| anyhow!("match is no longer accepting attacks"))
    }
}

/// [`HumanInput`] fed through channels.
///
/// Waiting suspends the task until the handle delivers, bounded by an
/// optional timeout.
#[derive(Debug)]
pub struct ChannelInput {
    ships: watch::Receiver<Vec<ShipPosition>>,
    attacks: mpsc::UnboundedReceiver<Coordinate>,
    timeout: Option<Duration>,
}

impl ChannelInput {
    pub fn new() -> (Self, InputHandle) {
        let (ships_tx, ships_rx) = watch::channel(Vec::new());
        let (attacks_tx, attacks_rx) = mpsc::unbounded_channel();
        (
            Self {
                ships: ships_rx,
                attacks: attacks_rx,
                timeout: None,
            },
            InputHandle {
                ships: ships_tx,
                attacks: attacks_tx,
            },
        )
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

async fn bounded<F, T>(timeout: Option<Duration>, what: &str, fut: F) -> anyhow::Result<T>
where
    F: std::future::Future<Output = anyhow::Result<T>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| anyhow!("timed out after {:?} waiting for {}", limit, what))?,
        None => fut.await,
    }
}

#[async_trait::async_trait]
impl HumanInput for ChannelInput {
    async fn ship_positions(&mut self) -> anyhow::Result<Vec<ShipPosition>> {
        let ships = &mut self.ships;
        let wait = async move {
            let positions = ships
                .wait_for(|positions| positions.len() >= NUM_SHIPS)
                .await
                .map_err(|_| anyhow!("input closed before the fleet was placed"))?;
            Ok::<_, anyhow::Error>(positions.clone())
        };
        bounded(self.timeout, "ship positions", wait).await
    }

    async fn attack_position(&mut self) -> anyhow::Result<Coordinate> {
        let attacks = &mut self.attacks;
        let wait = async move {
            attacks
                .recv()
                .await
                .ok_or_else(|| anyhow!("input closed while waiting for an attack"))
        };
        bounded(self.timeout, "an attack", wait).await
    }
}
