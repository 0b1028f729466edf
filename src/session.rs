//! One player's side of the game: name, grid and fleet.

use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;

use crate::common::{ConfigError, ConsistencyError, GameError, PlacementError, Resolution};
use crate::config::{GameConfig, SymbolTable};
use crate::console::Console;
use crate::coord::{self, RowCol};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::render::render;
use crate::resolver;

pub const MSG_WRONG_COORDS: &str = "Error! Wrong coordinates given! Try again:";
pub const MSG_SHIP_LOCATION: &str = "Error! Wrong ship location! Try again:";
pub const MSG_SHIP_TOO_CLOSE: &str = "Error! You placed it too close to another one. Try again:";

#[derive(Debug, Clone)]
pub struct PlayerSession {
    name: String,
    grid: Grid,
    fleet: Fleet,
}

impl PlayerSession {
    /// Fresh session with an empty grid and an unplaced fleet.
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            grid: Grid::new(config.field_size)?,
            fleet: Fleet::from_config(config)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Returns `true` once every ship has been sunk.
    pub fn has_lost(&self) -> bool {
        self.fleet.is_empty()
    }

    /// Place the ship at `index` between two endpoints.
    pub fn place_ship(&mut self, index: usize, a: RowCol, b: RowCol) -> Result<(), PlacementError> {
        let ship = &mut self.fleet.ships_mut()[index];
        self.grid.try_place(ship, a, b)
    }

    /// Place every ship not placed yet at a random legal spot.
    pub fn place_randomly<G: Rng>(&mut self, rng: &mut G) -> Result<(), GameError> {
        for ship in self.fleet.ships_mut().iter_mut().filter(|s| !s.is_placed()) {
            let placement = self
                .grid
                .random_placement(rng, ship.length())
                .ok_or_else(|| GameError::NoRoom(ship.name().to_string()))?;
            ship.place(placement);
            self.grid.place_ship(ship);
        }
        Ok(())
    }

    /// Ask for a position for every ship, re-prompting until each one fits.
    /// An empty line places the ship at random.
    pub fn place_fleet<R: BufRead, W: Write, G: Rng>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
        symbols: &SymbolTable,
    ) -> anyhow::Result<()> {
        for index in 0..self.fleet.len() {
            let (name, length) = {
                let ship = &self.fleet.ships()[index];
                (ship.name().to_string(), ship.length())
            };
            loop {
                let line = console.prompt(format_args!(
                    "\nEnter the coordinates of the {} ({} cells):",
                    name, length
                ))?;
                if line.is_empty() {
                    let Some(placement) = self.grid.random_placement(rng, length) else {
                        console.say(MSG_SHIP_LOCATION)?;
                        continue;
                    };
                    let ship = &mut self.fleet.ships_mut()[index];
                    ship.place(placement);
                    self.grid.place_ship(ship);
                    break;
                }
                let (a, b) = match coord::parse_pair(&line, self.grid.size()) {
                    Ok(pair) => pair,
                    Err(e) => {
                        debug!("bad placement input {:?}: {}", line, e);
                        console.say(MSG_WRONG_COORDS)?;
                        continue;
                    }
                };
                match self.place_ship(index, a, b) {
                    Ok(()) => break,
                    Err(e) => console.say(placement_message(&e, &name))?,
                }
            }
            console.say(render(&self.grid, symbols, true))?;
        }
        Ok(())
    }

    /// Resolve an opponent's shot against this session.
    pub fn receive_shot(&mut self, at: RowCol) -> Result<Resolution, ConsistencyError> {
        resolver::resolve(&mut self.grid, &mut self.fleet, at)
    }
}

/// User-facing text for a rejected placement.
pub fn placement_message(error: &PlacementError, ship_name: &str) -> String {
    match error {
        PlacementError::Misaligned => MSG_SHIP_LOCATION.to_string(),
        PlacementError::LengthMismatch { .. } => {
            format!("Error! Wrong length of the {}! Try again:", ship_name)
        }
        PlacementError::TooClose => MSG_SHIP_TOO_CLOSE.to_string(),
    }
}
