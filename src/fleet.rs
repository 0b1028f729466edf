//! A player's ships, in configuration order. Sunk ships are removed.

use crate::common::ConfigError;
use crate::config::GameConfig;
use crate::coord::RowCol;
use crate::ship::Ship;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new(ships: Vec<Ship>) -> Self {
        Self { ships }
    }

    /// Build the unplaced fleet described by `config`, largest ships first.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let ships = config
            .roster()?
            .into_iter()
            .map(|(name, length)| Ship::new(name, length))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ships })
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns `true` when every ship has been sunk.
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Index of the ship covering `at`.
    pub fn position_of(&self, at: RowCol) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(at))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// Take a ship out of the fleet, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Ship {
        self.ships.remove(index)
    }
}
