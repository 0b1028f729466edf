//! Game configuration: field size, fleet composition and cell symbols.
//!
//! A [`GameConfig`] is built once at startup, either from defaults or from a
//! TOML file with the same kebab-case keys, and is then passed by reference
//! to whatever needs it.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::cell::Cell;
use crate::common::ConfigError;
use crate::grid::{MAX_FIELD_SIZE, MIN_FIELD_SIZE};
use crate::ship::{MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};

pub const DEFAULT_FIELD_SIZE: usize = 10;
/// Every key a configuration file may set.
pub const CONFIG_KEYS: [&str; 10] = [
    "field-size",
    "five-cell-ships",
    "four-cell-ships",
    "three-cell-ships",
    "two-cell-ships",
    "ship-names",
    "water-symbol",
    "own-ship-symbol",
    "hit-symbol",
    "miss-symbol",
];

pub const DEFAULT_SHIP_NAMES: [&str; 5] = [
    "Aircraft Carrier",
    "Battleship",
    "Submarine",
    "Cruiser",
    "Destroyer",
];

/// Number of ships requested per length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShipCounts {
    pub five_cell_ships: usize,
    pub four_cell_ships: usize,
    pub three_cell_ships: usize,
    pub two_cell_ships: usize,
}

impl ShipCounts {
    /// Ships requested for `length`; zero outside 2..=5.
    pub fn count_for(&self, length: usize) -> usize {
        match length {
            5 => self.five_cell_ships,
            4 => self.four_cell_ships,
            3 => self.three_cell_ships,
            2 => self.two_cell_ships,
            _ => 0,
        }
    }

    /// Ships requested over all lengths; `None` if the sum overflows.
    pub fn total(&self) -> Option<usize> {
        (MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH)
            .try_fold(0usize, |sum, len| sum.checked_add(self.count_for(len)))
    }
}

impl Default for ShipCounts {
    fn default() -> Self {
        Self {
            five_cell_ships: 1,
            four_cell_ships: 1,
            three_cell_ships: 2,
            two_cell_ships: 1,
        }
    }
}

/// Display symbols per cell state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SymbolTable {
    pub water_symbol: String,
    pub own_ship_symbol: String,
    pub hit_symbol: String,
    pub miss_symbol: String,
}

impl SymbolTable {
    pub fn symbol(&self, cell: Cell) -> &str {
        match cell {
            Cell::Water => &self.water_symbol,
            Cell::Ship => &self.own_ship_symbol,
            Cell::Hit => &self.hit_symbol,
            Cell::Miss => &self.miss_symbol,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            water_symbol: "~".into(),
            own_ship_symbol: "O".into(),
            hit_symbol: "X".into(),
            miss_symbol: "M".into(),
        }
    }
}

/// Immutable game settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GameConfig {
    pub field_size: usize,
    #[serde(flatten)]
    pub ships: ShipCounts,
    /// Consumed from the largest ship to the smallest.
    pub ship_names: Vec<String>,
    #[serde(flatten)]
    pub symbols: SymbolTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            ships: ShipCounts::default(),
            ship_names: DEFAULT_SHIP_NAMES.iter().map(|s| s.to_string()).collect(),
            symbols: SymbolTable::default(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; missing keys keep their defaults, unknown keys
    /// are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| ConfigError::Malformed(e.to_string()))?;
        // flattened fields swallow typos, so check keys before deserializing
        if let Some(key) = table.keys().find(|k| !CONFIG_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownKey(key.clone()));
        }
        let config: GameConfig = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Malformed(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Fail fast on values the game cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.field_size) {
            return Err(ConfigError::FieldSize(self.field_size));
        }
        let needed = self.ships.total().ok_or(ConfigError::TooManyShips)?;
        if needed == 0 {
            return Err(ConfigError::NoShips);
        }
        if needed > self.ship_names.len() {
            return Err(ConfigError::NotEnoughNames {
                needed,
                given: self.ship_names.len(),
            });
        }
        Ok(())
    }

    /// `(name, length)` for every requested ship, largest ships first.
    pub fn roster(&self) -> Result<Vec<(String, usize)>, ConfigError> {
        self.validate()?;
        let mut names = self.ship_names.iter();
        let mut roster = Vec::with_capacity(self.ship_names.len());
        for length in (MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).rev() {
            for _ in 0..self.ships.count_for(length) {
                // validate() guarantees enough names
                if let Some(name) = names.next() {
                    roster.push((name.trim().to_string(), length));
                }
            }
        }
        if names.next().is_some() {
            warn!("more ship names configured than ships requested; extra names ignored");
        }
        Ok(roster)
    }
}
