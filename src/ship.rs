//! Ship definitions, positioning and per-cell hit tracking.

use core::fmt;

use crate::common::ConfigError;
use crate::coord::RowCol;

pub const MIN_SHIP_LENGTH: usize = 2;
pub const MAX_SHIP_LENGTH: usize = 5;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells share one row, columns increase.
    Row,
    /// Cells share one column, rows increase.
    Column,
}

/// Where a ship goes: smallest occupied cell, direction and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: RowCol,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    /// Occupied cells, ordered along the ship from the anchor.
    pub fn cells(&self) -> impl Iterator<Item = RowCol> {
        let Placement {
            anchor,
            orientation,
            length,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Row => RowCol::new(anchor.row, anchor.col + i),
            Orientation::Column => RowCol::new(anchor.row + i, anchor.col),
        })
    }

    /// Index of `at` along the ship, if the ship covers it.
    fn index_of(&self, at: RowCol) -> Option<usize> {
        let (fixed, along, start) = match self.orientation {
            Orientation::Row => (at.row == self.anchor.row, at.col, self.anchor.col),
            Orientation::Column => (at.col == self.anchor.col, at.row, self.anchor.row),
        };
        if fixed && along >= start && along - start < self.length {
            Some(along - start)
        } else {
            None
        }
    }
}

/// A named vessel. Unplaced until [`Ship::place`] gives it a position.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    length: usize,
    placement: Option<Placement>,
    hits: u8,
}

impl Ship {
    /// Create an unplaced ship. Lengths outside 2..=5 are a configuration error.
    pub fn new(name: impl Into<String>, length: usize) -> Result<Self, ConfigError> {
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(ConfigError::ShipLength(length));
        }
        Ok(Ship {
            name: name.into(),
            length,
            placement: None,
            hits: 0,
        })
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Position the ship. The placement must have been checked against the grid.
    pub fn place(&mut self, placement: Placement) {
        debug_assert_eq!(placement.length, self.length);
        self.placement = Some(placement);
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Occupied cells; empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = RowCol> {
        self.placement.into_iter().flat_map(|p| p.cells())
    }

    /// `true` if the ship covers (`row`, `col`).
    pub fn contains(&self, at: RowCol) -> bool {
        self.placement.and_then(|p| p.index_of(at)).is_some()
    }

    /// Register a hit at (`row`, `col`).
    /// Returns `true` if the ship covers that cell; repeated hits are no-ops.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        match self.placement.and_then(|p| p.index_of(RowCol::new(row, col))) {
            Some(i) => {
                self.hits |= 1 << i;
                true
            }
            None => false,
        }
    }

    /// Cells not hit yet.
    pub fn remaining_cells(&self) -> usize {
        self.length - self.hits.count_ones() as usize
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_cells() == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, placement: {:?}, hits: {:0width$b} }}",
            self.name,
            self.length,
            self.placement,
            self.hits,
            width = self.length,
        )
    }
}
