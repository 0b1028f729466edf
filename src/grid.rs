//! The battlefield grid: cell matrix, placement rules and shot application.

use log::debug;
use rand::Rng;

use crate::cell::Cell;
use crate::common::{ConfigError, PlacementError, ShotEffect};
use crate::coord::RowCol;
use crate::ship::{Orientation, Placement, Ship};

pub const MIN_FIELD_SIZE: usize = 2;
pub const MAX_FIELD_SIZE: usize = 26;

const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// Square matrix of cells owned by one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an all-water grid. Sizes outside 2..=26 are rejected.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&size) {
            return Err(ConfigError::FieldSize(size));
        }
        Ok(Grid {
            size,
            cells: vec![vec![Cell::Water; size]; size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the cell at `at`. Coordinates come from the codec and are in range.
    pub fn cell(&self, at: RowCol) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Full cell matrix, row by row.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Decide whether a ship of `length` fits between endpoints `a` and `b`.
    ///
    /// Checks alignment, then length, then that the ship and its one-cell
    /// border hold nothing but water. Never mutates the grid.
    pub fn check_placement(
        &self,
        a: RowCol,
        b: RowCol,
        length: usize,
    ) -> Result<Placement, PlacementError> {
        let (orientation, anchor, span) = if a.row == b.row {
            (
                Orientation::Row,
                RowCol::new(a.row, a.col.min(b.col)),
                a.col.abs_diff(b.col) + 1,
            )
        } else if a.col == b.col {
            (
                Orientation::Column,
                RowCol::new(a.row.min(b.row), a.col),
                a.row.abs_diff(b.row) + 1,
            )
        } else {
            return Err(PlacementError::Misaligned);
        };
        if span != length {
            return Err(PlacementError::LengthMismatch { span, length });
        }
        let placement = Placement {
            anchor,
            orientation,
            length,
        };
        if !self.border_is_water(&placement) {
            return Err(PlacementError::TooClose);
        }
        Ok(placement)
    }

    /// Boolean form of [`Grid::check_placement`].
    pub fn can_place(&self, a: RowCol, b: RowCol, length: usize) -> bool {
        self.check_placement(a, b, length).is_ok()
    }

    /// Write `Ship` cells for an already positioned ship.
    pub fn place_ship(&mut self, ship: &Ship) {
        for at in ship.cells() {
            self.cells[at.row][at.col] = Cell::Ship;
        }
    }

    /// Check, position and write `ship` in one step.
    /// Grid and ship are left unchanged when the placement is rejected.
    pub fn try_place(&mut self, ship: &mut Ship, a: RowCol, b: RowCol) -> Result<(), PlacementError> {
        let placement = self
            .check_placement(a, b, ship.length())
            .inspect_err(|e| debug!("rejected {} at {} {}: {}", ship.name(), a, b, e))?;
        ship.place(placement);
        self.place_ship(ship);
        Ok(())
    }

    /// Fire at a cell. Water becomes a miss, a ship cell becomes a hit.
    /// Repeated shots keep the cell as it is and report the same effect.
    pub fn apply_shot(&mut self, at: RowCol) -> ShotEffect {
        let cell = &mut self.cells[at.row][at.col];
        match *cell {
            Cell::Water | Cell::Miss => {
                *cell = Cell::Miss;
                ShotEffect::Miss
            }
            Cell::Ship | Cell::Hit => {
                *cell = Cell::Hit;
                ShotEffect::Hit
            }
        }
    }

    /// Returns a random legal placement for a ship of `length`, if one is found.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, length: usize) -> Option<Placement> {
        if length == 0 || length > self.size {
            return None;
        }
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let a = RowCol::new(rng.random_range(0..self.size), rng.random_range(0..self.size));
            let b = if rng.random() {
                RowCol::new(a.row, a.col + length - 1)
            } else {
                RowCol::new(a.row + length - 1, a.col)
            };
            if b.row >= self.size || b.col >= self.size {
                continue;
            }
            if let Ok(placement) = self.check_placement(a, b, length) {
                return Some(placement);
            }
        }
        None
    }

    fn border_is_water(&self, placement: &Placement) -> bool {
        let RowCol { row, col } = placement.anchor;
        let (last_row, last_col) = match placement.orientation {
            Orientation::Row => (row, col + placement.length - 1),
            Orientation::Column => (row + placement.length - 1, col),
        };
        let mut rows = row.saturating_sub(1)..=(last_row + 1).min(self.size - 1);
        let cols = col.saturating_sub(1)..=(last_col + 1).min(self.size - 1);
        rows.all(|r| cols.clone().all(|c| self.cells[r][c] == Cell::Water))
    }
}
