//! Turns a shot into a game-level [`Resolution`].

use log::debug;

use crate::cell::Cell;
use crate::common::{ConsistencyError, Resolution, ShotEffect};
use crate::coord::RowCol;
use crate::fleet::Fleet;
use crate::grid::Grid;

/// Resolve a shot at `at` against one player's grid and fleet.
///
/// A miss leaves the fleet alone. A fresh hit is credited to the ship that
/// covers the cell; a ship with no cells left is removed, and removing the
/// last one wins the game. Shooting an already hit cell reports `Hit` again
/// without touching the fleet, since its ship may be gone already.
pub fn resolve(
    grid: &mut Grid,
    fleet: &mut Fleet,
    at: RowCol,
) -> Result<Resolution, ConsistencyError> {
    let repeat = grid.cell(at) == Cell::Hit;
    match grid.apply_shot(at) {
        ShotEffect::Miss => {
            debug!("shot at {} missed", at);
            return Ok(Resolution::Miss);
        }
        ShotEffect::Hit if repeat => {
            debug!("shot at {} repeats an earlier hit", at);
            return Ok(Resolution::Hit);
        }
        ShotEffect::Hit => {}
    }

    let index = fleet.position_of(at).ok_or(ConsistencyError(at))?;
    let ship = fleet.get_mut(index).ok_or(ConsistencyError(at))?;
    ship.register_hit(at.row, at.col);
    if ship.remaining_cells() > 0 {
        debug!("shot at {} hit {}", at, ship.name());
        return Ok(Resolution::Hit);
    }

    let sunk = fleet.remove(index);
    debug!("shot at {} sank {}, {} ships left", at, sunk.name(), fleet.len());
    if fleet.is_empty() {
        Ok(Resolution::Won(sunk.name().to_string()))
    } else {
        Ok(Resolution::Sunk(sunk.name().to_string()))
    }
}
