//! Common types for the battlefield: error taxonomy and shot outcomes.

use thiserror::Error;

use crate::coord::RowCol;

/// Outcome of firing at a single grid cell, before fleet bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotEffect {
    Miss,
    Hit,
}

/// Game-level classification of one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Shot landed in water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its name; other ships remain.
    Sunk(String),
    /// Shot sank the last ship of the fleet.
    Won(String),
}

impl Resolution {
    /// `true` once the resolution ends the game.
    pub fn is_won(&self) -> bool {
        matches!(self, Resolution::Won(_))
    }
}

/// Fatal configuration problems detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field-size must be in [2,26], given: {0}")]
    FieldSize(usize),
    #[error("ship length must be in [2,5], given: {0}")]
    ShipLength(usize),
    #[error("not enough ship names: {needed} ships requested, {given} names given")]
    NotEnoughNames { needed: usize, given: usize },
    #[error("at least one ship must be requested")]
    NoShips,
    #[error("too many ships requested")]
    TooManyShips,
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
    #[error("invalid configuration file: {0}")]
    Malformed(String),
}

/// A coordinate token that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty coordinate")]
    Empty,
    #[error("'{0}' is not a row letter")]
    InvalidRow(char),
    #[error("row '{0}' is outside the field")]
    RowOutOfRange(char),
    #[error("missing column number")]
    MissingColumn,
    #[error("'{0}' is not a column number")]
    InvalidColumn(String),
    #[error("column {0} is outside the field")]
    ColumnOutOfRange(String),
    #[error("expected two coordinates, got {0}")]
    ExpectedTwoTokens(usize),
}

/// Why a ship could not be placed between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("endpoints share neither row nor column")]
    Misaligned,
    #[error("endpoints span {span} cells, ship needs {length}")]
    LengthMismatch { span: usize, length: usize },
    #[error("ship would touch another ship")]
    TooClose,
}

/// A hit cell that no ship in the fleet claims. Placement makes this impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("internal consistency failure: hit at {0} belongs to no ship")]
pub struct ConsistencyError(pub RowCol);

/// Errors from driving a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    Finished,
    #[error("shot at {0} is outside the field")]
    InvalidShot(RowCol),
    #[error("no free spot left for {0}")]
    NoRoom(String),
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}
