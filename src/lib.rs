mod cell;
mod common;
mod config;
mod console;
pub mod coord;
mod fleet;
mod game;
mod grid;
mod logging;
mod render;
pub mod resolver;
mod session;
mod ship;

pub use cell::Cell;
pub use common::*;
pub use config::*;
pub use console::Console;
pub use coord::RowCol;
pub use fleet::Fleet;
pub use game::*;
pub use grid::*;
pub use logging::{init_logging, is_game_target, level_from, short_target, LOG_ENV};
pub use render::render;
pub use resolver::resolve;
pub use session::*;
pub use ship::*;
