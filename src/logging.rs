//! Stderr logger for the game binaries.
//!
//! stdout carries the boards and prompts, so diagnostics go to stderr and only
//! records from this crate are shown. `BATTLESHIP_LOG` picks the level.

use std::env;

use log::{self, LevelFilter, Metadata, Record};

pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && is_game_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), short_target(record.target()), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// `true` for records emitted by the game library or its binaries.
pub fn is_game_target(target: &str) -> bool {
    target == "battleship_hotseat"
        || target.starts_with("battleship_hotseat::")
        || target == "sim"
        || target.starts_with("sim::")
}

/// Module path without the crate prefix, e.g. `resolver` for
/// `battleship_hotseat::resolver`.
pub fn short_target(target: &str) -> &str {
    target
        .strip_prefix("battleship_hotseat::")
        .unwrap_or(target)
}

/// Parse a `BATTLESHIP_LOG` value; unknown values fall back to `default`.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.trim().parse().ok()).unwrap_or(default)
}

/// Install the logger with the level from `BATTLESHIP_LOG`, or `default`.
pub fn init_logging(default: LevelFilter) {
    let level = level_from(env::var(LOG_ENV).ok().as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
