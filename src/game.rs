use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::common::{ConfigError, GameError, Resolution};
use crate::config::GameConfig;
use crate::console::Console;
use crate::coord::{self, RowCol};
use crate::render::render;
use crate::session::{PlayerSession, MSG_WRONG_COORDS};

pub const MSG_CHANGE_PLAYER: &str = "Press Enter and pass the move to another player";
pub const MSG_HIT: &str = "\nYou hit a ship!";
pub const MSG_MISS: &str = "\nYou missed!";
pub const MSG_SINK: &str = "\nYou sank a ship!";
pub const MSG_WIN: &str = "\nYou sank the last ship. You won. Congratulations!";

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Index of the player who sank the opponent's last ship.
    Won(usize),
}

/// Two player sessions taking strictly alternating shots.
pub struct Game {
    config: GameConfig,
    players: [PlayerSession; 2],
    current: usize,
    shots: [usize; 2],
    status: GameStatus,
}

impl Game {
    /// Create a game with empty grids and unplaced fleets for both players.
    pub fn new(config: GameConfig, names: [&str; 2]) -> Result<Self, ConfigError> {
        let players = [
            PlayerSession::new(names[0], &config)?,
            PlayerSession::new(names[1], &config)?,
        ];
        Ok(Self {
            config,
            players,
            current: 0,
            shots: [0; 2],
            status: GameStatus::InProgress,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerSession; 2] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> &mut PlayerSession {
        &mut self.players[index]
    }

    /// Index of the player whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Shots fired so far by each player.
    pub fn shots(&self) -> [usize; 2] {
        self.shots
    }

    pub fn winner(&self) -> Option<&PlayerSession> {
        match self.status {
            GameStatus::Won(i) => Some(&self.players[i]),
            GameStatus::InProgress => None,
        }
    }

    /// Place both fleets at random.
    pub fn place_randomly<G: Rng>(&mut self, rng: &mut G) -> Result<(), GameError> {
        for player in self.players.iter_mut() {
            player.place_randomly(rng)?;
        }
        Ok(())
    }

    /// Current player fires at the opponent. Every accepted shot, repeats
    /// included, ends the turn unless it wins the game. A shot outside the
    /// field is refused and the turn stays with the shooter.
    pub fn fire(&mut self, at: RowCol) -> Result<Resolution, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::Finished);
        }
        let shooter = self.current;
        let target = 1 - shooter;
        let size = self.players[target].grid().size();
        if at.row >= size || at.col >= size {
            return Err(GameError::InvalidShot(at));
        }
        let resolution = self.players[target].receive_shot(at)?;
        self.shots[shooter] += 1;
        debug!(
            "{} fired at {}: {:?}",
            self.players[shooter].name(),
            at,
            resolution
        );
        if resolution.is_won() {
            self.status = GameStatus::Won(shooter);
        } else {
            self.current = target;
        }
        Ok(resolution)
    }

    /// Run placement for both players, then the shooting loop until someone wins.
    /// Returns the index of the winner.
    pub fn play<R: BufRead, W: Write, G: Rng>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> anyhow::Result<usize> {
        info!(
            "game started on a {0}x{0} field with {1} ships each",
            self.config.field_size,
            self.players[0].fleet().len()
        );
        for player in self.players.iter_mut() {
            console.say(format_args!(
                "{}, place your ships on the game field",
                player.name()
            ))?;
            console.say(render(player.grid(), &self.config.symbols, true))?;
            player.place_fleet(console, rng, &self.config.symbols)?;
            console.pause(MSG_CHANGE_PLAYER)?;
        }

        let separator = "-".repeat(2 * self.config.field_size + 2);
        loop {
            let shooter = &self.players[self.current];
            let target = &self.players[1 - self.current];
            console.say(render(target.grid(), &self.config.symbols, false))?;
            console.say(&separator)?;
            console.say(render(shooter.grid(), &self.config.symbols, true))?;
            console.say(format_args!("\n{}, it's your turn:", shooter.name()))?;

            let size = target.grid().size();
            let at = loop {
                let token = console.prompt("Take a shot!")?;
                if token.is_empty() {
                    continue;
                }
                match coord::parse(&token, size) {
                    Ok(at) => break at,
                    Err(e) => {
                        debug!("bad shot input {:?}: {}", token, e);
                        console.say(MSG_WRONG_COORDS)?;
                    }
                }
            };

            match self.fire(at)? {
                Resolution::Miss => console.say(MSG_MISS)?,
                Resolution::Hit => console.say(MSG_HIT)?,
                Resolution::Sunk(_) => console.say(MSG_SINK)?,
                Resolution::Won(_) => {
                    console.say(MSG_WIN)?;
                    break;
                }
            }
            console.pause(MSG_CHANGE_PLAYER)?;
        }

        let winner = self.current;
        info!(
            "{} won after {} shots",
            self.players[winner].name(),
            self.shots[winner]
        );
        Ok(winner)
    }
}
