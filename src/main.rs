use std::io;
use std::path::PathBuf;

use anyhow::Context;
use battleship_hotseat::{init_logging, Console, Game, GameConfig};
use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player hot-seat battleship on the terminal", long_about = None)]
struct Cli {
    /// TOML file with field size, fleet and symbols.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the field size (2-26).
    #[arg(long)]
    size: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "Player 1")]
    first: String,
    #[arg(long, default_value = "Player 2")]
    second: String,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config.field_size = size;
    }
    config.validate().context("invalid configuration")?;
    log::debug!("configuration: {:?}", config);

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(config, [cli.first.as_str(), cli.second.as_str()])?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let winner = game.play(&mut console, &mut rng)?;
    console.say(format_args!(
        "\n{} wins after {} shots.",
        game.players()[winner].name(),
        game.shots()[winner]
    ))?;
    Ok(())
}
