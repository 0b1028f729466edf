use battleship_hotseat::{init_logging, Game, GameConfig, GameStatus, RowCol};
use log::LevelFilter;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

/// Random self-play: both fleets placed at random, each player fires at its
/// untouched cells in a shuffled order. Prints a JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [field-size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut config = GameConfig::default();
    if let Some(size) = args.get(2) {
        config.field_size = size.parse()?;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(config, ["player1", "player2"])?;
    game.place_randomly(&mut rng)?;

    let size = game.config().field_size;
    let mut targets: [Vec<RowCol>; 2] = core::array::from_fn(|_| {
        let mut cells: Vec<RowCol> = (0..size)
            .flat_map(|r| (0..size).map(move |c| RowCol::new(r, c)))
            .collect();
        cells.shuffle(&mut rng);
        cells
    });

    while game.status() == GameStatus::InProgress {
        let shooter = game.current();
        let at = targets[shooter]
            .pop()
            .ok_or_else(|| anyhow::anyhow!("player{} ran out of targets", shooter + 1))?;
        game.fire(at)?;
    }

    let winner = game.winner().map(|p| p.name().to_string());
    let shots = game.shots();
    let result = json!({
        "seed": seed,
        "field_size": size,
        "player1": {"shots": shots[0], "ships_left": game.players()[0].fleet().len()},
        "player2": {"shots": shots[1], "ships_left": game.players()[1].fleet().len()},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
