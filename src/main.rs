use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use game_2048::{
    ai::{Ai, HeuristicAi, RandomAi},
    logic::{Game, GameConfig},
};

mod render;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// One-ply lookahead over the four directions.
    Auto,
    /// Uniformly random legal moves.
    Random,
}

/// Self-playing sliding-tile merge puzzle.
#[derive(Parser)]
struct Args {
    #[arg(value_enum, default_value_t = Strategy::Auto)]
    strategy: Strategy,

    /// Side length of the grid.
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Probability that a spawned tile is a 4.
    #[arg(long, default_value_t = 0.1)]
    four_chance: f64,

    /// RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many moves even if the game is not over.
    #[arg(short, long)]
    moves: Option<u64>,

    /// Redraw the board after every move.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("playing with seed {seed}");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let strategy_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let config = GameConfig {
        size: args.size,
        four_chance: args.four_chance,
    };
    let mut game = Game::new(config, &mut rng)?;

    let mut strategy: Box<dyn Ai> = match args.strategy {
        Strategy::Auto => Box::new(HeuristicAi::new(strategy_rng)),
        Strategy::Random => Box::new(RandomAi::new(strategy_rng)),
    };

    let mut stdout = io::stdout().lock();
    let move_cap = args.moves.unwrap_or(u64::MAX);
    let mut moves = 0;

    while moves < move_cap {
        let Some(direction) = strategy.next_move(&game) else {
            break;
        };

        game.apply_move(direction, &mut rng);
        moves += 1;

        if args.verbose {
            writeln!(stdout, "move {moves}: {}", direction.name())?;
            render::draw_board(&mut stdout, game.grid())?;
        }
    }

    render::draw_board(&mut stdout, game.grid())?;

    if game.can_move() {
        writeln!(stdout, "stopped after {moves} moves")?;
    } else {
        writeln!(stdout, "game over after {moves} moves")?;
    }
    writeln!(
        stdout,
        "score {}, max tile {}",
        game.score(),
        game.max_tile()
    )?;

    Ok(())
}
