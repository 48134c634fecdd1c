//! One-ply move advisor: rank the four candidate moves by how the board
//! looks immediately after them, then play the best one.

use rand::Rng;

use crate::{direction::Direction, logic::Game};

pub mod heuristic;
pub mod random;

pub use heuristic::HeuristicAi;
pub use random::RandomAi;

/// A move-selection strategy driving a [`Game`] turn by turn.
pub trait Ai {
    /// The next move to play, or `None` when no move would change the board.
    fn next_move(&mut self, game: &Game) -> Option<Direction>;
}

/// How good the board looks right after a hypothetical move.
///
/// Ordered by empty-cell count first, then score, then direction order, so
/// ranking is total and deterministic. A move that changes nothing gets an
/// `empty_count` of `-1` and is never preferred over a real move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveEfficiency {
    pub empty_count: i32,
    pub score: u32,
    pub direction: Direction,
}

/// Run `direction` against a cloned engine and measure the outcome. The live
/// game is left untouched.
pub fn evaluate(game: &Game, direction: Direction, rng: &mut impl Rng) -> MoveEfficiency {
    let mut probe = game.clone();

    probe.apply_move(direction, rng);

    let empty_count = if probe.has_changed() {
        probe.grid().count_empty() as i32
    } else {
        -1
    };

    MoveEfficiency {
        empty_count,
        score: probe.score(),
        direction,
    }
}

fn best_move(game: &Game, rng: &mut impl Rng) -> MoveEfficiency {
    Direction::iter()
        .map(|direction| evaluate(game, direction, rng))
        .max()
        .expect("four candidate moves always yield a ranking")
}

/// Evaluate all four directions and apply the best one to live state.
pub fn auto_move(game: &mut Game, rng: &mut impl Rng) {
    let best = best_move(game, rng);

    log::debug!(
        "auto move: {} ({} empty, score {})",
        best.direction.name(),
        best.empty_count,
        best.score
    );

    game.apply_move(best.direction, rng);
}

/// Apply a uniformly chosen direction, even if it turns out to be a no-op.
pub fn random_move(game: &mut Game, rng: &mut impl Rng) {
    let direction = Direction::from_index(rng.gen_range(0..4));

    game.apply_move(direction, rng);
}
