use rand::Rng;

use crate::{direction::Direction, logic::Game};

use super::Ai;

/// One-ply lookahead strategy: plays whichever direction leaves the most
/// empty cells, breaking ties on score.
pub struct HeuristicAi<R> {
    rng: R,
}

impl<R> Ai for HeuristicAi<R>
where
    R: Rng,
{
    fn next_move(&mut self, game: &Game) -> Option<Direction> {
        game.can_move()
            .then(|| super::best_move(game, &mut self.rng).direction)
    }
}

impl<R> HeuristicAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}
