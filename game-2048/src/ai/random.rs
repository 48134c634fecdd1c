use rand::Rng;

use crate::{direction::Direction, logic::Game};

use super::Ai;

/// Uniformly random strategy over the directions that actually change the
/// board. A baseline for comparing the heuristic against.
pub struct RandomAi<R> {
    rng: R,
}

impl<R> Ai for RandomAi<R>
where
    R: Rng,
{
    fn next_move(&mut self, game: &Game) -> Option<Direction> {
        let legal: Vec<_> = Direction::iter()
            .filter(|&direction| super::evaluate(game, direction, &mut self.rng).empty_count >= 0)
            .collect();

        (!legal.is_empty()).then(|| legal[self.rng.gen_range(0..legal.len())])
    }
}

impl<R> RandomAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(test)]
mod tests {
    use grid_2048::Grid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn only_offers_moves_that_change_the_board() {
        let game = Game::from_grid(Grid::from_rows([
            [0, 0, 0, 0],
            [2, 4, 8, 16],
            [32, 64, 2, 4],
            [8, 16, 32, 64],
        ]));
        let mut ai = RandomAi::new(ChaCha8Rng::seed_from_u64(5));

        for _ in 0..10 {
            assert_eq!(ai.next_move(&game), Some(Direction::Up));
        }
    }

    #[test]
    fn returns_none_at_game_over() {
        let game = Game::from_grid(Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]));
        let mut ai = RandomAi::new(ChaCha8Rng::seed_from_u64(5));

        assert_eq!(ai.next_move(&game), None);
    }
}
