use grid_2048 as grid;
use grid_2048::Grid;
use rand::Rng;
use thiserror::Error;

use crate::direction::Direction;

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_FOUR_CHANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            four_chance: DEFAULT_FOUR_CHANCE,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    SizeTooSmall(usize),
    #[error("four-tile chance must be within 0.0..=1.0, got {0}")]
    FourChanceOutOfRange(f64),
}

impl GameConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::SizeTooSmall(self.size));
        }

        if !(0.0..=1.0).contains(&self.four_chance) {
            return Err(ConfigError::FourChanceOutOfRange(self.four_chance));
        }

        Ok(self)
    }
}

#[derive(Clone, Debug)]
struct Snapshot {
    grid: Grid,
    score: u32,
}

/// The board engine: grid, score, max tile and a one-level undo slot.
///
/// Every mutation goes through the four directional moves, [`Game::undo`] or
/// [`Game::reset`]. Randomness is always injected, so a seeded RNG replays a
/// game exactly.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    score: u32,
    max_tile: u32,
    saved: Option<Snapshot>,
    save_needed: bool,
    four_chance: f64,
}

impl Game {
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        let config = config.validate()?;

        let mut game = Self::from_grid(Grid::new(config.size));
        game.four_chance = config.four_chance;

        game.add_random_tile(rng);
        game.add_random_tile(rng);

        Ok(game)
    }

    /// Wrap an existing grid, with zeroed score and empty history. Intended
    /// for simulations and tests; [`Game::new`] is the normal entry point.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            max_tile: 0,
            saved: None,
            save_needed: true,
            four_chance: DEFAULT_FOUR_CHANCE,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Largest value ever produced by a merge. Survives [`Game::undo`].
    pub fn max_tile(&self) -> u32 {
        self.max_tile
    }

    /// Empty the grid and spawn two fresh tiles. Score, max tile and the
    /// undo slot are left as they are.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.grid = Grid::new(self.grid.size());

        self.add_random_tile(rng);
        self.add_random_tile(rng);
    }

    fn save_state(&mut self) {
        if self.save_needed {
            self.saved = Some(Snapshot {
                grid: self.grid.clone(),
                score: self.score,
            });
            self.save_needed = false;
        }
    }

    /// Restore the grid and score from the saved snapshot, if any. The max
    /// tile is deliberately not restored: it records a historical high, not
    /// current state.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.saved.take() {
            self.grid = snapshot.grid;
            self.score = snapshot.score;
        }
    }

    /// The primitive move all four directions are built from: compress and
    /// merge every row toward the left edge, then spawn a tile if anything
    /// changed.
    ///
    /// The snapshot is gated on `save_needed` so that the composed moves,
    /// which snapshot before transforming the grid, do not record a second,
    /// already-transformed snapshot mid-turn.
    pub fn move_left(&mut self, rng: &mut impl Rng) {
        self.save_state();

        let mut changed = false;

        for row in self.grid.rows_mut() {
            changed |= compress(row);

            let outcome = merge(row);
            changed |= outcome.changed;

            self.score += outcome.gained;
            self.max_tile = self.max_tile.max(outcome.largest);
        }

        if changed {
            self.add_random_tile(rng);
        }

        self.save_needed = true;
    }

    pub fn move_right(&mut self, rng: &mut impl Rng) {
        self.save_state();

        self.grid = grid::reverse(&self.grid);
        self.move_left(rng);
        self.grid = grid::reverse(&self.grid);
    }

    pub fn move_up(&mut self, rng: &mut impl Rng) {
        self.save_state();

        self.grid = grid::rotate_left(&self.grid);
        self.move_left(rng);
        self.grid = grid::rotate_right(&self.grid);
    }

    pub fn move_down(&mut self, rng: &mut impl Rng) {
        self.save_state();

        self.grid = grid::reverse(&grid::rotate_left(&self.grid));
        self.move_left(rng);
        self.grid = grid::rotate_right(&grid::reverse(&self.grid));
    }

    pub fn apply_move(&mut self, direction: Direction, rng: &mut impl Rng) {
        match direction {
            Direction::Up => self.move_up(rng),
            Direction::Down => self.move_down(rng),
            Direction::Right => self.move_right(rng),
            Direction::Left => self.move_left(rng),
        }
    }

    /// Whether any legal move remains: an empty cell, or an equal adjacent
    /// pair along either axis. `false` means game over.
    pub fn can_move(&self) -> bool {
        if self.grid.count_empty() > 0 {
            return true;
        }

        has_adjacent_pair(&self.grid) || has_adjacent_pair(&grid::rotate_left(&self.grid))
    }

    /// Whether the grid differs from the saved snapshot, judged by comparing
    /// cell totals. A sum-preserving change would be missed; after a real
    /// move the spawned tile always raises the total, so the two change
    /// detectors agree in practice (see [`Game::has_changed_exact`]).
    /// Reports `false` when no snapshot exists.
    pub fn has_changed(&self) -> bool {
        self.saved
            .as_ref()
            .is_some_and(|snapshot| snapshot.grid.total() != self.grid.total())
    }

    /// Cell-by-cell variant of [`Game::has_changed`].
    pub fn has_changed_exact(&self) -> bool {
        self.saved
            .as_ref()
            .is_some_and(|snapshot| snapshot.grid != self.grid)
    }

    /// Spawn a 2 (or, with `four_chance` probability, a 4) on a uniformly
    /// chosen empty cell. No-op on a full grid.
    pub fn add_random_tile(&mut self, rng: &mut impl Rng) {
        let empty: Vec<_> = self.grid.empty_cells().collect();

        if empty.is_empty() {
            return;
        }

        let (row, column) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_bool(self.four_chance) { 4 } else { 2 };

        self.grid.set(row, column, value);
    }
}

fn has_adjacent_pair(grid: &Grid) -> bool {
    grid.rows()
        .any(|row| row.windows(2).any(|pair| pair[0] == pair[1]))
}

/// Pack non-empty values toward the left end of the row, preserving order.
fn compress(row: &mut [u32]) -> bool {
    let mut changed = false;
    let mut write = 0;

    for read in 0..row.len() {
        if row[read] != 0 {
            if read != write {
                row[write] = row[read];
                row[read] = 0;
                changed = true;
            }
            write += 1;
        }
    }

    changed
}

struct MergeOutcome {
    changed: bool,
    gained: u32,
    largest: u32,
}

/// Single left-to-right merge pass over a compressed row. Each merge
/// re-compresses the row so gaps close, but the scan index moves on, so a
/// freshly merged tile never merges again within the same move.
fn merge(row: &mut [u32]) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        changed: false,
        gained: 0,
        largest: 0,
    };

    for i in 0..row.len() - 1 {
        if row[i] != 0 && row[i] == row[i + 1] {
            let sum = row[i] + row[i + 1];

            row[i] = sum;
            row[i + 1] = 0;
            compress(row);

            outcome.changed = true;
            outcome.gained += sum;
            outcome.largest = outcome.largest.max(sum);
        }
    }

    outcome
}
