//! Rules-and-state engine for a sliding-tile merge puzzle.
//!
//! [`logic`] owns the board: directional moves, merge scoring, single-step
//! undo and terminal-state detection. [`ai`] ranks the four candidate moves
//! with a one-ply lookahead and can drive a game by itself.

pub use grid_2048::{self as grid, Grid};

pub mod ai;
pub mod logic;

mod direction;

pub use direction::Direction;
