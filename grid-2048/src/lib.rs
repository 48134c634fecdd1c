//! Square tile grid and the pure geometric transforms the move logic is
//! composed from.
//!
//! Transforms return a new [`Grid`] rather than shuffling cells in place, so
//! callers can compose them without aliasing concerns.

/// An N×N grid of tile values, row-major. A value of `0` is an empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// An all-empty grid with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid by evaluating `f` at every `(row, column)` position.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let cells = (0..size * size).map(|i| f(i / size, i % size)).collect();

        Self { size, cells }
    }

    pub fn from_rows<const N: usize>(rows: [[u32; N]; N]) -> Self {
        Self {
            size: N,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[row * self.size + column]
    }

    pub fn set(&mut self, row: usize, column: usize, value: u32) {
        self.cells[row * self.size + column] = value;
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> {
        self.cells.chunks_exact_mut(self.size)
    }

    /// Sum of every cell value.
    pub fn total(&self) -> u32 {
        self.cells.iter().sum()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    /// Positions of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
    }
}

/// Rotate the grid 180°.
pub fn reverse(grid: &Grid) -> Grid {
    let n = grid.size();

    Grid::from_fn(n, |row, column| grid.get(n - 1 - row, n - 1 - column))
}

/// Rotate the grid a quarter turn counterclockwise.
pub fn rotate_left(grid: &Grid) -> Grid {
    let n = grid.size();

    Grid::from_fn(n, |row, column| grid.get(column, n - 1 - row))
}

/// Rotate the grid a quarter turn clockwise. Inverse of [`rotate_left`].
pub fn rotate_right(grid: &Grid) -> Grid {
    let n = grid.size();

    Grid::from_fn(n, |row, column| grid.get(n - 1 - column, row))
}
