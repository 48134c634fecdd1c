use std::io::{self, Write};

use game_2048::Grid;

const CELL_WIDTH: usize = 6;

/// Draw the grid as plain text, one row per line, `.` for empty cells.
pub fn draw_board(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let rule = "-".repeat(grid.size() * (CELL_WIDTH + 1) + 1);

    writeln!(out, "{rule}")?;

    for row in grid.rows() {
        out.write_all(b"|")?;

        for &cell in row {
            if cell == 0 {
                write!(out, "{:>CELL_WIDTH$}|", ".")?;
            } else {
                write!(out, "{cell:>CELL_WIDTH$}|")?;
            }
        }

        out.write_all(b"\n")?;
    }

    writeln!(out, "{rule}")
}
