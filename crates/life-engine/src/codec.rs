//! Plain-text import/export of grid state.
//!
//! One character per cell, one text row per grid row:
//!
//! - alive cells render as [`ALIVE_MARKER`] (`'x'`)
//! - dead cells render as [`DEAD_MARKER`] (a space)
//! - rows are separated by a single `'\n'`
//!
//! Parsing is the inverse-compatible counterpart of rendering and is
//! deliberately lenient: target dimensions are supplied by the caller,
//! never inferred from the text, and rows or characters the text lacks
//! simply read as dead. Any character other than the alive marker —
//! including the dead marker itself, `.`, or anything else — is dead.
//! There is no failure mode.

use crate::grid::Grid;

/// The single character marking a live cell.
pub const ALIVE_MARKER: char = 'x';

/// The character emitted for a dead cell.
pub const DEAD_MARKER: char = ' ';

/// Serialize a grid to a row-oriented text block.
///
/// No trailing row separator is emitted: the last row ends the string.
/// A zero-size grid renders to the empty string.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() {
            out.push(if grid.is_alive(x, y) {
                ALIVE_MARKER
            } else {
                DEAD_MARKER
            });
        }
    }
    out
}

/// Parse a text block into a grid of the given target dimensions.
///
/// Cell `(x, y)` is alive iff the text has a row `y`, that row has a
/// character at column `x`, and that character is [`ALIVE_MARKER`].
/// Text shorter than the target in either dimension, ragged rows, and
/// `\r\n` line endings are all tolerated.
pub fn parse(text: &str, width: usize, height: usize) -> Grid {
    let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
    Grid::new(width, height, |x, y| {
        rows.get(y).and_then(|row| row.get(x)) == Some(&ALIVE_MARKER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_basic_pattern() {
        let grid = Grid::with_cells(3, 2, &[(0, 0), (2, 0), (1, 1)]);
        assert_eq!(render(&grid), "x x\n x ");
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let grid = Grid::new(2, 2, |_, _| false);
        assert_eq!(render(&grid), "  \n  ");
    }

    #[test]
    fn render_zero_size_grid_is_empty_string() {
        assert_eq!(render(&Grid::new(0, 0, |_, _| false)), "");
        assert_eq!(render(&Grid::new(3, 0, |_, _| false)), "");
    }

    #[test]
    fn parse_basic_pattern() {
        let grid = parse("x x\n x ", 3, 2);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(2, 0));
        assert!(grid.is_alive(1, 1));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn parse_tolerates_short_and_missing_rows() {
        // One short row, target is 4x3: everything absent is dead.
        let grid = parse("xx", 4, 3);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(1, 0));
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn parse_ignores_rows_beyond_target_height() {
        let grid = parse("x\nx\nx\nx", 1, 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn parse_treats_other_characters_as_dead() {
        let grid = parse(".Xo x", 5, 1);
        // Only the lowercase marker counts.
        assert_eq!(grid.population(), 1);
        assert!(grid.is_alive(4, 0));
    }

    #[test]
    fn parse_tolerates_crlf_line_endings() {
        let grid = parse("x \r\n x", 2, 2);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(1, 1));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn parse_empty_text_is_all_dead() {
        let grid = parse("", 3, 3);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn round_trip_reproduces_pattern() {
        let grid = Grid::new(6, 5, |x, y| (x.wrapping_mul(31).wrapping_add(y)) % 3 == 0);
        let reparsed = parse(&render(&grid), grid.width(), grid.height());
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn round_trip_one_row_grid() {
        let grid = Grid::with_cells(5, 1, &[(0, 0), (4, 0)]);
        assert_eq!(parse(&render(&grid), 5, 1), grid);
    }
}
