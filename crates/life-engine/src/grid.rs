//! The grid data model: one generation of cell state.
//!
//! A [`Grid`] owns exactly one [`Cell`] per coordinate in
//! `[0, width) x [0, height)`. Dimensions are fixed at construction and
//! never change. A grid is never mutated once built: advancing the
//! simulation produces an entirely new grid value (see
//! [`advance`](crate::engine::advance)), so each grid *is* one
//! generation, and reading a finished grid is side-effect-free.
//!
//! Cells are plain value data. A cell knows its own coordinates and
//! alive state but holds no reference back to its grid; neighbor lookups
//! go through the grid's container by coordinate.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that a randomly seeded cell starts alive.
pub const ALIVE_PROBABILITY: f64 = 0.5;

/// One cell of a single generation.
///
/// Coordinates are fixed at creation; only `alive` varies across
/// generations, and then only by building a successor cell in a new grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column index, `0 <= x < width`.
    pub x: usize,
    /// Row index, `0 <= y < height`.
    pub y: usize,
    /// Whether the cell is alive in this generation.
    pub alive: bool,
}

/// A rectangular grid of cells with toroidal adjacency.
///
/// Stored row-major: `rows[y][x]` is the cell at `(x, y)`. Zero-size
/// grids are permitted; they hold no cells and render to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cell rows, outer index `y`, inner index `x`.
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a fully populated grid, invoking `initializer` exactly once
    /// per coordinate to decide each cell's alive state.
    ///
    /// Construction is atomic: no partially populated grid is ever
    /// observable.
    pub fn new(width: usize, height: usize, mut initializer: impl FnMut(usize, usize) -> bool) -> Self {
        let rows = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| Cell {
                        x,
                        y,
                        alive: initializer(x, y),
                    })
                    .collect()
            })
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    /// Build a grid where each cell is independently alive with
    /// probability [`ALIVE_PROBABILITY`].
    pub fn random(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        Self::random_with_probability(width, height, ALIVE_PROBABILITY, rng)
    }

    /// Build a grid where each cell is independently alive with the
    /// given probability, clamped into `[0, 1]`.
    pub fn random_with_probability(
        width: usize,
        height: usize,
        probability: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let probability = probability.clamp(0.0, 1.0);
        Self::new(width, height, |_, _| rng.random_bool(probability))
    }

    /// Build an otherwise-dead grid with the listed coordinates alive.
    ///
    /// Coordinates outside the grid are ignored: they name no cell, so
    /// there is nothing to set.
    pub fn with_cells(width: usize, height: usize, alive: &[(usize, usize)]) -> Self {
        Self::new(width, height, |x, y| alive.contains(&(x, y)))
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid holds no cells (either dimension is zero).
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The cell at `(x, y)`, or `None` when out of range.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Whether the cell at `(x, y)` is alive. Out-of-range coordinates
    /// read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(|cell| cell.alive)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Number of live cells in this generation.
    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.alive).count()
    }
}
