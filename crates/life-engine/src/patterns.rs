//! Canonical seed patterns.
//!
//! A [`Pattern`] is a named set of cell offsets relative to a top-left
//! anchor. Patterns exist for drivers and tests that want a known still
//! life, oscillator, or spaceship without spelling out coordinates.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Well-known Life patterns, anchored at their top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// 2x2 still life.
    Block,
    /// Period-2 oscillator, seeded horizontally.
    Blinker,
    /// Period-2 oscillator.
    Toad,
    /// Diagonal spaceship.
    Glider,
}

impl Pattern {
    /// The pattern's cell offsets from its top-left anchor.
    const fn offsets(self) -> &'static [(usize, usize)] {
        match self {
            Self::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Self::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Self::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Self::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    /// Absolute cell coordinates for the pattern anchored at `(x, y)`.
    pub fn cells(self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.offsets()
            .iter()
            .map(|&(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
            .collect()
    }
}

impl Grid {
    /// Build an otherwise-dead grid with one pattern placed at `(x, y)`.
    ///
    /// Pattern cells falling outside the grid are skipped.
    pub fn with_pattern(
        width: usize,
        height: usize,
        pattern: Pattern,
        x: usize,
        y: usize,
    ) -> Self {
        Self::with_cells(width, height, &pattern.cells(x, y))
    }
}
