//! The generation engine: toroidal neighbor counting and grid advance.
//!
//! # The one correctness invariant
//!
//! Every neighbor count for a successor generation is evaluated against
//! the *pre-advance* grid. [`advance`] therefore builds a wholly new
//! [`Grid`] rather than mutating in place; mutating during the pass would
//! let later cells observe already-updated neighbors and corrupt the
//! single-generation-depth dependency.
//!
//! # Toroidal wrap
//!
//! Neighbor offsets wrap modularly: the left edge is adjacent to the
//! right edge and the top to the bottom, so no cell is a boundary cell.
//! The wrap is true modular arithmetic, not clamping, and holds for
//! 1-wide and 1-tall grids (where an offset wraps onto the cell itself
//! or its sole neighbor).

use rand::Rng;

use crate::config::{ConfigError, SimulationConfig};
use crate::grid::Grid;
use crate::rules::RuleSet;

/// The eight Moore-neighborhood offsets, `(dx, dy)` excluding `(0, 0)`.
const MOORE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Shift `coord` by one offset step and wrap toroidally into `[0, extent)`.
///
/// A `-1` step is expressed as adding `extent - 1`, keeping the whole
/// computation in unsigned arithmetic. `extent` must be non-zero.
fn wrap(coord: usize, step: i8, extent: usize) -> usize {
    let shifted = match step {
        i8::MIN..=-1 => coord.checked_add(extent.saturating_sub(1)),
        0 => Some(coord),
        1.. => coord.checked_add(1),
    };
    // Grids never approach usize::MAX cells, so the overflow arm cannot
    // be reached; wrap to the first column/row rather than panic.
    shifted.and_then(|v| v.checked_rem(extent)).unwrap_or(0)
}

/// Count the live cells among the eight toroidal Moore neighbors of
/// `(x, y)`. Always in `[0, 8]`; zero on an empty grid.
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u8 {
    if grid.is_empty() {
        return 0;
    }
    let mut count: u8 = 0;
    for &(dx, dy) in &MOORE_OFFSETS {
        let nx = wrap(x, dx, grid.width());
        let ny = wrap(y, dy, grid.height());
        if grid.is_alive(nx, ny) {
            count = count.saturating_add(1);
        }
    }
    count
}

/// Compute the next generation of `grid` under `rules`.
///
/// Returns a new, independent grid of identical dimensions; the input is
/// untouched. Total for every well-formed grid/rule pair: a zero-size
/// grid advances to another zero-size grid.
pub fn advance(grid: &Grid, rules: RuleSet) -> Grid {
    Grid::new(grid.width(), grid.height(), |x, y| {
        rules.next_state(grid.is_alive(x, y), neighbor_count(grid, x, y))
    })
}

/// A running simulation: the current generation plus the active rule set.
///
/// The engine is memoryless beyond the immediately preceding generation.
/// [`Simulation::step`] replaces the held grid with its successor; no
/// history is retained, and the caller may clone the grid at any point
/// to keep a snapshot.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The current generation.
    grid: Grid,
    /// The rule set applied on the next step.
    rules: RuleSet,
    /// Number of completed steps since construction.
    generation: u64,
}

impl Simulation {
    /// Start a simulation from an explicit grid under classic rules.
    pub fn new(grid: Grid) -> Self {
        Self::with_rules(grid, RuleSet::default())
    }

    /// Start a simulation from an explicit grid and rule set.
    pub const fn with_rules(grid: Grid, rules: RuleSet) -> Self {
        Self {
            grid,
            rules,
            generation: 0,
        }
    }

    /// Start a randomly seeded simulation from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rule`] when the configured rulestring is
    /// malformed.
    pub fn from_config(config: &SimulationConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        let rules = config.rule_set()?;
        let grid = Grid::random_with_probability(
            config.grid.width,
            config.grid.height,
            config.grid.alive_probability,
            rng,
        );
        Ok(Self::with_rules(grid, rules))
    }

    /// Advance the simulation by one generation.
    pub fn step(&mut self) {
        self.grid = advance(&self.grid, self.rules);
        self.generation = self.generation.saturating_add(1);
        tracing::debug!(
            generation = self.generation,
            population = self.grid.population(),
            "Advanced one generation"
        );
    }

    /// Replace the active rule set.
    ///
    /// Takes effect on the next [`Simulation::step`] only; the current
    /// grid is unaffected.
    pub fn set_rules(&mut self, rules: RuleSet) {
        tracing::info!(%rules, "Replaced active rule set");
        self.rules = rules;
    }

    /// Replace the active rule set from explicit born/sustain counts.
    pub fn set_rule_counts(&mut self, born: &[u8], sustain: &[u8]) {
        self.set_rules(RuleSet::from_counts(born, sustain));
    }

    /// The current generation's grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active rule set.
    pub const fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of completed steps since construction.
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
