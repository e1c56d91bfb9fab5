//! Toroidal cellular automaton engine for the Conway Life family.
//!
//! A rectangular grid of binary cells evolves in discrete generations
//! under configurable birth/survival thresholds, with toroidal
//! (edge-connects-to-opposite-edge) adjacency over the eight-connected
//! Moore neighborhood. Each generation is an immutable [`Grid`] value;
//! advancing builds a wholly new grid so every transition depends only
//! on the previous generation.
//!
//! Rendering, UI, animation scheduling, and persistence are driver
//! concerns. Drivers interact with the engine only through a
//! boolean-producing initializer for construction, the text codec for
//! import/export, and a grid handle for reading.
//!
//! # Modules
//!
//! - [`codec`] -- Plain-text serialization and lenient parsing of grid
//!   state (`'x'` alive, anything else dead).
//! - [`config`] -- YAML-loaded simulation configuration with classic
//!   80x25 defaults.
//! - [`engine`] -- Toroidal neighbor counting, the generation-advance
//!   algorithm, and the stateful [`Simulation`] wrapper.
//! - [`error`] -- Error types for the crate's few fallible surfaces.
//! - [`grid`] -- The [`Grid`]/[`Cell`] data model and its initializers.
//! - [`patterns`] -- Canonical seed patterns (block, blinker, toad,
//!   glider).
//! - [`rules`] -- Born/sustain rule sets as 9-bit masks, presets, and
//!   B/S rulestring notation.

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

// Re-export primary types at crate root.
pub use config::{ConfigError, GridConfig, SimulationConfig};
pub use engine::{Simulation, advance, neighbor_count};
pub use error::RuleError;
pub use grid::{ALIVE_PROBABILITY, Cell, Grid};
pub use patterns::Pattern;
pub use rules::{MAX_NEIGHBORS, RuleSet};
