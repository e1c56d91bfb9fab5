//! Error types for the `life-engine` crate.
//!
//! The simulation core is total: construction, neighbor counting,
//! generation advance, and the text codec never fail. The only fallible
//! surfaces are rulestring parsing ([`RuleError`]) and configuration
//! loading ([`ConfigError`]).
//!
//! [`ConfigError`]: crate::config::ConfigError

/// Errors that can occur while parsing a B/S rulestring.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RuleError {
    /// The rulestring was empty or whitespace only.
    #[error("rulestring is empty")]
    Empty,

    /// The rulestring has no `/` separating the born and sustain segments.
    #[error("rulestring `{raw}` is missing the `/` separator")]
    MissingSeparator {
        /// The offending rulestring.
        raw: String,
    },

    /// A segment does not start with its expected `B` or `S` prefix.
    #[error("segment `{segment}` does not start with `{prefix}`")]
    MissingPrefix {
        /// The expected prefix character.
        prefix: char,
        /// The offending segment.
        segment: String,
    },

    /// A segment contains a character that is not a decimal digit.
    #[error("invalid character `{found}` in rulestring segment")]
    InvalidDigit {
        /// The offending character.
        found: char,
    },

    /// A neighbor count exceeds the Moore-neighborhood maximum of 8.
    #[error("neighbor count {count} is out of range (max 8)")]
    NeighborCountOutOfRange {
        /// The offending count.
        count: u8,
    },
}
