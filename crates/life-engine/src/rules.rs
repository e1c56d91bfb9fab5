//! Birth and survival rule sets for Life-family automata.
//!
//! A [`RuleSet`] pairs two sets of neighbor counts: `born` (counts that
//! bring a dead cell to life) and `sustain` (counts that keep a live cell
//! alive). Both sets are stored as 9-bit masks over the range `0..=8`, so
//! membership tests are a single bit probe rather than a scan.
//!
//! Rule sets can be built programmatically ([`RuleSet::from_counts`]),
//! taken from a preset, or parsed from the standard B/S notation used
//! across the cellular-automaton literature:
//!
//! | Preset | Notation | Character |
//! |--------|----------|-----------|
//! | [`RuleSet::conway`] | `B3/S23` | The classic Game of Life |
//! | [`RuleSet::high_life`] | `B36/S23` | Has a self-replicating pattern |
//! | [`RuleSet::day_and_night`] | `B3678/S34678` | Symmetric under state inversion |
//! | [`RuleSet::seeds`] | `B2/S` | Every live cell dies each generation |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Largest possible neighbor count in a Moore neighborhood.
pub const MAX_NEIGHBORS: u8 = 8;

/// Bitmask bit for a single neighbor count.
///
/// Counts above [`MAX_NEIGHBORS`] map to an empty mask: no real neighbor
/// count can ever match them, so they are harmless rather than an error.
const fn bit(count: u8) -> u16 {
    if count <= MAX_NEIGHBORS { 1 << count } else { 0 }
}

/// The born/sustain thresholds governing cell state transitions.
///
/// Constant for the lifetime of a simulation unless explicitly replaced
/// via [`Simulation::set_rules`].
///
/// [`Simulation::set_rules`]: crate::engine::Simulation::set_rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    /// Bitmask over `0..=8` of neighbor counts that revive a dead cell.
    born: u16,
    /// Bitmask over `0..=8` of neighbor counts that keep a live cell alive.
    sustain: u16,
}

impl RuleSet {
    /// A rule set under which nothing is ever born and nothing survives.
    pub const fn empty() -> Self {
        Self { born: 0, sustain: 0 }
    }

    /// Classic Conway Game of Life (`B3/S23`).
    pub const fn conway() -> Self {
        Self {
            born: bit(3),
            sustain: bit(2) | bit(3),
        }
    }

    /// HighLife variant (`B36/S23`).
    pub const fn high_life() -> Self {
        Self {
            born: bit(3) | bit(6),
            sustain: bit(2) | bit(3),
        }
    }

    /// Day & Night variant (`B3678/S34678`).
    pub const fn day_and_night() -> Self {
        Self {
            born: bit(3) | bit(6) | bit(7) | bit(8),
            sustain: bit(3) | bit(4) | bit(6) | bit(7) | bit(8),
        }
    }

    /// Seeds variant (`B2/S`): every live cell dies each generation.
    pub const fn seeds() -> Self {
        Self {
            born: bit(2),
            sustain: 0,
        }
    }

    /// Build a rule set from explicit lists of neighbor counts.
    ///
    /// Counts outside `0..=8` are silently ignored: they can never be
    /// produced by a Moore neighborhood, so carrying them would change
    /// nothing.
    pub fn from_counts(born: &[u8], sustain: &[u8]) -> Self {
        fn mask(counts: &[u8]) -> u16 {
            counts.iter().fold(0, |acc, &count| acc | bit(count))
        }
        Self {
            born: mask(born),
            sustain: mask(sustain),
        }
    }

    /// Whether a dead cell with `neighbors` live neighbors becomes alive.
    pub const fn contains_born(self, neighbors: u8) -> bool {
        self.born & bit(neighbors) != 0
    }

    /// Whether a live cell with `neighbors` live neighbors stays alive.
    pub const fn contains_sustain(self, neighbors: u8) -> bool {
        self.sustain & bit(neighbors) != 0
    }

    /// Compute a cell's next state from its current state and live
    /// neighbor count.
    pub const fn next_state(self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.contains_sustain(neighbors)
        } else {
            self.contains_born(neighbors)
        }
    }

    /// The born counts in ascending order.
    pub fn born_counts(self) -> Vec<u8> {
        (0..=MAX_NEIGHBORS)
            .filter(|&n| self.contains_born(n))
            .collect()
    }

    /// The sustain counts in ascending order.
    pub fn sustain_counts(self) -> Vec<u8> {
        (0..=MAX_NEIGHBORS)
            .filter(|&n| self.contains_sustain(n))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleSet {
    /// Render the canonical B/S rulestring, e.g. `B3/S23`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.born_counts() {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in self.sustain_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse a B/S rulestring such as `B3/S23`.
    ///
    /// Prefixes are case-insensitive and surrounding whitespace is
    /// ignored. An empty digit run is valid (`B2/S` has no sustain
    /// counts), but a digit of `9` is rejected since a Moore
    /// neighborhood caps at 8.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RuleError::Empty);
        }
        let Some((born_part, sustain_part)) = trimmed.split_once('/') else {
            return Err(RuleError::MissingSeparator {
                raw: trimmed.to_string(),
            });
        };
        Ok(Self {
            born: parse_segment(born_part, 'B')?,
            sustain: parse_segment(sustain_part, 'S')?,
        })
    }
}

/// Parse one rulestring segment (`B3`, `S23`) into a count bitmask.
fn parse_segment(segment: &str, prefix: char) -> Result<u16, RuleError> {
    let trimmed = segment.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&prefix) => {}
        _ => {
            return Err(RuleError::MissingPrefix {
                prefix,
                segment: trimmed.to_string(),
            });
        }
    }

    let mut mask: u16 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else {
            return Err(RuleError::InvalidDigit { found: c });
        };
        // `to_digit(10)` yields at most 9, so the cast cannot truncate.
        let count = u8::try_from(digit).unwrap_or(u8::MAX);
        if count > MAX_NEIGHBORS {
            return Err(RuleError::NeighborCountOutOfRange { count });
        }
        mask |= bit(count);
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_membership() {
        let rules = RuleSet::conway();
        assert!(rules.contains_born(3));
        assert!(!rules.contains_born(2));
        assert!(rules.contains_sustain(2));
        assert!(rules.contains_sustain(3));
        assert!(!rules.contains_sustain(4));
    }

    #[test]
    fn default_is_conway() {
        assert_eq!(RuleSet::default(), RuleSet::conway());
    }

    #[test]
    fn next_state_truth_table() {
        let rules = RuleSet::conway();
        // Dead cell: born only on exactly 3.
        assert!(rules.next_state(false, 3));
        assert!(!rules.next_state(false, 2));
        assert!(!rules.next_state(false, 4));
        // Live cell: survives on 2 or 3.
        assert!(rules.next_state(true, 2));
        assert!(rules.next_state(true, 3));
        assert!(!rules.next_state(true, 1));
        assert!(!rules.next_state(true, 4));
    }

    #[test]
    fn from_counts_ignores_out_of_range() {
        let rules = RuleSet::from_counts(&[3, 12, 200], &[2, 3, 9]);
        assert_eq!(rules, RuleSet::conway());
    }

    #[test]
    fn empty_rule_set_matches_nothing() {
        let rules = RuleSet::empty();
        for n in 0..=MAX_NEIGHBORS {
            assert!(!rules.next_state(true, n));
            assert!(!rules.next_state(false, n));
        }
    }

    #[test]
    fn parse_classic_rulestring() {
        assert_eq!("B3/S23".parse::<RuleSet>(), Ok(RuleSet::conway()));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!("  b3/s23 ".parse::<RuleSet>(), Ok(RuleSet::conway()));
    }

    #[test]
    fn parse_empty_sustain_segment() {
        assert_eq!("B2/S".parse::<RuleSet>(), Ok(RuleSet::seeds()));
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert_eq!("   ".parse::<RuleSet>(), Err(RuleError::Empty));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert!(matches!(
            "B3S23".parse::<RuleSet>(),
            Err(RuleError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        assert!(matches!(
            "3/S23".parse::<RuleSet>(),
            Err(RuleError::MissingPrefix { prefix: 'B', .. })
        ));
    }

    #[test]
    fn parse_rejects_non_digit() {
        assert_eq!(
            "B3x/S23".parse::<RuleSet>(),
            Err(RuleError::InvalidDigit { found: 'x' })
        );
    }

    #[test]
    fn parse_rejects_nine() {
        assert_eq!(
            "B9/S23".parse::<RuleSet>(),
            Err(RuleError::NeighborCountOutOfRange { count: 9 })
        );
    }

    #[test]
    fn display_renders_canonical_form() {
        assert_eq!(RuleSet::conway().to_string(), "B3/S23");
        assert_eq!(RuleSet::day_and_night().to_string(), "B3678/S34678");
        assert_eq!(RuleSet::seeds().to_string(), "B2/S");
    }

    #[test]
    fn display_parse_round_trip() {
        for rules in [
            RuleSet::conway(),
            RuleSet::high_life(),
            RuleSet::day_and_night(),
            RuleSet::seeds(),
            RuleSet::empty(),
        ] {
            assert_eq!(rules.to_string().parse::<RuleSet>(), Ok(rules));
        }
    }
}
