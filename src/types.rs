//! Core types for password strength classification.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifies one of the fixed password requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementId {
    /// Character count is at least 9.
    MinLength,
    /// Contains a character in `'0'..='9'`.
    Digit,
    /// Contains one of `!@#$%^&*`.
    Symbol,
    /// Contains a character in `'A'..='Z'`.
    Uppercase,
}

/// Discrete strength classification derived from the requirement score.
///
/// Variants are declared in ascending order, so
/// `Empty < Weak < Medium < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    /// The password has zero length; requirements were not consulted.
    Empty,
    /// Fewer than half of the requirements are satisfied.
    Weak,
    /// At least half, but not all, of the requirements are satisfied.
    Medium,
    /// Every requirement is satisfied.
    Strong,
}

impl StrengthLevel {
    /// Maps a satisfied-requirement count to a level.
    ///
    /// The breakpoints scale with the requirement count rather than being
    /// hardcoded to four: fewer than half satisfied is `Weak` and all
    /// satisfied is `Strong`; anything in between is `Medium`. With the
    /// fixed four-requirement set, scores 0 and 1 map to `Weak`, 2 and 3 to
    /// `Medium`, and only 4 to `Strong`.
    ///
    /// An empty requirement slice classifies as `Strong`: all zero
    /// requirements are satisfied.
    pub fn from_score(score: usize, requirement_count: usize) -> StrengthLevel {
        if score >= requirement_count {
            StrengthLevel::Strong
        } else if score * 2 < requirement_count {
            StrengthLevel::Weak
        } else {
            StrengthLevel::Medium
        }
    }

    /// Lowercase level name, stable across versions.
    ///
    /// Display layers key their per-level lookup tables on these names.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Empty => "empty",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StrengthLevel`] from a string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strength level: {0:?}")]
pub struct ParseStrengthLevelError(String);

impl FromStr for StrengthLevel {
    type Err = ParseStrengthLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(StrengthLevel::Empty),
            "weak" => Ok(StrengthLevel::Weak),
            "medium" => Ok(StrengthLevel::Medium),
            "strong" => Ok(StrengthLevel::Strong),
            other => Err(ParseStrengthLevelError(other.to_string())),
        }
    }
}

/// Outcome of a single requirement check, one checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementCheck {
    pub id: RequirementId,
    pub label: &'static str,
    pub satisfied: bool,
}

/// A full strength evaluation: the overall level plus the per-requirement
/// outcomes, in requirement-table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub level: StrengthLevel,
    pub checks: Vec<RequirementCheck>,
}

impl StrengthReport {
    /// Number of satisfied requirements.
    pub fn score(&self) -> usize {
        self.checks.iter().filter(|check| check.satisfied).count()
    }
}
