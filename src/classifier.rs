//! Password strength classifier - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::requirements::{REQUIREMENTS, Requirement};
use crate::types::{RequirementCheck, StrengthLevel, StrengthReport};

/// Classifies password strength against an ordered requirement list.
///
/// A zero-length password classifies as [`StrengthLevel::Empty`] without
/// evaluating any requirement. Otherwise every predicate is evaluated
/// independently (no short-circuiting between requirements) and the
/// satisfied count is mapped through [`StrengthLevel::from_score`].
///
/// # Arguments
/// * `password` - The password to classify
/// * `requirements` - The ordered requirement list to score against
///
/// # Returns
/// Exactly one [`StrengthLevel`]. Total over all string inputs: never panics,
/// whatever the password contains.
pub fn classify_password_strength(
    password: &SecretString,
    requirements: &[Requirement],
) -> StrengthLevel {
    if password.expose_secret().is_empty() {
        return StrengthLevel::Empty;
    }

    let score = requirements
        .iter()
        .filter(|requirement| requirement.is_satisfied_by(password))
        .count();

    StrengthLevel::from_score(score, requirements.len())
}

/// Evaluates the fixed requirement set and returns a detailed report.
///
/// The report carries the overall level plus one [`RequirementCheck`] per
/// entry of [`REQUIREMENTS`], in table order, for checklist display. The
/// checklist is produced even for a zero-length password (every row
/// unsatisfied); only the level short-circuits to [`StrengthLevel::Empty`].
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A [`StrengthReport`] containing the level and per-requirement outcomes.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let checks: Vec<RequirementCheck> = REQUIREMENTS
        .iter()
        .map(|requirement| RequirementCheck {
            id: requirement.id(),
            label: requirement.label(),
            satisfied: requirement.is_satisfied_by(password),
        })
        .collect();

    let score = checks.iter().filter(|check| check.satisfied).count();
    let level = if password.expose_secret().is_empty() {
        StrengthLevel::Empty
    } else {
        StrengthLevel::from_score(score, checks.len())
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: {}/{} requirements satisfied, level {}",
        score,
        checks.len(),
        level
    );

    StrengthReport { level, checks }
}
