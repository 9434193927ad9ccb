//! Password requirements
//!
//! Each module checks one independent aspect of password quality. The fixed
//! requirement table lives here; scoring over it is in the classifier.

mod digit;
mod length;
mod symbol;
mod uppercase;

use secrecy::SecretString;

use crate::types::RequirementId;

use digit::digit_requirement;
use length::length_requirement;
use symbol::symbol_requirement;
use uppercase::uppercase_requirement;

/// Predicate evaluated against the candidate password.
///
/// Predicates are total: they are called with arbitrary user input and must
/// never panic, whatever the string contains.
pub type RequirementPredicate = fn(&SecretString) -> bool;

/// A single password-quality rule: a stable identifier, a human-readable
/// label, and a pure predicate over the candidate password.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    id: RequirementId,
    label: &'static str,
    predicate: RequirementPredicate,
}

impl Requirement {
    /// Creates a requirement from its identifier, display label, and
    /// predicate.
    pub const fn new(
        id: RequirementId,
        label: &'static str,
        predicate: RequirementPredicate,
    ) -> Self {
        Requirement {
            id,
            label,
            predicate,
        }
    }

    /// Identifier of this requirement.
    pub fn id(&self) -> RequirementId {
        self.id
    }

    /// Human-readable label, suitable for a checklist row.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Evaluates this requirement's predicate against the password.
    pub fn is_satisfied_by(&self, password: &SecretString) -> bool {
        (self.predicate)(password)
    }
}

/// The fixed, ordered requirement set.
///
/// Order matters only for display; scoring counts satisfied requirements
/// regardless of position.
pub const REQUIREMENTS: [Requirement; 4] = [
    Requirement::new(
        RequirementId::MinLength,
        "At least 9 characters",
        length_requirement,
    ),
    Requirement::new(RequirementId::Digit, "Includes a number", digit_requirement),
    Requirement::new(RequirementId::Symbol, "Includes a symbol", symbol_requirement),
    Requirement::new(
        RequirementId::Uppercase,
        "Includes uppercase",
        uppercase_requirement,
    ),
];
