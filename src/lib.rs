//! Password strength classification library
//!
//! This library provides the reusable core of a live password strength
//! meter: a classifier that scores a candidate password against a fixed,
//! ordered requirement set, plus per-requirement results for rendering a
//! checklist.
//!
//! Classification is pure and synchronous: the same password always yields
//! the same level, and nothing is cached between calls.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! assert_eq!(report.level, StrengthLevel::Strong);
//! for check in &report.checks {
//!     println!("[{}] {}", if check.satisfied { "x" } else { " " }, check.label);
//! }
//! ```

// Internal modules
mod classifier;
mod requirements;
mod types;

// Public API
pub use classifier::{classify_password_strength, evaluate_password_strength};
pub use requirements::{REQUIREMENTS, Requirement, RequirementPredicate};
pub use types::{
    ParseStrengthLevelError, RequirementCheck, RequirementId, StrengthLevel, StrengthReport,
};
