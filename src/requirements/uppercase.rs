//! Uppercase requirement - checks for at least one uppercase ASCII letter.

use secrecy::{ExposeSecret, SecretString};

/// Satisfied when the password contains at least one character in
/// `'A'..='Z'`. Uppercase letters outside ASCII do not count.
pub(super) fn uppercase_requirement(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}
