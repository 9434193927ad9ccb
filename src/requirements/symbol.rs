//! Symbol requirement - checks for at least one recognized symbol.

use secrecy::{ExposeSecret, SecretString};

const SYMBOLS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// Satisfied when the password contains at least one of `!@#$%^&*`.
/// The set is fixed; other punctuation does not count.
pub(super) fn symbol_requirement(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SYMBOLS.contains(&c))
}
