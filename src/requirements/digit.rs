//! Digit requirement - checks for at least one decimal digit.

use secrecy::{ExposeSecret, SecretString};

/// Satisfied when the password contains at least one character in
/// `'0'..='9'`. Digits from other scripts do not count.
pub(super) fn digit_requirement(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_requirement_present() {
        let pwd = SecretString::new("abc1def".to_string().into());
        assert!(digit_requirement(&pwd));
    }

    #[test]
    fn test_digit_requirement_absent() {
        let pwd = SecretString::new("abcdef!".to_string().into());
        assert!(!digit_requirement(&pwd));
    }

    #[test]
    fn test_digit_requirement_ignores_non_ascii_digits() {
        // Arabic-Indic five is a digit, but outside '0'..='9'.
        let pwd = SecretString::new("abc٥def".to_string().into());
        assert!(!digit_requirement(&pwd));
    }

    #[test]
    fn test_digit_requirement_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!digit_requirement(&pwd));
    }
}
