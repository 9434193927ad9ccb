//! Length requirement - checks the minimum character count.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 9;

/// Satisfied when the password contains at least 9 characters.
///
/// Counts Unicode scalar values rather than bytes, so multi-byte characters
/// count once each.
pub(super) fn length_requirement(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_requirement_too_short() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(!length_requirement(&pwd));
    }

    #[test]
    fn test_length_requirement_exactly_minimum() {
        let pwd = SecretString::new("123456789".to_string().into());
        assert!(length_requirement(&pwd));
    }

    #[test]
    fn test_length_requirement_longer() {
        let pwd = SecretString::new("LongEnoughPassword".to_string().into());
        assert!(length_requirement(&pwd));
    }

    #[test]
    fn test_length_requirement_counts_characters_not_bytes() {
        // Eight two-byte characters: 16 bytes but only 8 characters.
        let pwd = SecretString::new("éééééééé".to_string().into());
        assert!(!length_requirement(&pwd));

        let pwd = SecretString::new("ééééééééé".to_string().into());
        assert!(length_requirement(&pwd));
    }

    #[test]
    fn test_length_requirement_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!length_requirement(&pwd));
    }
}
