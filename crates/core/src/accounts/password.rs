//! Password strength classification and hashing

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use crate::error::Result;

/// Symbols that count toward password strength
const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Password strength buckets
///
/// One point each for: length >= 8, an uppercase letter, a lowercase
/// letter, a digit, and a symbol. Two points or fewer is Weak and is
/// rejected at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Classify a password by counting satisfied criteria
    pub fn classify(password: &str) -> Self {
        let checks = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| SYMBOLS.contains(c)),
        ];

        match checks.iter().filter(|ok| **ok).count() {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Whether the strength is acceptable for registration
    pub fn is_acceptable(self) -> bool {
        self >= Self::Medium
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash string
///
/// A malformed stored hash verifies as false; the caller treats it like
/// any other mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_passwords_are_weak() {
        assert_eq!(PasswordStrength::classify(""), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("abc"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify("Ab1"), PasswordStrength::Weak);
    }

    #[test]
    fn test_three_criteria_is_medium() {
        // length + lowercase + digit
        assert_eq!(
            PasswordStrength::classify("abcdefg1"),
            PasswordStrength::Medium
        );
    }

    #[test]
    fn test_four_criteria_is_good() {
        // length + upper + lower + digit
        assert_eq!(
            PasswordStrength::classify("Abcdefg1"),
            PasswordStrength::Good
        );
    }

    #[test]
    fn test_all_criteria_is_strong() {
        assert_eq!(
            PasswordStrength::classify("Abcdef1!"),
            PasswordStrength::Strong
        );
    }

    #[test]
    fn test_weak_is_not_acceptable() {
        assert!(!PasswordStrength::Weak.is_acceptable());
        assert!(PasswordStrength::Medium.is_acceptable());
        assert!(PasswordStrength::Good.is_acceptable());
        assert!(PasswordStrength::Strong.is_acceptable());
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Correct1!").unwrap();
        assert!(verify_password("Correct1!", &hash));
        assert!(!verify_password("Wrong1!", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("Correct1!").unwrap();
        let b = hash_password("Correct1!").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
