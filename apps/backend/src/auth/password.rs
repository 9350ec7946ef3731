//! Argon2 password hashing and verification.
//!
//! Stored hashes are PHC strings. Verification never surfaces a parse or
//! comparison error to callers; any failure reads as "no match" so the login
//! flow stays uniform.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::warn;

use crate::error::AppError;

/// Hash a plaintext password into a PHC string with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Check a plaintext password against a stored PHC hash.
///
/// A malformed stored hash is logged and treated as a non-match; it must not
/// turn into a 500 that reveals the account exists.
pub fn verify_password(stored_hash: &str, plain: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            warn!(error = %e, "stored password hash failed to parse");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn hash_then_verify_matches() {
        let hash = hash_password("Correct1!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "Correct1!"));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("Correct1!").unwrap();
        assert!(!verify_password(&hash, "Wrong1!"));
        assert!(!verify_password(&hash, ""));
    }

    #[test]
    fn verification_is_deterministic() {
        let hash = hash_password("Correct1!").unwrap();
        for _ in 0..3 {
            assert!(verify_password(&hash, "Correct1!"));
            assert!(!verify_password(&hash, "Wrong1!"));
        }
    }

    #[test]
    fn two_hashes_of_same_password_differ() {
        // Fresh salt per hash
        let a = hash_password("Correct1!").unwrap();
        let b = hash_password("Correct1!").unwrap();
        assert_ne!(a, b);
        assert!(verify_password(&a, "Correct1!"));
        assert!(verify_password(&b, "Correct1!"));
    }

    #[test]
    fn malformed_stored_hash_is_a_non_match() {
        assert!(!verify_password("not-a-phc-string", "Correct1!"));
        assert!(!verify_password("", "Correct1!"));
    }
}
