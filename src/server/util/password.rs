//! Argon2 password hashing.

use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand_core::OsRng;

use crate::server::error::internal::InternalError;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hashes a password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash could not be parsed");
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
    fn verifies_own_hash() {
        let hash = hash_password("hunter22").unwrap();

        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("hunter23", &hash));
    }

    #[test]
    fn salts_every_hash() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_malformed_stored_hash() {
        assert!(!verify_password("anything", "plain-text"));
    }
}
