//! Password hashing.
//!
//! Stored credentials are salted bcrypt hashes; comparison goes through
//! `bcrypt::verify` rather than string equality.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] bcrypt::BcryptError),
}

/// Hash a plaintext password for storage.
pub fn hash(plain: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(PasswordError::Hash)
}

/// Check a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch (logged, not surfaced).
pub fn verify(plain: &str, hashed: &str) -> bool {
    match bcrypt::verify(plain, hashed) {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!("stored password hash could not be verified: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_original_only() {
        let hashed = hash("hunter2").unwrap();
        assert!(verify("hunter2", &hashed));
        assert!(!verify("hunter3", &hashed));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert!(!verify("hunter2", "not-a-bcrypt-hash"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash("same-password").unwrap();
        let b = hash("same-password").unwrap();
        assert_ne!(a, b);
    }
}
