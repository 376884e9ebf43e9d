//! Password Hashing and Verification
//!
//! Argon2id hashing with:
//! - Zeroization of plaintext material on drop
//! - Constant-time verification
//! - PHC string storage format
//!
//! Validation here is deliberately limited to "not empty": the only
//! credential in the system is the seeded operator account, so there is no
//! signup surface that would justify a password policy.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password handling errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Plaintext is empty or whitespace-only
    #[error("Password cannot be empty")]
    Empty,

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`, and `Debug` output is redacted, so the
/// plaintext can neither be copied around nor end up in logs.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a clear text password, normalizing Unicode with NFKC first.
    ///
    /// Rejects empty or whitespace-only input.
    pub fn new(raw: String) -> Result<Self, PasswordError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordError::Empty);
        }

        Ok(Self(normalized))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh random salt.
    pub fn hash(&self) -> Result<HashedPassword, PasswordError> {
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Hashed password in PHC string format
///
/// Carries algorithm, parameters, salt, and digest; safe to persist.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string loaded from storage.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// Argon2 compares digests in constant time internally.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
