//! Argon2id 密码哈希
//!
//! Used for user passwords and the super user password. API key secrets are
//! not hashed.

use argon2::Argon2;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::errors::ServiceError;

#[derive(Debug)]
pub enum PasswordError {
    /// Hashing itself failed (parameters, output length)
    Hash(password_hash::Error),
    /// The stored value is not a PHC hash string
    MalformedHash(password_hash::Error),
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hash(e) => write!(f, "Failed to hash password: {}", e),
            Self::MalformedHash(e) => write!(f, "Stored password hash is malformed: {}", e),
        }
    }
}

impl std::error::Error for PasswordError {}

impl From<PasswordError> for ServiceError {
    fn from(err: PasswordError) -> Self {
        ServiceError::internal(err.to_string())
    }
}

/// Hash with a fresh random salt, returned in PHC string format
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

/// A wrong password is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let hash = PasswordHash::new(stored).map_err(PasswordError::MalformedHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok())
}
