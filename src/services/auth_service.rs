//! Credential checks behind the three Basic-auth schemes
//!
//! Every failure is reported as the same `Unauthorized` error so callers
//! cannot tell an unknown principal from a wrong password.

use std::sync::Arc;

use subtle::ConstantTimeEq;
use tracing::{debug, error};

use crate::errors::{Result, ServiceError};
use crate::storage::{ApiKey, SeaOrmStorage, SuperUser, User};
use crate::utils::password::verify_password;

pub struct AuthService {
    storage: Arc<SeaOrmStorage>,
    super_user_id: i32,
}

impl AuthService {
    pub fn new(storage: Arc<SeaOrmStorage>, super_user_id: i32) -> Self {
        Self {
            storage,
            super_user_id,
        }
    }

    /// username = numeric user id, password = plaintext password
    pub async fn authenticate_user(&self, username: &str, password: &str) -> Result<User> {
        let id = parse_id(username)?;
        let user = self
            .storage
            .get_user(id)
            .await?
            .ok_or_else(ServiceError::invalid_credentials)?;

        if !check_hash(password, &user.password_hash) {
            debug!("Password mismatch for user {}", id);
            return Err(ServiceError::invalid_credentials());
        }
        Ok(user)
    }

    /// username = API key id, password = secret. Returns the key and its owner.
    pub async fn authenticate_api_key(&self, key_id: &str, secret: &str) -> Result<(ApiKey, User)> {
        let key = self
            .storage
            .get_api_key(key_id)
            .await?
            .ok_or_else(ServiceError::invalid_credentials)?;

        if !bool::from(key.secret.as_bytes().ct_eq(secret.as_bytes())) {
            debug!("Secret mismatch for API key {}", key_id);
            return Err(ServiceError::invalid_credentials());
        }

        let owner = self.storage.get_user(key.user_id).await?.ok_or_else(|| {
            error!("API key {} references missing user {}", key.id, key.user_id);
            ServiceError::invalid_credentials()
        })?;

        Ok((key, owner))
    }

    /// username = configured super-user id
    pub async fn authenticate_super_user(&self, username: &str, password: &str) -> Result<SuperUser> {
        let id = parse_id(username)?;
        if id != self.super_user_id {
            return Err(ServiceError::invalid_credentials());
        }

        let super_user = self
            .storage
            .get_super_user(id)
            .await?
            .ok_or_else(ServiceError::invalid_credentials)?;

        if !check_hash(password, &super_user.password_hash) {
            return Err(ServiceError::invalid_credentials());
        }
        Ok(super_user)
    }
}

fn parse_id(username: &str) -> Result<i32> {
    username
        .parse::<i32>()
        .map_err(|_| ServiceError::invalid_credentials())
}

fn check_hash(password: &str, hash: &str) -> bool {
    match verify_password(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            error!("Stored password hash is unreadable: {}", e);
            false
        }
    }
}
