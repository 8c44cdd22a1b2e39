//! User registration and lookup

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::{Result, ServiceError};
use crate::storage::{NewUser, SeaOrmStorage, User};
use crate::utils::password::hash_password;

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_EMAIL_LEN: usize = 256;

/// Request to register a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct UserService {
    storage: Arc<SeaOrmStorage>,
}

impl UserService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// 注册用户，密码以 Argon2 哈希保存
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        let name = req.name.trim();
        let email = req.email.trim();

        if name.chars().count() > MAX_NAME_LEN {
            return Err(ServiceError::bad_request(format!(
                "Name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(ServiceError::bad_request(format!(
                "Email must be at most {} characters",
                MAX_EMAIL_LEN
            )));
        }

        let password_hash = hash_password(&req.password).map_err(|e| {
            error!("Failed to hash password: {}", e);
            ServiceError::from(e)
        })?;

        let user = self
            .storage
            .create_user(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!("UserService: registered user {}", user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: i32) -> Result<User> {
        self.storage
            .get_user(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("User {} not found", id)))
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.storage.list_users().await
    }
}
