use std::sync::Arc;

use tracing::info;

use crate::errors::{Result, ServiceError};
use crate::storage::{ApiKey, SeaOrmStorage};
use crate::utils::{generate_api_key_id, generate_api_key_secret};

const MAX_ID_ATTEMPTS: usize = 16;

pub struct ApiKeyService {
    storage: Arc<SeaOrmStorage>,
}

impl ApiKeyService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Issue a fresh key pair for `user_id`. Only the id is collision-checked.
    pub async fn issue(&self, user_id: i32) -> Result<ApiKey> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_api_key_id();
            if self.storage.api_key_exists(&id).await? {
                continue;
            }

            let key = ApiKey {
                id,
                secret: generate_api_key_secret(),
                user_id,
            };

            match self.storage.insert_api_key(&key).await {
                Ok(saved) => {
                    info!("ApiKeyService: issued key {} for user {}", saved.id, user_id);
                    return Ok(saved);
                }
                Err(ServiceError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(ServiceError::internal("Could not allocate a free API key id"))
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ApiKey>> {
        self.storage.list_api_keys_for_user(user_id).await
    }
}
