use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{api_key_to_active_model, model_to_api_key};
use crate::errors::Result;
use crate::storage::models::ApiKey;

use migration::entities::api_key;

impl SeaOrmStorage {
    pub async fn api_key_exists(&self, id: &str) -> Result<bool> {
        let count = api_key::Entity::find_by_id(id.to_string())
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn insert_api_key(&self, key: &ApiKey) -> Result<ApiKey> {
        let model = api_key_to_active_model(key).insert(&self.db).await?;
        debug!("Issued API key {} for user {}", model.id, model.user_id);
        Ok(model_to_api_key(model))
    }

    pub async fn get_api_key(&self, id: &str) -> Result<Option<ApiKey>> {
        let model = api_key::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_api_key))
    }

    pub async fn list_api_keys_for_user(&self, user_id: i32) -> Result<Vec<ApiKey>> {
        let models = api_key::Entity::find()
            .filter(api_key::Column::UserId.eq(user_id))
            .order_by_asc(api_key::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_api_key).collect())
    }
}
