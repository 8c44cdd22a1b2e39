use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{bookmark_to_active_model, model_to_bookmark};
use crate::errors::Result;
use crate::storage::models::Bookmark;

use migration::entities::bookmark;

impl SeaOrmStorage {
    pub async fn bookmark_exists(&self, id: &str) -> Result<bool> {
        let count = bookmark::Entity::find_by_id(id.to_string())
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// 插入书签。主键冲突映射为 `Conflict`
    pub async fn insert_bookmark(&self, bookmark: &Bookmark) -> Result<Bookmark> {
        let model = bookmark_to_active_model(bookmark).insert(&self.db).await?;
        debug!("Inserted bookmark {} for user {}", model.id, model.user_id);
        Ok(model_to_bookmark(model))
    }

    pub async fn get_bookmark(&self, id: &str) -> Result<Option<Bookmark>> {
        let model = bookmark::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_bookmark))
    }

    pub async fn list_bookmarks_for_user(&self, user_id: i32) -> Result<Vec<Bookmark>> {
        let models = bookmark::Entity::find()
            .filter(bookmark::Column::UserId.eq(user_id))
            .order_by_asc(bookmark::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_bookmark).collect())
    }
}
