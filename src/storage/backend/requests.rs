//! Bookmark access log

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::warn;

use super::SeaOrmStorage;
use super::converters::model_to_request_log;
use crate::errors::Result;
use crate::storage::models::RequestLog;

use migration::entities::request_log;

impl SeaOrmStorage {
    /// 记录一次书签读取
    ///
    /// Best-effort: a failed insert is logged and swallowed.
    pub async fn record_request(&self, bookmark_id: &str, ip: Option<String>) {
        use sea_orm::ActiveValue::*;

        let active = request_log::ActiveModel {
            id: NotSet,
            bookmark_id: Set(bookmark_id.to_string()),
            ip: Set(ip),
            accessed_at: Set(Utc::now()),
        };

        if let Err(e) = active.insert(&self.db).await {
            warn!("Failed to record request for bookmark {}: {}", bookmark_id, e);
        }
    }

    pub async fn list_requests_for_bookmark(&self, bookmark_id: &str) -> Result<Vec<RequestLog>> {
        let models = request_log::Entity::find()
            .filter(request_log::Column::BookmarkId.eq(bookmark_id))
            .order_by_asc(request_log::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_request_log).collect())
    }
}
