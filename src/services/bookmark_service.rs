//! Bookmark creation and retrieval
//!
//! Creation validates the URL, verifies it with a live GET through the
//! configured [`UrlResolver`], picks a free six character id and persists the
//! resolved URL for the authenticated user.

use std::sync::Arc;

use tracing::{info, warn};

use super::fetcher::UrlResolver;
use crate::errors::{Result, ServiceError};
use crate::storage::{Bookmark, SeaOrmStorage};
use crate::utils::generate_bookmark_id;
use crate::utils::url_validator::validate_url;

/// Upper bound on id re-rolls before giving up
const MAX_ID_ATTEMPTS: usize = 64;

/// Request to create a bookmark
#[derive(Debug, Clone)]
pub struct CreateBookmarkRequest {
    pub url: String,
    pub follow_redirects: bool,
}

pub struct BookmarkService {
    storage: Arc<SeaOrmStorage>,
    resolver: Arc<dyn UrlResolver>,
}

impl BookmarkService {
    pub fn new(storage: Arc<SeaOrmStorage>, resolver: Arc<dyn UrlResolver>) -> Self {
        Self { storage, resolver }
    }

    pub async fn create_bookmark(&self, user_id: i32, req: CreateBookmarkRequest) -> Result<Bookmark> {
        let url = validate_url(&req.url)?;

        let resolved = self
            .resolver
            .resolve(url, req.follow_redirects)
            .await
            .map_err(|e| {
                warn!(
                    "BookmarkService: {} could not verify {}: {}",
                    self.resolver.name(),
                    url,
                    e
                );
                ServiceError::from(e)
            })?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_bookmark_id();
            if self.storage.bookmark_exists(&id).await? {
                continue;
            }

            let bookmark = Bookmark {
                id,
                url: resolved.clone(),
                user_id,
            };

            match self.storage.insert_bookmark(&bookmark).await {
                Ok(saved) => {
                    info!(
                        "BookmarkService: created bookmark '{}' -> '{}' for user {}",
                        saved.id, saved.url, user_id
                    );
                    return Ok(saved);
                }
                // 并发插入同一 id
                Err(ServiceError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(ServiceError::internal(
            "Could not allocate a free bookmark id",
        ))
    }

    pub async fn get_bookmark(&self, id: &str) -> Result<Bookmark> {
        self.storage
            .get_bookmark(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Bookmark '{}' not found", id)))
    }

    pub async fn list_bookmarks(&self, user_id: i32) -> Result<Vec<Bookmark>> {
        self.storage.list_bookmarks_for_user(user_id).await
    }

    /// 记录访问，失败只记日志
    pub async fn record_access(&self, bookmark_id: &str, ip: Option<String>) {
        self.storage.record_request(bookmark_id, ip).await;
    }
}
