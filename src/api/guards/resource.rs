//! Guards that bind or check the target resource

use actix_web::HttpRequest;
use async_trait::async_trait;

use super::{Guard, RequestContext, app_service};
use crate::errors::{Result, ServiceError};
use crate::services::BookmarkService;
use crate::utils::is_valid_bookmark_id;

pub const INVALID_BOOKMARK_ID_MESSAGE: &str = "Bookmark id must be 6 alphanumeric characters";

/// Loads the bookmark named by the path segment `id`
pub struct VerifyBookmark;

#[async_trait(?Send)]
impl Guard for VerifyBookmark {
    fn name(&self) -> &'static str {
        "verify_bookmark"
    }

    async fn check(&self, req: &HttpRequest, ctx: &mut RequestContext) -> Result<()> {
        let id = req.match_info().get("id").unwrap_or_default();
        if !is_valid_bookmark_id(id) {
            return Err(ServiceError::bad_request(INVALID_BOOKMARK_ID_MESSAGE));
        }

        let bookmarks = app_service::<BookmarkService>(req)?;
        ctx.bookmark = Some(bookmarks.get_bookmark(id).await?);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Target {
    PathParam(&'static str),
    BookmarkOwner,
}

/// The bound user must be the owner of the target
pub struct IsAuthorized {
    target: Target,
}

impl IsAuthorized {
    /// Target user id comes from the named path segment
    pub fn path_user(param: &'static str) -> Self {
        Self {
            target: Target::PathParam(param),
        }
    }

    /// Target user id is the owner of the bookmark bound by [`VerifyBookmark`]
    pub fn bookmark_owner() -> Self {
        Self {
            target: Target::BookmarkOwner,
        }
    }

    fn target_user_id(&self, req: &HttpRequest, ctx: &RequestContext) -> Option<i32> {
        match self.target {
            Target::PathParam(param) => req.match_info().get(param)?.parse().ok(),
            Target::BookmarkOwner => ctx.bookmark.as_ref().map(|b| b.user_id),
        }
    }
}

#[async_trait(?Send)]
impl Guard for IsAuthorized {
    fn name(&self) -> &'static str {
        "is_authorized"
    }

    async fn check(&self, req: &HttpRequest, ctx: &mut RequestContext) -> Result<()> {
        let principal = ctx.user.as_ref().ok_or_else(ServiceError::not_owner)?;

        match self.target_user_id(req, ctx) {
            Some(owner) if owner == principal.id => Ok(()),
            _ => Err(ServiceError::not_owner()),
        }
    }
}
