use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::errors::{Result, ServiceError};
use crate::storage::{ApiKey, Bookmark, SuperUser, User};

/// Principals and resources bound by the guard chain
///
/// Stored in request extensions once every guard has passed; handlers take it
/// as an extractor.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<User>,
    pub api_key: Option<ApiKey>,
    pub super_user: Option<SuperUser>,
    pub bookmark: Option<Bookmark>,
}

impl RequestContext {
    pub fn require_user(&self) -> Result<&User> {
        self.user
            .as_ref()
            .ok_or_else(|| ServiceError::internal("No user bound to request"))
    }

    pub fn require_bookmark(&self) -> Result<&Bookmark> {
        self.bookmark
            .as_ref()
            .ok_or_else(|| ServiceError::internal("No bookmark bound to request"))
    }
}

impl FromRequest for RequestContext {
    type Error = ServiceError;
    type Future = Ready<Result<Self>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<RequestContext>()
                .cloned()
                .ok_or_else(|| ServiceError::internal("Route is missing its guard chain")),
        )
    }
}
