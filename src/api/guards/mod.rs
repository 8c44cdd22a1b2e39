//! Authorization pipeline
//!
//! A route declares an ordered list of guards (see
//! [`GuardChain`](crate::api::middleware::GuardChain)). Each guard either binds
//! data into the [`RequestContext`] or stops the request with an error.

mod basic_auth;
mod context;
mod principal;
mod resource;

use actix_web::{HttpRequest, web};
use async_trait::async_trait;

use crate::errors::{Result, ServiceError};

pub use basic_auth::BasicCredentials;
pub use context::RequestContext;
pub use principal::{ApiKeyRequired, LoginRequired, SuperUserRequired};
pub use resource::{INVALID_BOOKMARK_ID_MESSAGE, IsAuthorized, VerifyBookmark};

#[async_trait(?Send)]
pub trait Guard {
    /// 获取 guard 名称（用于日志）
    fn name(&self) -> &'static str;

    async fn check(&self, req: &HttpRequest, ctx: &mut RequestContext) -> Result<()>;
}

/// Fetch a service registered with `App::app_data`
pub(crate) fn app_service<T: 'static>(req: &HttpRequest) -> Result<web::Data<T>> {
    req.app_data::<web::Data<T>>().cloned().ok_or_else(|| {
        ServiceError::internal(format!(
            "{} is not registered as app data",
            std::any::type_name::<T>()
        ))
    })
}
