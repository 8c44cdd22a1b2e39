//! Guards that establish who is making the request

use actix_web::HttpRequest;
use async_trait::async_trait;
use tracing::debug;

use super::{BasicCredentials, Guard, RequestContext, app_service};
use crate::errors::{Result, ServiceError};
use crate::services::AuthService;

fn credentials(req: &HttpRequest) -> Result<BasicCredentials> {
    BasicCredentials::from_request(req).ok_or_else(ServiceError::missing_credentials)
}

/// Basic auth as `user id : password`
pub struct LoginRequired;

#[async_trait(?Send)]
impl Guard for LoginRequired {
    fn name(&self) -> &'static str {
        "login_required"
    }

    async fn check(&self, req: &HttpRequest, ctx: &mut RequestContext) -> Result<()> {
        let creds = credentials(req)?;
        let auth = app_service::<AuthService>(req)?;

        let user = auth
            .authenticate_user(&creds.username, &creds.password)
            .await?;
        debug!("Authenticated user {}", user.id);
        ctx.user = Some(user);
        Ok(())
    }
}

/// Basic auth as `api key id : secret`. Binds the key and its owner.
pub struct ApiKeyRequired;

#[async_trait(?Send)]
impl Guard for ApiKeyRequired {
    fn name(&self) -> &'static str {
        "api_key_required"
    }

    async fn check(&self, req: &HttpRequest, ctx: &mut RequestContext) -> Result<()> {
        let creds = credentials(req)?;
        let auth = app_service::<AuthService>(req)?;

        let (key, owner) = auth
            .authenticate_api_key(&creds.username, &creds.password)
            .await?;
        debug!("Authenticated API key {} (user {})", key.id, owner.id);
        ctx.api_key = Some(key);
        ctx.user = Some(owner);
        Ok(())
    }
}

/// Basic auth as `super user id : password`
pub struct SuperUserRequired;

#[async_trait(?Send)]
impl Guard for SuperUserRequired {
    fn name(&self) -> &'static str {
        "super_user_required"
    }

    async fn check(&self, req: &HttpRequest, ctx: &mut RequestContext) -> Result<()> {
        let creds = credentials(req)?;
        let auth = app_service::<AuthService>(req)?;

        let super_user = auth
            .authenticate_super_user(&creds.username, &creds.password)
            .await?;
        debug!("Authenticated super user {}", super_user.id);
        ctx.super_user = Some(super_user);
        Ok(())
    }
}
