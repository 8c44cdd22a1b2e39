use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use super::helpers::{created_response, json_response};
use super::types::{ApiKeyEnvelope, ApiKeyResponse, ApiKeysEnvelope};
use crate::api::constants::API_KEYS_PATH;
use crate::api::guards::RequestContext;
use crate::errors::Result;
use crate::services::ApiKeyService;

/// POST /api_keys
///
/// The secret is only ever returned here and in the listing below.
pub async fn create_api_key(
    ctx: RequestContext,
    api_keys: web::Data<ApiKeyService>,
) -> Result<HttpResponse> {
    let owner = ctx.require_user()?;
    let key = api_keys.issue(owner.id).await?;
    Ok(created_response(
        API_KEYS_PATH,
        ApiKeyEnvelope {
            api_key: key.into(),
        },
    ))
}

/// GET /api_keys
pub async fn list_api_keys(
    ctx: RequestContext,
    api_keys: web::Data<ApiKeyService>,
) -> Result<HttpResponse> {
    let owner = ctx.require_user()?;
    let keys = api_keys.list_for_user(owner.id).await?;
    Ok(json_response(
        StatusCode::OK,
        ApiKeysEnvelope {
            api_keys: keys.into_iter().map(ApiKeyResponse::from).collect(),
        },
    ))
}
