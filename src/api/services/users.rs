use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use super::helpers::{created_response, json_response, parse_form, require_fields};
use super::types::{CreateUserForm, UserEnvelope, UserResponse, UsersEnvelope};
use crate::api::constants::USERS_PATH;
use crate::api::guards::RequestContext;
use crate::errors::Result;
use crate::services::{CreateUserRequest, UserService};

/// POST /users
pub async fn create_user(
    req: HttpRequest,
    body: web::Bytes,
    users: web::Data<UserService>,
) -> Result<HttpResponse> {
    let form: CreateUserForm = parse_form(&req, &body)?;
    require_fields(&[
        ("name", form.name.as_ref()),
        ("email", form.email.as_ref()),
        ("password", form.password.as_ref()),
    ])?;

    let user = users
        .create_user(CreateUserRequest {
            name: form.name.unwrap_or_default(),
            email: form.email.unwrap_or_default(),
            password: form.password.unwrap_or_default(),
        })
        .await?;

    info!("API: created user {}", user.id);
    let location = format!("{}/{}", USERS_PATH, user.id);
    Ok(created_response(
        &location,
        UserEnvelope {
            user: user.into(),
        },
    ))
}

/// GET /users
pub async fn list_users(users: web::Data<UserService>) -> Result<HttpResponse> {
    let users = users.list_users().await?;
    Ok(json_response(
        StatusCode::OK,
        UsersEnvelope {
            users: users.into_iter().map(UserResponse::from).collect(),
        },
    ))
}

/// GET /users/{id}
///
/// The guards already matched `{id}` against the authenticated user; the
/// record is re-read so a user deleted in between reports 404.
pub async fn get_user(ctx: RequestContext, users: web::Data<UserService>) -> Result<HttpResponse> {
    let principal = ctx.require_user()?;
    let user = users.get_user(principal.id).await?;
    Ok(json_response(
        StatusCode::OK,
        UserEnvelope { user: user.into() },
    ))
}
