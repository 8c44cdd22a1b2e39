use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};

use super::helpers::{created_response, json_response, parse_form, require_fields};
use super::types::{BookmarkEnvelope, BookmarkResponse, BookmarksEnvelope, CreateBookmarkForm};
use crate::api::constants::BOOKMARKS_PATH;
use crate::api::guards::RequestContext;
use crate::errors::Result;
use crate::services::{BookmarkService, CreateBookmarkRequest};

/// POST /bookmarks
pub async fn create_bookmark(
    req: HttpRequest,
    body: web::Bytes,
    ctx: RequestContext,
    bookmarks: web::Data<BookmarkService>,
) -> Result<HttpResponse> {
    let owner = ctx.require_user()?;
    let form: CreateBookmarkForm = parse_form(&req, &body)?;
    require_fields(&[("url", form.url.as_ref())])?;

    let bookmark = bookmarks
        .create_bookmark(
            owner.id,
            CreateBookmarkRequest {
                url: form.url.unwrap_or_default(),
                follow_redirects: form.follow_redirects,
            },
        )
        .await?;

    let location = format!("{}/{}", BOOKMARKS_PATH, bookmark.id);
    Ok(created_response(
        &location,
        BookmarkEnvelope {
            bookmark: bookmark.into(),
        },
    ))
}

/// GET /bookmarks
pub async fn list_bookmarks(
    ctx: RequestContext,
    bookmarks: web::Data<BookmarkService>,
) -> Result<HttpResponse> {
    let owner = ctx.require_user()?;
    let list = bookmarks.list_bookmarks(owner.id).await?;
    Ok(json_response(
        StatusCode::OK,
        BookmarksEnvelope {
            bookmarks: list.into_iter().map(BookmarkResponse::from).collect(),
        },
    ))
}

/// GET /bookmarks/{id}
pub async fn get_bookmark(
    req: HttpRequest,
    ctx: RequestContext,
    bookmarks: web::Data<BookmarkService>,
) -> Result<HttpResponse> {
    let bookmark = ctx.require_bookmark()?.clone();

    let ip = req.peer_addr().map(|addr| addr.ip().to_string());
    bookmarks.record_access(&bookmark.id, ip).await;

    Ok(json_response(
        StatusCode::OK,
        BookmarkEnvelope {
            bookmark: bookmark.into(),
        },
    ))
}
