//! Route table

use actix_web::web;

use super::{api_keys, bookmarks, front, users};
use crate::api::constants::{API_KEYS_PATH, BOOKMARKS_PATH, USERS_PATH};
use crate::api::guards::{
    ApiKeyRequired, IsAuthorized, LoginRequired, SuperUserRequired, VerifyBookmark,
};
use crate::api::middleware::GuardChain;

fn super_user() -> GuardChain {
    GuardChain::new().with(SuperUserRequired)
}

fn login() -> GuardChain {
    GuardChain::new().with(LoginRequired)
}

fn api_key() -> GuardChain {
    GuardChain::new().with(ApiKeyRequired)
}

/// Guards wrap each route, not the resource, so an unsupported method is a
/// 405 before any credential check.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(front::welcome)))
        .service(
            web::resource(USERS_PATH)
                .route(web::post().to(users::create_user).wrap(super_user()))
                .route(web::get().to(users::list_users).wrap(super_user())),
        )
        .service(
            web::resource(format!("{}/{{id}}", USERS_PATH)).route(
                web::get()
                    .to(users::get_user)
                    .wrap(login().with(IsAuthorized::path_user("id"))),
            ),
        )
        .service(
            web::resource(BOOKMARKS_PATH)
                .route(web::post().to(bookmarks::create_bookmark).wrap(api_key()))
                .route(web::get().to(bookmarks::list_bookmarks).wrap(api_key())),
        )
        .service(
            web::resource(format!("{}/{{id}}", BOOKMARKS_PATH)).route(
                web::get().to(bookmarks::get_bookmark).wrap(
                    api_key()
                        .with(VerifyBookmark)
                        .with(IsAuthorized::bookmark_owner()),
                ),
            ),
        )
        .service(
            web::resource(API_KEYS_PATH)
                .route(web::post().to(api_keys::create_api_key).wrap(login()))
                .route(web::get().to(api_keys::list_api_keys).wrap(login())),
        );
}
