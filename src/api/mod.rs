pub mod constants;
pub mod guards;
pub mod middleware;
pub mod services;

use std::sync::Arc;

use actix_web::web;

use crate::config::{ServerConfig, StaticConfig};
use crate::services::{ApiKeyService, AuthService, BookmarkService, UrlResolver, UserService};
use crate::storage::SeaOrmStorage;

/// Everything the handlers and guards pull from app data
///
/// Built once at startup and cloned into each worker's `App`.
#[derive(Clone)]
pub struct ApiState {
    pub server: web::Data<ServerConfig>,
    pub auth: web::Data<AuthService>,
    pub users: web::Data<UserService>,
    pub bookmarks: web::Data<BookmarkService>,
    pub api_keys: web::Data<ApiKeyService>,
}

impl ApiState {
    pub fn new(
        config: &StaticConfig,
        storage: Arc<SeaOrmStorage>,
        resolver: Arc<dyn UrlResolver>,
    ) -> Self {
        Self {
            server: web::Data::new(config.server.clone()),
            auth: web::Data::new(AuthService::new(
                storage.clone(),
                config.auth.super_user_id,
            )),
            users: web::Data::new(UserService::new(storage.clone())),
            bookmarks: web::Data::new(BookmarkService::new(storage.clone(), resolver)),
            api_keys: web::Data::new(ApiKeyService::new(storage)),
        }
    }

    /// Register app data and the route table
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.server.clone())
            .app_data(self.auth.clone())
            .app_data(self.users.clone())
            .app_data(self.bookmarks.clone())
            .app_data(self.api_keys.clone())
            .app_data(web::PayloadConfig::new(constants::MAX_PAYLOAD_SIZE));
        services::configure(cfg);
    }
}
