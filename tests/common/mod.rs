//! Shared setup for the HTTP integration tests
//!
//! Each test gets its own SQLite file in a temp dir and a stub URL resolver
//! so no test touches the network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::App;
use actix_web::middleware::from_fn;
use async_trait::async_trait;
use tempfile::TempDir;

use bookmarks_service::api::ApiState;
use bookmarks_service::api::guards::BasicCredentials;
use bookmarks_service::api::middleware::request_id;
use bookmarks_service::config::{DatabaseConfig, StaticConfig};
use bookmarks_service::services::{FetchError, UrlResolver};
use bookmarks_service::storage::{ApiKey, NewUser, SeaOrmStorage, User};
use bookmarks_service::utils::password::hash_password;
use bookmarks_service::utils::{generate_api_key_id, generate_api_key_secret};

pub const SUPER_USER_PASSWORD: &str = "super-secret-pw";

/// Resolver that answers from a fixed table
///
/// - URLs registered with `redirect` resolve to their target when redirects are followed
/// - URLs registered with `fail` return the given error
/// - anything else resolves to itself
#[derive(Default)]
pub struct StubResolver {
    redirects: Mutex<HashMap<String, String>>,
    failures: Mutex<HashMap<String, FetchError>>,
    calls: Mutex<Vec<(String, bool)>>,
}

impl StubResolver {
    pub fn redirect(&self, from: &str, to: &str) {
        self.redirects
            .lock()
            .unwrap()
            .insert(from.to_string(), to.to_string());
    }

    pub fn fail(&self, url: &str, err: FetchError) {
        self.failures.lock().unwrap().insert(url.to_string(), err);
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlResolver for StubResolver {
    async fn resolve(&self, url: &str, follow_redirects: bool) -> Result<String, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), follow_redirects));

        if let Some(err) = self.failures.lock().unwrap().get(url) {
            return Err(err.clone());
        }

        if follow_redirects && let Some(target) = self.redirects.lock().unwrap().get(url) {
            return Ok(target.clone());
        }

        Ok(url.to_string())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub struct TestEnv {
    _dir: TempDir,
    pub config: StaticConfig,
    pub storage: Arc<SeaOrmStorage>,
    pub resolver: Arc<StubResolver>,
    pub state: ApiState,
}

impl TestEnv {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("bookmarks_test.db");

        let mut config = StaticConfig::default();
        config.database = DatabaseConfig {
            database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
            pool_size: 2,
            timeout: 5,
        };

        let storage = Arc::new(
            SeaOrmStorage::new(&config.database, "sqlite")
                .await
                .expect("Failed to create storage"),
        );

        let hash = hash_password(SUPER_USER_PASSWORD).expect("hash");
        storage
            .upsert_super_user(config.auth.super_user_id, &hash)
            .await
            .expect("Failed to seed super user");

        let resolver = Arc::new(StubResolver::default());
        let state = ApiState::new(&config, storage.clone(), resolver.clone());

        Self {
            _dir: dir,
            config,
            storage,
            resolver,
            state,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let state = self.state.clone();
        App::new()
            .wrap(from_fn(request_id))
            .configure(move |cfg| state.configure(cfg))
    }

    /// Basic auth header for the configured super user
    pub fn super_user_auth(&self) -> String {
        basic(&self.config.auth.super_user_id.to_string(), SUPER_USER_PASSWORD)
    }

    pub async fn seed_user(&self, name: &str, email: &str, password: &str) -> User {
        self.storage
            .create_user(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: hash_password(password).expect("hash"),
            })
            .await
            .expect("Failed to seed user")
    }

    pub async fn seed_api_key(&self, user_id: i32) -> ApiKey {
        self.storage
            .insert_api_key(&ApiKey {
                id: generate_api_key_id(),
                secret: generate_api_key_secret(),
                user_id,
            })
            .await
            .expect("Failed to seed api key")
    }
}

pub fn basic(username: &str, password: &str) -> String {
    BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
    .to_header_value()
}

pub fn user_auth(user: &User, password: &str) -> String {
    basic(&user.id.to_string(), password)
}

pub fn key_auth(key: &ApiKey) -> String {
    basic(&key.id, &key.secret)
}
