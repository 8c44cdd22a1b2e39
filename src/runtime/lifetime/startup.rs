use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::api::ApiState;
use crate::config::StaticConfig;
use crate::services::{HttpUrlResolver, UrlResolver};
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub state: ApiState,
}

/// 准备服务器启动的上下文
/// 包括存储、URL 探测客户端和各个 service
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let super_user_id = config.auth.super_user_id;
    if storage
        .get_super_user(super_user_id)
        .await
        .context("Failed to look up super user")?
        .is_none()
    {
        warn!(
            "Super user {} has no password yet; user management is unavailable until \
             `bookmarks-service superuser` is run",
            super_user_id
        );
    }

    let resolver: Arc<dyn UrlResolver> = Arc::new(HttpUrlResolver::new(&config.fetch));
    info!(
        "URL verification via {} (timeout {}s, user agent {})",
        resolver.name(),
        config.fetch.timeout_secs,
        config.fetch.user_agent()
    );

    let state = ApiState::new(config, storage.clone(), resolver);

    debug!("Pre-startup completed in {:?}", start_time.elapsed());
    Ok(StartupContext { storage, state })
}
