//! Server mode
//!
//! Configures and starts the HTTP server with all routes.

use actix_web::middleware::{DefaultHeaders, from_fn};
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::request_id;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {}", e);
            e
        })?;

    let storage = startup.storage.clone();
    let state = startup.state.clone();

    let workers = config.server.workers.clamp(1, 32);
    warn!("Using {} worker threads for the server", workers);

    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(from_fn(request_id))
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
            .configure(|cfg| state.configure(cfg))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .disable_signals()
        .run();

    let handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::wait_for_signal() => {
            handle.stop(true).await;
            warn!("Graceful shutdown: HTTP workers stopped");
        }
    }

    lifetime::shutdown::close_storage(&storage).await;
    Ok(())
}
