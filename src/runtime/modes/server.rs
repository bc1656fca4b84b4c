//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::api::constants::MAX_BODY_BYTES;
use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{AppStartTime, content_routes, health_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// 关闭时等待进行中的生成请求的时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// 单个请求读取请求头的超时时间
const CLIENT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Validates configuration and builds the content service
/// 3. Configures and starts the HTTP server
///
/// Ctrl+C / SIGTERM are handled by actix-web: in-flight generation calls
/// get `SHUTDOWN_TIMEOUT_SECS` to finish.
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: Arc<StaticConfig>) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(&config).map_err(|e| {
        tracing::error!("Server startup failed: {:#}", e);
        e
    })?;

    let content_service = startup.content_service.clone();
    let api_prefix = startup.route_config.api_prefix.clone();
    let health_prefix = startup.route_config.health_prefix.clone();

    let workers = config.server.workers.clamp(1, 32);
    info!("Using {} workers for the server", workers);
    info!(
        "Content generation available at {}/generate-content",
        api_prefix.trim_end_matches('/')
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .app_data(web::Data::new(content_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
            .service(web::scope(&api_prefix).service(content_routes()))
            .service(web::scope(&health_prefix).service(health_routes()))
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(CLIENT_REQUEST_TIMEOUT_MS))
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    server.bind(bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}
