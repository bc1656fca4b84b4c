use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{RoutesConfig, StaticConfig, validators::validate_static_config};
use crate::services::ContentService;
use crate::services::generation::build_generator;

pub struct StartupContext {
    pub content_service: Arc<ContentService>,
    pub route_config: RoutesConfig,
}

/// 准备服务器启动的上下文
///
/// 校验配置、创建生成服务客户端和 ContentService。
pub fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    validate_static_config(config).context("Invalid configuration")?;

    let generator = build_generator(&config.generation);
    let content_service = Arc::new(ContentService::new(generator, &config.generation));

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        content_service,
        route_config: config.routes.clone(),
    })
}
