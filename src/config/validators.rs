//! 启动配置校验
//!
//! 配置错误在启动时直接失败，而不是等到第一次请求。

use tracing::warn;

use super::StaticConfig;
use crate::errors::{EdunjemaError, Result};

/// 校验静态配置
///
/// - temperature 必须在 0.0..=2.0
/// - token 预算不能为 0
/// - base_url 不能为空
/// - 路由前缀必须以 `/` 开头
///
/// api_key 为空只记录警告：生成请求会在上游返回 401 时以 500 报告。
pub fn validate_static_config(config: &StaticConfig) -> Result<()> {
    let generation = &config.generation;

    if !(0.0..=2.0).contains(&generation.temperature) {
        return Err(EdunjemaError::config(format!(
            "generation.temperature must be between 0.0 and 2.0, got {}",
            generation.temperature
        )));
    }

    if generation.lesson_plan_max_tokens == 0 || generation.notes_max_tokens == 0 {
        return Err(EdunjemaError::config(
            "generation token budgets must be greater than zero",
        ));
    }

    if generation.base_url.trim().is_empty() {
        return Err(EdunjemaError::config("generation.base_url must not be empty"));
    }

    for (key, prefix) in [
        ("routes.api_prefix", &config.routes.api_prefix),
        ("routes.health_prefix", &config.routes.health_prefix),
    ] {
        if !prefix.starts_with('/') {
            return Err(EdunjemaError::config(format!(
                "{} must start with '/', got '{}'",
                key, prefix
            )));
        }
    }

    if config.server.workers == 0 {
        return Err(EdunjemaError::config("server.workers must be at least 1"));
    }

    if generation.api_key.is_empty() {
        warn!(
            "generation.api_key is empty (set EDU__GENERATION__API_KEY or {}); \
             generation requests will fail upstream",
            super::API_KEY_FALLBACK_ENV
        );
    }

    Ok(())
}
