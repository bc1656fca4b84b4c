use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::trace;

use super::types::HealthResponse;
use crate::services::ContentService;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// Health Service
///
/// 不探测上游生成服务：探针需要快速响应，而上游调用按 token 计费。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<Arc<ContentService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            provider: service.provider_name().to_string(),
            model: service.model().to_string(),
            timestamp: now.to_rfc3339(),
            uptime,
        })
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
