use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{ContentResponse, ErrorResponse};
use crate::api::constants::{
    EMPTY_COMPLETION_MESSAGE, GENERATION_FAILED_MESSAGE, INVALID_JSON_MESSAGE, MAX_BODY_BYTES,
    PAYLOAD_TOO_LARGE_MESSAGE,
};
use crate::errors::EdunjemaError;
use crate::services::ContentService;
use crate::services::content::ContentRequest;

/// 内容生成接口
pub struct ContentApiService;

impl ContentApiService {
    pub async fn generate_content(
        service: web::Data<Arc<ContentService>>,
        body: web::Json<ContentRequest>,
    ) -> impl Responder {
        debug!("Received content generation request");

        match service.generate(&body).await {
            Ok(content) => HttpResponse::Ok().json(ContentResponse { content }),
            Err(e) => error_response(&e),
        }
    }
}

/// 把业务错误映射为 HTTP 响应
///
/// - Validation → 400，error 为校验信息
/// - EmptyCompletion → 500
/// - 其余 → 500，details 为上游错误
pub fn error_response(err: &EdunjemaError) -> HttpResponse {
    match err {
        EdunjemaError::Validation(msg) => {
            debug!("Rejected content request: {}", msg);
            HttpResponse::BadRequest().json(ErrorResponse::new(msg.as_str()))
        }
        EdunjemaError::EmptyCompletion(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new(EMPTY_COMPLETION_MESSAGE))
        }
        other => HttpResponse::InternalServerError().json(ErrorResponse::with_details(
            GENERATION_FAILED_MESSAGE,
            other.message(),
        )),
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let details = err.to_string();
    warn!("Rejected request body: {}", details);

    let response = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorResponse::new(PAYLOAD_TOO_LARGE_MESSAGE))
        }
        _ => HttpResponse::BadRequest()
            .json(ErrorResponse::with_details(INVALID_JSON_MESSAGE, details)),
    };

    InternalError::from_response(err, response).into()
}

/// JSON 提取配置：限制大小，不强制 Content-Type
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// 内容生成路由配置
pub fn content_routes() -> actix_web::Scope {
    web::scope("").app_data(json_config()).route(
        "/generate-content",
        web::post().to(ContentApiService::generate_content),
    )
}
