//! 请求 / 响应结构

use serde::{Deserialize, Serialize};

/// 成功响应：`{ "content": "..." }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContentResponse {
    pub content: String,
}

/// 失败响应：`{ "error": "...", "details": "..." }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
    pub timestamp: String,
    /// 运行秒数
    pub uptime: u64,
}
