//! API 模块常量定义
//!
//! 对外返回的错误信息和请求限制。

/// 请求体大小上限（64 KiB）
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// 请求 ID 响应头
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 客户端传入的请求 ID 最大长度
pub const MAX_REQUEST_ID_LEN: usize = 128;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body.";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body is too large.";
pub const EMPTY_COMPLETION_MESSAGE: &str = "OpenAI did not return any content.";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content from OpenAI.";
