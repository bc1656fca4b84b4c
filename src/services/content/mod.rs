//! 教案 / 笔记生成
//!
//! 请求校验 → prompt 模板 → 单次调用生成服务

pub mod prompt;
pub mod request;
mod service;

pub use prompt::{Prompt, PromptBuilder};
pub use request::{
    ContentKind, ContentRequest, ContentSpec, ContentType, LessonParams, Syllabus,
};
pub use service::ContentService;
