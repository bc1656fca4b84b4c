//! 文本生成服务模块
//!
//! 统一的生成接口，当前实现：
//! - OpenAI 兼容的 chat completions 接口

mod openai;
mod provider;

pub use openai::OpenAiGenerator;
pub use provider::{GenerationRequest, TextGenerator, build_generator};
