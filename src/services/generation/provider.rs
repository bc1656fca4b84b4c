//! 文本生成 Provider 抽象层

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::openai::OpenAiGenerator;
use crate::config::GenerationConfig;
use crate::errors::Result;

/// 一次生成调用所需的全部参数
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// 文本生成 trait
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 返回生成的文本；上游没有内容时返回空字符串而不是错误
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// 获取 provider 名称（用于日志和健康检查）
    fn name(&self) -> &'static str;
}

/// 根据 GenerationConfig 创建生成器
pub fn build_generator(config: &GenerationConfig) -> Arc<dyn TextGenerator> {
    let generator = OpenAiGenerator::new(&config.base_url, &config.api_key, config.timeout_secs);
    info!(
        "Generation: Initialized {} provider at {} (model {})",
        generator.name(),
        generator.endpoint(),
        config.model
    );
    Arc::new(generator)
}
