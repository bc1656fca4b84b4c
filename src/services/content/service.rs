use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use super::prompt::PromptBuilder;
use super::request::ContentRequest;
use crate::config::GenerationConfig;
use crate::errors::{EdunjemaError, Result};
use crate::services::generation::{GenerationRequest, TextGenerator};

/// Content Service
///
/// 每个请求只调用一次生成服务，不重试。
pub struct ContentService {
    generator: Arc<dyn TextGenerator>,
    prompts: PromptBuilder,
    model: String,
    temperature: f32,
}

impl ContentService {
    pub fn new(generator: Arc<dyn TextGenerator>, config: &GenerationConfig) -> Self {
        Self {
            generator,
            prompts: PromptBuilder::from_config(config),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// 校验请求并解析出发给生成服务的参数
    pub fn prepare(&self, request: &ContentRequest) -> Result<GenerationRequest> {
        let spec = request.validate()?;
        let prompt = self.prompts.build(&spec);
        debug!(
            "Prepared {} prompt for {} syllabus ({} chars)",
            spec.kind.content_type(),
            spec.syllabus.name(),
            prompt.user.len()
        );

        Ok(GenerationRequest {
            model: self.model.clone(),
            system: prompt.system.to_string(),
            prompt: prompt.user,
            max_tokens: prompt.max_tokens,
            temperature: self.temperature,
        })
    }

    /// 生成内容
    ///
    /// - 校验失败：`EdunjemaError::Validation`
    /// - 上游报错：`EdunjemaError::Generation`
    /// - 上游返回空文本：`EdunjemaError::EmptyCompletion`
    pub async fn generate(&self, request: &ContentRequest) -> Result<String> {
        let generation = self.prepare(request)?;
        let start = Instant::now();

        let text = self.generator.generate(&generation).await.map_err(|e| {
            error!("Error calling {} API: {}", self.generator.name(), e);
            e
        })?;

        if text.trim().is_empty() {
            warn!(
                "{} returned no content after {:?}",
                self.generator.name(),
                start.elapsed()
            );
            return Err(EdunjemaError::empty_completion(format!(
                "{} returned an empty completion",
                self.generator.name()
            )));
        }

        info!(
            "Generated {} characters with {} in {:?} (max_tokens {})",
            text.chars().count(),
            self.model,
            start.elapsed(),
            generation.max_tokens
        );
        Ok(text)
    }

    pub fn provider_name(&self) -> &'static str {
        self.generator.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
