//! OpenAI 兼容的 chat completions 实现
//!
//! ureq 是同步客户端，请求放在 spawn_blocking 中执行。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ureq::Agent;

use super::provider::{GenerationRequest, TextGenerator};
use crate::errors::{EdunjemaError, Result};

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl From<&GenerationRequest> for ChatCompletionRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt.clone(),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// OpenAI chat completions 生成器
///
/// `base_url` 形如 `https://api.openai.com/v1`，请求发往 `{base_url}/chat/completions`
pub struct OpenAiGenerator {
    endpoint: String,
    api_key: String,
    agent: Agent,
}

impl OpenAiGenerator {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build()
            .into();

        Self {
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 同步请求（在 spawn_blocking 中调用）
    fn complete_sync(
        agent: &Agent,
        endpoint: &str,
        api_key: &str,
        body: &ChatCompletionRequest,
    ) -> Result<String> {
        let resp = agent
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => EdunjemaError::generation(format!(
                    "provider responded with HTTP status {}",
                    status
                )),
                other => {
                    warn!("Chat completion request to \"{}\" failed: {}", endpoint, other);
                    EdunjemaError::generation(format!("request to provider failed: {}", other))
                }
            })?;

        let parsed: ChatCompletionResponse = resp.into_body().read_json().map_err(|e| {
            EdunjemaError::generation(format!("invalid provider response: {}", e))
        })?;

        let text = first_choice_text(parsed);

        debug!("Chat completion returned {} bytes", text.len());
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        let body = ChatCompletionRequest::from(request);

        tokio::task::spawn_blocking(move || Self::complete_sync(&agent, &endpoint, &api_key, &body))
            .await
            .map_err(|e| EdunjemaError::generation(format!("generation task failed: {}", e)))?
    }

    fn name(&self) -> &'static str {
        "OpenAI"
    }
}

/// 取第一个 choice 的文本，缺失时为空字符串
fn first_choice_text(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}
