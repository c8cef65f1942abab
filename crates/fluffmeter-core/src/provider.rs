//! LLM provider boundary.
//!
//! The scorer talks to a [`LlmClient`] trait object so tests can inject
//! deterministic providers; [`OpenAiClient`] is the production
//! implementation for OpenAI-compatible chat-completions endpoints.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::ScorerConfig;
use crate::error::{ScoreError, ScoreResult};

/// A single completion from a provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Raw message content of the first choice.
    pub text: String,
    /// Provider name, e.g. "openai".
    pub provider: String,
    /// Model that produced the completion.
    pub model: String,
}

/// Chat-completion provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send `prompt` as a single user message and return the first choice.
    async fn complete(&self, prompt: &str) -> ScoreResult<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}

/// Client for OpenAI-compatible chat-completions APIs.
#[derive(Debug)]
pub struct OpenAiClient {
    config: ScorerConfig,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client from config. Fails when no API key is configured.
    pub fn new(config: ScorerConfig) -> ScoreResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ScoreError::Config {
                message: "missing API key (set OPENAI_API_KEY)".to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScoreError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> ScoreResult<LlmResponse> {
        let url = self.completions_url();

        let body = json!({
            "model": self.config.model,
            "messages": [{
                "role": "user",
                "content": prompt,
            }],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        debug!(url = %url, model = %self.config.model, "requesting completion");

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_else(|_| String::new());
            return Err(ScoreError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let json: serde_json::Value =
            resp.json().await.map_err(|e| ScoreError::MalformedResponse {
                message: format!("invalid JSON body: {}", e),
            })?;

        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ScoreError::MalformedResponse {
                message: "response missing choices[0].message.content".to_string(),
            })?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: self.provider_name().to_string(),
            model: self.config.model.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
