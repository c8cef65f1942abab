//! Scorer runtime configuration.
//!
//! An explicit config object handed to [`Scorer::new`](crate::Scorer::new)
//! and [`OpenAiClient::new`](crate::OpenAiClient::new). There is no
//! module-level global state; the binary decides where values come from.

use serde::{Deserialize, Serialize};

/// Scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Base URL for the chat-completions API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API key. Required for the real client, unused by mocks.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of concurrent samples averaged per scoring call.
    #[serde(default = "default_samples")]
    pub samples: u32,

    /// Sampling temperature sent with each call.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion token cap. The model is asked for a bare number.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_samples() -> u32 {
    3
}

fn default_temperature() -> f32 {
    1.0
}

fn default_max_tokens() -> u32 {
    16
}

fn default_timeout() -> u64 {
    30
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            model: default_model(),
            samples: default_samples(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ScorerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Meaning |
    /// |----------|---------|
    /// | `OPENAI_API_KEY` | API credential |
    /// | `FLUFFMETER_API_BASE` | Override API base URL |
    /// | `FLUFFMETER_MODEL` | Override model id |
    /// | `FLUFFMETER_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(base) = std::env::var("FLUFFMETER_API_BASE") {
            config.api_base = base;
        }
        if let Ok(model) = std::env::var("FLUFFMETER_MODEL") {
            config.model = model;
        }
        if let Ok(timeout) = std::env::var("FLUFFMETER_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                config.timeout_secs = secs;
            }
        }
        config
    }

    /// Set the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
