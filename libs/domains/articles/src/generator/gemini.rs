//! Google Gemini text generation provider
//!
//! Calls the `generateContent` REST endpoint of the Generative Language API
//! with an API key.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_optional, env_required};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TextGenerator;
use crate::error::{ArticleError, ArticleResult};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Per-request timeout; `None` waits for the provider indefinitely
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), self.model)
    }

    fn generate_url(&self) -> String {
        format!("{}:generateContent", self.model_url())
    }
}

impl FromEnv for GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_required("GEMINI_API_KEY")?;
        let model = env_or_default("GEMINI_MODEL", DEFAULT_MODEL);
        let base_url = env_or_default("GEMINI_BASE_URL", DEFAULT_BASE_URL);

        let timeout = env_parse_optional::<u64>("GEMINI_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
        })
    }
}

/// Gemini text generator
pub struct GeminiGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGenerator {
    pub fn new(config: GeminiConfig) -> ArticleResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ArticleError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

// Gemini request/response types

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn user_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> ArticleResult<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ArticleError::Generation(format!(
                "Prompt was blocked by the provider: {}",
                reason
            )));
        }

        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            ArticleError::Generation("Provider returned no candidates".to_string())
        })?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(ArticleError::Generation(format!(
                "Provider returned no text (finish reason: {})",
                reason
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> ArticleResult<String> {
        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ArticleError::Generation(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_text()
    }

    async fn health_check(&self) -> ArticleResult<()> {
        let response = self
            .client
            .get(self.config.model_url())
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ArticleError::Generation(format!(
                "Gemini model lookup failed ({})",
                response.status()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
