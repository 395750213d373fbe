//! Deterministic text generator for tests and offline runs

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use super::TextGenerator;
use crate::error::{ArticleError, ArticleResult};

/// Number of most recent prompts kept by [`ScriptedGenerator`]
pub const PROMPT_LOG_CAPACITY: usize = 256;

/// Generator that replays queued responses in order and records prompts.
///
/// Once the queue is empty it falls back to a short placeholder article
/// built from the first line of the prompt, so a local server can run
/// without provider credentials. Only the last [`PROMPT_LOG_CAPACITY`]
/// prompts are kept; the call counter covers every call.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    responses: Arc<Mutex<VecDeque<ArticleResult<String>>>>,
    prompts: Arc<Mutex<VecDeque<String>>>,
    calls: Arc<AtomicUsize>,
    unhealthy: Option<String>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the given results, consumed one per `generate` call
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = ArticleResult<String>>,
    {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            ..Self::default()
        }
    }

    /// Create a generator whose health check always fails
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            unhealthy: Some(message.into()),
            ..Self::default()
        }
    }

    pub async fn push_ok(&self, content: impl Into<String>) {
        self.responses.lock().await.push_back(Ok(content.into()));
    }

    /// Most recent prompts received, in call order
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.iter().cloned().collect()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn placeholder(prompt: &str) -> String {
        let topic = prompt.lines().next().unwrap_or_default().trim();
        format!(
            "# Draft: {}\n\nThis article was produced offline without a model provider.\n",
            topic
        )
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> ArticleResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        {
            let mut prompts = self.prompts.lock().await;
            if prompts.len() == PROMPT_LOG_CAPACITY {
                prompts.pop_front();
            }
            prompts.push_back(prompt.to_string());
        }

        match self.responses.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(Self::placeholder(prompt)),
        }
    }

    async fn health_check(&self) -> ArticleResult<()> {
        match &self.unhealthy {
            Some(message) => Err(ArticleError::Generation(message.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_queue_then_falls_back() {
        let generator = ScriptedGenerator::with_responses([
            Ok("# One".to_string()),
            Err(ArticleError::Generation("boom".to_string())),
        ]);

        assert_eq!(generator.generate("first").await.unwrap(), "# One");
        assert!(generator.generate("second").await.is_err());

        let fallback = generator.generate("Rust macros\nmore text").await.unwrap();
        assert!(fallback.starts_with("# Draft: Rust macros"));

        assert_eq!(
            generator.prompts().await,
            vec!["first", "second", "Rust macros\nmore text"]
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let generator = ScriptedGenerator::new();
        let handle = generator.clone();

        handle.push_ok("queued").await;
        assert_eq!(generator.generate("p").await.unwrap(), "queued");
        assert_eq!(handle.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_prompt_log_is_capped() {
        let generator = ScriptedGenerator::new();
        let total = PROMPT_LOG_CAPACITY + 10;
        for i in 0..total {
            generator.generate(&format!("prompt {}", i)).await.unwrap();
        }

        let prompts = generator.prompts().await;
        assert_eq!(prompts.len(), PROMPT_LOG_CAPACITY);
        assert_eq!(prompts[0], "prompt 10");
        assert_eq!(prompts.last().unwrap(), &format!("prompt {}", total - 1));
        assert_eq!(generator.call_count().await, total);
    }

    #[tokio::test]
    async fn test_unhealthy_generator() {
        assert!(ScriptedGenerator::new().health_check().await.is_ok());
        assert!(
            ScriptedGenerator::unhealthy("offline")
                .health_check()
                .await
                .is_err()
        );
    }
}
