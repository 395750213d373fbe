use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ArticleResult;

/// Trait for text generation providers
///
/// Given a prompt, returns the generated markdown. Implementations wrap a
/// remote model API (Gemini) or serve canned output (scripted).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(&self, prompt: &str) -> ArticleResult<String>;

    /// Check that the provider is reachable and the credential is accepted
    async fn health_check(&self) -> ArticleResult<()>;

    /// Provider name for logs and metrics
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> ArticleResult<String> {
        (**self).generate(prompt).await
    }

    async fn health_check(&self) -> ArticleResult<()> {
        (**self).health_check().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
