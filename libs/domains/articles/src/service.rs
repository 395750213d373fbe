//! Article Service - orchestrates generation, building and storage

use observability::ArticleMetrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

use crate::builder;
use crate::error::{ArticleError, ArticleResult};
use crate::generator::TextGenerator;
use crate::models::{Article, TitleEntry};
use crate::prompts;
use crate::rate_limit::GenerationRateLimiter;
use crate::repository::ArticleRepository;

/// Article service providing the generation and retrieval operations
///
/// Every generator call goes through the shared rate limiter. Generation
/// happens outside the store's lock; only the append is exclusive.
pub struct ArticleService<R: ArticleRepository, G: TextGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    limiter: GenerationRateLimiter,
}

impl<R: ArticleRepository, G: TextGenerator> ArticleService<R, G> {
    /// Create a service with the default one-call-per-second limiter
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            limiter: GenerationRateLimiter::default(),
        }
    }

    pub fn with_rate_limiter(mut self, limiter: GenerationRateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    async fn generate_text(&self, mode: &'static str, prompt: &str) -> ArticleResult<String> {
        self.limiter.acquire().await;

        let start = Instant::now();
        let result = self.generator.generate(prompt).await;
        let outcome = if result.is_ok() { "success" } else { "failure" };
        ArticleMetrics::record_generation(mode, outcome, start.elapsed());

        result
    }

    /// Generate one article per entry, in order.
    ///
    /// Stops at the first failure. Articles stored before the failing entry
    /// stay in the store; later entries are not attempted.
    #[instrument(skip(self, entries), fields(count = entries.len(), generator = self.generator.name()))]
    pub async fn generate_batch(&self, entries: Vec<TitleEntry>) -> ArticleResult<Vec<Article>> {
        let mut generated = Vec::with_capacity(entries.len());

        for entry in entries {
            let details = entry.details.as_deref().unwrap_or_default();
            let prompt = prompts::batch_prompt(&entry.title, entry.details.as_deref());

            let content = self.generate_text("batch", &prompt).await.inspect_err(|e| {
                tracing::warn!(
                    title = %entry.title,
                    completed = generated.len(),
                    error = %e,
                    "Batch generation aborted"
                );
            })?;

            let article = self
                .repository
                .append(builder::build(&entry.title, details, content))
                .await?;
            tracing::info!(slug = %article.slug, "Generated article");
            generated.push(article);
        }

        Ok(generated)
    }

    /// Generate one article from a free-form prompt, titled by its first heading
    #[instrument(skip(self, prompt), fields(generator = self.generator.name()))]
    pub async fn generate_single(&self, prompt: &str) -> ArticleResult<Article> {
        if prompt.is_empty() {
            return Err(ArticleError::Validation(
                "Prompt must not be empty".to_string(),
            ));
        }

        let content = self
            .generate_text("single", &prompts::single_prompt(prompt))
            .await?;

        let article = self
            .repository
            .append(builder::build_from_prompt(prompt, content))
            .await?;
        tracing::info!(slug = %article.slug, "Generated article");
        Ok(article)
    }

    /// List all articles, most recent first
    #[instrument(skip(self))]
    pub async fn list_articles(&self) -> ArticleResult<Vec<Article>> {
        self.repository.list().await
    }

    /// Get the first article stored under `slug`
    #[instrument(skip(self))]
    pub async fn get_article(&self, slug: &str) -> ArticleResult<Article> {
        let found = self.repository.find_by_slug(slug).await?;
        ArticleMetrics::record_lookup(found.is_some());
        found.ok_or_else(|| ArticleError::NotFound(slug.to_string()))
    }

    /// Delete every article
    #[instrument(skip(self))]
    pub async fn clear_articles(&self) -> ArticleResult<usize> {
        let removed = self.repository.clear().await?;
        tracing::info!(removed, "Cleared all articles");
        Ok(removed)
    }

    /// Number of stored articles
    pub async fn count_articles(&self) -> ArticleResult<usize> {
        self.repository.count().await
    }

    /// Check the text generator is reachable
    pub async fn check_generator(&self) -> ArticleResult<()> {
        self.generator.health_check().await
    }
}

impl<R: ArticleRepository, G: TextGenerator> Clone for ArticleService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            limiter: self.limiter.clone(),
        }
    }
}
