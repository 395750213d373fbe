//! Application state management.

use domain_articles::{ArticleService, InMemoryArticleRepository, TextGenerator};
use std::sync::Arc;

/// Article service as wired in this binary: in-memory store, provider chosen at startup
pub type BlogService = ArticleService<InMemoryArticleRepository, Arc<dyn TextGenerator>>;

/// Shared application state.
///
/// Cloning is cheap; the service shares its store and generator through `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub articles: BlogService,
}
