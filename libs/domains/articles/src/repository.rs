use async_trait::async_trait;

use crate::error::ArticleResult;
use crate::models::{Article, NewArticle};

/// Repository trait for Article storage
///
/// Articles are append-only; the only removal is clearing everything.
/// Implementations must serialize writes so concurrent requests never
/// interleave an append with a clear.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Store a new article at the end of the collection, assigning its id
    async fn append(&self, article: NewArticle) -> ArticleResult<Article>;

    /// All articles, most recently added first
    async fn list(&self) -> ArticleResult<Vec<Article>>;

    /// First article (oldest) whose slug matches exactly
    async fn find_by_slug(&self, slug: &str) -> ArticleResult<Option<Article>>;

    /// Remove every article, returning how many were removed
    async fn clear(&self) -> ArticleResult<usize>;

    /// Number of stored articles
    async fn count(&self) -> ArticleResult<usize>;
}
