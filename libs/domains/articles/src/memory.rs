//! In-memory implementation of ArticleRepository

use async_trait::async_trait;
use observability::ArticleMetrics;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ArticleResult;
use crate::models::{Article, NewArticle};
use crate::repository::ArticleRepository;

type SizeObserver = Arc<dyn Fn(usize) + Send + Sync>;

/// Process-lifetime article store kept in insertion order.
///
/// Every write reports the new size to the size observer while the write
/// lock is still held, so observed sizes follow the order of writes.
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
    on_size_change: SizeObserver,
}

impl InMemoryArticleRepository {
    /// Store that publishes its size to the `articles_stored` gauge
    pub fn new() -> Self {
        Self::with_size_observer(ArticleMetrics::set_stored_articles)
    }

    pub fn with_size_observer(observer: impl Fn(usize) + Send + Sync + 'static) -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
            on_size_change: Arc::new(observer),
        }
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    #[instrument(skip(self, article), fields(slug = %article.slug))]
    async fn append(&self, article: NewArticle) -> ArticleResult<Article> {
        let mut articles = self.articles.write().await;
        let article = article.into_article(Uuid::now_v7());
        articles.push(article.clone());
        (self.on_size_change)(articles.len());
        tracing::debug!(id = %article.id, total = articles.len(), "Article stored");
        Ok(article)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ArticleResult<Vec<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().rev().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> ArticleResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|a| a.slug == slug).cloned())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> ArticleResult<usize> {
        let mut articles = self.articles.write().await;
        let removed = articles.len();
        articles.clear();
        (self.on_size_change)(0);
        Ok(removed)
    }

    async fn count(&self) -> ArticleResult<usize> {
        Ok(self.articles.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;
    use std::sync::Mutex;

    fn new_article(title: &str) -> NewArticle {
        builder::build(title, "", format!("# {}", title))
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let repo = InMemoryArticleRepository::new();
        for title in ["A1", "A2", "A3"] {
            repo.append(new_article(title)).await.unwrap();
        }

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["A3", "A2", "A1"]);
    }

    #[tokio::test]
    async fn test_list_does_not_mutate_order() {
        let repo = InMemoryArticleRepository::new();
        repo.append(new_article("first")).await.unwrap();
        repo.append(new_article("second")).await.unwrap();

        let once = repo.list().await.unwrap();
        let twice = repo.list().await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_find_by_slug_on_empty_store() {
        let repo = InMemoryArticleRepository::new();
        for slug in ["", "hello", "generated-article"] {
            assert!(repo.find_by_slug(slug).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_find_by_slug_returns_oldest_duplicate() {
        let repo = InMemoryArticleRepository::new();
        let first = repo.append(new_article("Hello World")).await.unwrap();
        repo.append(new_article("hello world")).await.unwrap();

        let found = repo.find_by_slug("hello-world").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.title, "Hello World");
    }

    #[tokio::test]
    async fn test_clear_then_list_is_empty() {
        let repo = InMemoryArticleRepository::new();
        repo.append(new_article("one")).await.unwrap();
        repo.append(new_article("two")).await.unwrap();

        assert_eq!(repo.clear().await.unwrap(), 2);
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_unique_under_concurrent_appends() {
        let repo = Arc::new(InMemoryArticleRepository::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.append(new_article(&format!("article {}", i))).await.unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(repo.count().await.unwrap(), 32);
    }

    #[tokio::test]
    async fn test_size_observer_sees_sizes_in_write_order() {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&sizes);
        let repo = Arc::new(InMemoryArticleRepository::with_size_observer(move |n| {
            seen.lock().unwrap().push(n);
        }));

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.append(new_article(&format!("article {}", i))).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        repo.clear().await.unwrap();

        let mut expected: Vec<usize> = (1..=16).collect();
        expected.push(0);
        assert_eq!(*sizes.lock().unwrap(), expected);
    }
}
