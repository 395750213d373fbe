use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Article entity - a generated markdown post held in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier, assigned by the store on append
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Generated markdown body
    pub content: String,
    /// Caller-supplied context: batch details, or the single-article prompt
    pub details: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// URL-safe identifier derived from the title (not unique)
    pub slug: String,
}

/// An article that has been built but not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
    pub slug: String,
}

impl NewArticle {
    pub fn into_article(self, id: Uuid) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            details: self.details,
            created_at: self.created_at,
            slug: self.slug,
        }
    }
}

/// One entry of a batch generation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TitleEntry {
    /// Article title, also the generation topic
    #[schema(example = "Rust Ownership Explained")]
    pub title: String,
    /// Extra guidance for the generator
    #[serde(default)]
    #[schema(example = "Focus on borrowing rules")]
    pub details: Option<String>,
}

/// DTO for generating a batch of articles
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateArticlesRequest {
    pub titles: Vec<TitleEntry>,
}

/// DTO for generating one article from a free-form prompt
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateSingleRequest {
    #[validate(length(min = 1, message = "Prompt must not be empty"))]
    #[schema(example = "Explain async/await in Rust with examples")]
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateArticlesResponse {
    pub success: bool,
    pub articles: Vec<Article>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateSingleResponse {
    pub success: bool,
    pub article: Article,
}

/// All stored articles, most recent first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearArticlesResponse {
    pub success: bool,
    #[schema(example = "All articles deleted")]
    pub message: String,
}
