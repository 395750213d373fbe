//! Articles Domain
//!
//! Generates technical blog articles with an external language model and
//! keeps them in memory for retrieval by slug.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌─────────────┐
//! │   Service   │ ───► │  Generator  │  ← Gemini / scripted, rate limited
//! └──────┬──────┘      └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Builder   │  ← slug, title, timestamp
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage (trait + in-memory implementation)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_articles::{
//!     handlers, ArticleService, GeminiConfig, GeminiGenerator, InMemoryArticleRepository,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeminiGenerator::new(GeminiConfig::new("api-key"))?;
//! let service = ArticleService::new(InMemoryArticleRepository::new(), generator);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod prompts;
pub mod rate_limit;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ArticleError, ArticleResult};
pub use generator::{GeminiConfig, GeminiGenerator, ScriptedGenerator, TextGenerator};
pub use handlers::ApiDoc;
pub use memory::InMemoryArticleRepository;
pub use models::{Article, NewArticle, TitleEntry};
pub use rate_limit::GenerationRateLimiter;
pub use repository::ArticleRepository;
pub use service::ArticleService;
