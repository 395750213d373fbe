use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ArticleResult<T> = Result<T, ArticleError>;

impl ArticleError {
    /// Convert to [`AppError`]. A generation failure renders `summary` in
    /// the `error` field and the provider's cause in `message`.
    pub fn into_app_error(self, summary: &str) -> AppError {
        match self {
            ArticleError::Generation(cause) => AppError::Summarized {
                code: ErrorCode::UpstreamError,
                summary: summary.to_string(),
                cause,
            },
            other => other.into(),
        }
    }
}

/// Convert ArticleError to AppError for standardized error responses
impl From<ArticleError> for AppError {
    fn from(err: ArticleError) -> Self {
        match err {
            ArticleError::NotFound(slug) => AppError::Summarized {
                code: ErrorCode::NotFound,
                summary: "Article not found".to_string(),
                cause: format!("No article with slug '{}'", slug),
            },
            ArticleError::Validation(msg) => AppError::BadRequest(msg),
            ArticleError::Generation(msg) => AppError::UpstreamFailure(msg),
            ArticleError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<reqwest::Error> for ArticleError {
    fn from(err: reqwest::Error) -> Self {
        ArticleError::Generation(err.to_string())
    }
}
