use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UpstreamErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ArticleResult;
use crate::generator::TextGenerator;
use crate::models::{
    Article, ArticleListResponse, ArticleResponse, ClearArticlesResponse,
    GenerateArticlesRequest, GenerateArticlesResponse, GenerateSingleRequest,
    GenerateSingleResponse, TitleEntry,
};
use crate::repository::ArticleRepository;
use crate::service::ArticleService;

/// OpenAPI documentation for Articles API
#[derive(OpenApi)]
#[openapi(
    paths(
        generate_articles,
        generate_single,
        list_articles,
        get_article,
        clear_articles,
    ),
    components(
        schemas(
            Article,
            TitleEntry,
            GenerateArticlesRequest,
            GenerateSingleRequest,
            GenerateArticlesResponse,
            GenerateSingleResponse,
            ArticleListResponse,
            ArticleResponse,
            ClearArticlesResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UpstreamErrorResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Articles", description = "Article generation and retrieval")
    )
)]
pub struct ApiDoc;

type SharedService<R, G> = Arc<ArticleService<R, G>>;

/// Create the articles router with all HTTP endpoints
pub fn router<R, G>(service: ArticleService<R, G>) -> Router
where
    R: ArticleRepository + 'static,
    G: TextGenerator + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/generate-articles", post(generate_articles))
        .route("/generate-single", post(generate_single))
        .route("/blog", get(list_articles).delete(clear_articles))
        .route("/blog/{slug}", get(get_article))
        .with_state(shared_service)
}

/// Generate one article per title
///
/// Titles are processed in order, one provider call each. If a call fails
/// the request fails, but articles generated before it stay stored.
#[utoipa::path(
    post,
    path = "/generate-articles",
    tag = "Articles",
    request_body = GenerateArticlesRequest,
    responses(
        (status = 200, description = "Articles generated", body = GenerateArticlesResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = UpstreamErrorResponse)
    )
)]
async fn generate_articles<R: ArticleRepository, G: TextGenerator>(
    State(service): State<SharedService<R, G>>,
    ValidatedJson(input): ValidatedJson<GenerateArticlesRequest>,
) -> Result<Json<GenerateArticlesResponse>, AppError> {
    let articles = service
        .generate_batch(input.titles)
        .await
        .map_err(|e| e.into_app_error("Failed to generate articles"))?;

    Ok(Json(GenerateArticlesResponse {
        success: true,
        count: articles.len(),
        articles,
    }))
}

/// Generate a single article from a free-form prompt
#[utoipa::path(
    post,
    path = "/generate-single",
    tag = "Articles",
    request_body = GenerateSingleRequest,
    responses(
        (status = 200, description = "Article generated", body = GenerateSingleResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = UpstreamErrorResponse)
    )
)]
async fn generate_single<R: ArticleRepository, G: TextGenerator>(
    State(service): State<SharedService<R, G>>,
    ValidatedJson(input): ValidatedJson<GenerateSingleRequest>,
) -> Result<Json<GenerateSingleResponse>, AppError> {
    let article = service
        .generate_single(&input.prompt)
        .await
        .map_err(|e| e.into_app_error("Failed to generate article"))?;

    Ok(Json(GenerateSingleResponse {
        success: true,
        article,
    }))
}

/// List all articles, most recent first
#[utoipa::path(
    get,
    path = "/blog",
    tag = "Articles",
    responses(
        (status = 200, description = "All stored articles", body = ArticleListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_articles<R: ArticleRepository, G: TextGenerator>(
    State(service): State<SharedService<R, G>>,
) -> ArticleResult<Json<ArticleListResponse>> {
    let articles = service.list_articles().await?;
    Ok(Json(ArticleListResponse { articles }))
}

/// Get an article by slug
#[utoipa::path(
    get,
    path = "/blog/{slug}",
    tag = "Articles",
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article found", body = ArticleResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_article<R: ArticleRepository, G: TextGenerator>(
    State(service): State<SharedService<R, G>>,
    Path(slug): Path<String>,
) -> ArticleResult<Json<ArticleResponse>> {
    let article = service.get_article(&slug).await?;
    Ok(Json(ArticleResponse { article }))
}

/// Delete all articles
#[utoipa::path(
    delete,
    path = "/blog",
    tag = "Articles",
    responses(
        (status = 200, description = "All articles deleted", body = ClearArticlesResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn clear_articles<R: ArticleRepository, G: TextGenerator>(
    State(service): State<SharedService<R, G>>,
) -> ArticleResult<Json<ClearArticlesResponse>> {
    service.clear_articles().await?;
    Ok(Json(ClearArticlesResponse {
        success: true,
        message: "All articles deleted".to_string(),
    }))
}
