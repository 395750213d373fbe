use axum::{middleware, routing::get};
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_articles::{
    ArticleService, GeminiGenerator, GenerationRateLimiter, InMemoryArticleRepository,
    ScriptedGenerator, TextGenerator,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, GeneratorConfig};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Pick up a local .env before reading configuration
    let dotenv_path = core_config::load_dotenv()?;

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "Loaded environment from .env");
    }

    observability::init_metrics()?;

    let generator: Arc<dyn TextGenerator> = match &config.generator {
        GeneratorConfig::Gemini(gemini) => {
            info!(model = %gemini.model, "Using Gemini text generator");
            Arc::new(GeminiGenerator::new(gemini.clone())?)
        }
        GeneratorConfig::Scripted => {
            tracing::warn!("Using scripted text generator; articles will be placeholders");
            Arc::new(ScriptedGenerator::new())
        }
    };

    let limiter = GenerationRateLimiter::new(config.generation_min_interval);
    info!(?limiter, "Generation rate limiter configured");

    let articles = ArticleService::new(InMemoryArticleRepository::new(), generator)
        .with_rate_limiter(limiter);

    let state = AppState { config, articles };

    // Build router with API routes and OpenAPI docs
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)?;

    // Merge health, readiness and metrics endpoints
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()))
        .route("/metrics", get(observability::metrics_handler))
        .layer(middleware::from_fn(observability::metrics_middleware));

    let shutdown_articles = state.articles.clone();

    info!("Starting Blog API with production-ready shutdown (30s timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            let stored = shutdown_articles.count_articles().await.unwrap_or_default();
            info!(stored, "Shutting down: in-memory articles will be discarded");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Blog API shutdown complete");
    Ok(())
}
