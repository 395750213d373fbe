//! Readiness endpoint with real store and generator checks.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

/// Readiness check: the article store answers and the generator accepts our credential.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "store",
            Box::pin(async {
                state
                    .articles
                    .count_articles()
                    .await
                    .map(|_| ())
                    .map_err(|e| format!("Article store check failed: {}", e))
            }),
        ),
        (
            state.articles.generator_name(),
            Box::pin(async {
                state
                    .articles
                    .check_generator()
                    .await
                    .map_err(|e| format!("Generator check failed: {}", e))
            }),
        ),
    ];

    run_health_checks(checks).await.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, GeneratorConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use domain_articles::{
        ArticleService, GenerationRateLimiter, InMemoryArticleRepository, ScriptedGenerator,
        TextGenerator,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn state(generator: ScriptedGenerator) -> AppState {
        let generator: Arc<dyn TextGenerator> = Arc::new(generator);
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                cors: CorsConfig::default(),
                environment: Environment::Development,
                generator: GeneratorConfig::Scripted,
                generation_min_interval: Duration::ZERO,
            },
            articles: ArticleService::new(InMemoryArticleRepository::new(), generator)
                .with_rate_limiter(GenerationRateLimiter::disabled()),
        }
    }

    async fn ready(state: AppState) -> (StatusCode, Value) {
        let response = router(state)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_generator_healthy() {
        let (status, body) = ready(state(ScriptedGenerator::new())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["store"], "connected");
        assert_eq!(body["scripted"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_generator_unhealthy() {
        let (status, body) = ready(state(ScriptedGenerator::unhealthy("bad key"))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["scripted"], "disconnected");
    }
}
