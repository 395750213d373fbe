use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer from [`CorsConfig`].
///
/// With an explicit origin list only those origins are allowed. Without one
/// the request's `Origin` is mirrored back, so credentialed calls from any
/// frontend succeed.
///
/// Every layer carries:
/// - Methods GET, POST, DELETE, OPTIONS
/// - Headers Content-Type, Authorization
/// - Credentials allowed
/// - 1 hour max age
///
/// # Errors
/// Returns an error if a configured origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = match &config.allowed_origins {
        Some(origins) => {
            let values = origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?;
            tracing::info!("CORS configured with allowed origins: {}", origins.join(","));
            AllowOrigin::list(values)
        }
        None => {
            tracing::info!("CORS_ALLOWED_ORIGIN not set, mirroring request origin");
            AllowOrigin::mirror_request()
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(config: &CorsConfig) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(config).unwrap())
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/")
            .header("origin", origin)
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_mirrors_origin_when_unconfigured() {
        let response = app(&CorsConfig::mirror_any())
            .oneshot(preflight("http://localhost:5173"))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }

    #[tokio::test]
    async fn test_unlisted_origin_is_not_allowed() {
        let config = CorsConfig::with_origins(["https://blog.example.com"]);
        let response = app(&config)
            .oneshot(preflight("https://evil.example.com"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get("access-control-allow-origin")
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_listed_origin_is_allowed() {
        let config = CorsConfig::with_origins(["https://blog.example.com"]);
        let response = app(&config)
            .oneshot(preflight("https://blog.example.com"))
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://blog.example.com"
        );
    }

    #[test]
    fn test_invalid_origin_is_an_error() {
        let config = CorsConfig::with_origins(["bad\norigin"]);
        assert!(create_cors_layer(&config).is_err());
    }
}
