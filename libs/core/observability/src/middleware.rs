//! Per-route HTTP request metrics.
//!
//! Requests are labelled by the route pattern they matched (`/api/blog/{slug}`),
//! never by the raw URI, so slugs and probe paths cannot grow label sets.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response, StatusCode},
    middleware::Next,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Route label for requests that matched no route
pub const UNMATCHED_ROUTE: &str = "unmatched";

fn route_label(matched: Option<&MatchedPath>) -> String {
    matched.map_or_else(|| UNMATCHED_ROUTE.to_string(), |p| p.as_str().to_string())
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

/// Records `http_requests_total`, `http_request_duration_seconds` and, for
/// 4xx/5xx responses, `http_requests_errors_total`.
///
/// Install with `Router::layer` so the matched route is visible here:
///
/// ```rust,ignore
/// let app = router.layer(middleware::from_fn(observability::metrics_middleware));
/// ```
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().as_str().to_owned();
    let route = route_label(matched_path.as_ref());

    let response = next.run(request).await;

    let status = response.status();
    let code = status.as_str().to_owned();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => code.clone(),
        "status_class" => status_class(status)
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "route" => route.clone()
    )
    .record(start.elapsed().as_secs_f64());

    if status.is_client_error() || status.is_server_error() {
        counter!(
            "http_requests_errors_total",
            "method" => method,
            "route" => route,
            "status" => code
        )
        .increment(1);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/blog/{slug}", get(|| async { "ok" }))
            .layer(middleware::from_fn(metrics_middleware))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StatusCode::OK), "2xx");
        assert_eq!(status_class(StatusCode::NOT_FOUND), "4xx");
        assert_eq!(status_class(StatusCode::BAD_GATEWAY), "5xx");
    }

    #[test]
    fn test_route_label_without_match() {
        assert_eq!(route_label(None), UNMATCHED_ROUTE);
    }

    #[tokio::test]
    async fn test_requests_are_counted_by_route_pattern() {
        crate::init_metrics().unwrap();

        let response = app()
            .oneshot(get_request("/api/blog/hello-world"))
            .await
            .unwrap();
        assert!(response.status().is_success());

        let rendered = crate::metrics_handler().await;
        assert!(rendered.contains("route=\"/api/blog/{slug}\""));
        assert!(!rendered.contains("hello-world"));
    }

    #[tokio::test]
    async fn test_unknown_paths_share_one_label() {
        crate::init_metrics().unwrap();

        for uri in ["/wp-admin/setup.php", "/api/blog/a/b/c"] {
            let response = app().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        let rendered = crate::metrics_handler().await;
        assert!(rendered.contains("route=\"unmatched\""));
        assert!(!rendered.contains("wp-admin"));
        assert!(!rendered.contains("/api/blog/a/b/c"));
    }
}
