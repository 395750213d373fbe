//! Observability utilities for the blog generation service.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Article generation metrics
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{ArticleMetrics, init_metrics, metrics_handler};
//!
//! init_metrics()?;
//!
//! ArticleMetrics::record_generation("batch", "success", elapsed);
//! ArticleMetrics::set_stored_articles(12);
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod articles;
pub mod middleware;

pub use articles::ArticleMetrics;
pub use middleware::metrics_middleware;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Call once at startup; later calls return the existing handle.
///
/// # Errors
/// Fails if another global metrics recorder is already installed.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_gauge;
    use metrics::describe_histogram;

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // Article metrics
    describe_counter!(
        "article_generations_total",
        "Article generation calls by mode and outcome"
    );
    describe_histogram!(
        "article_generation_duration_seconds",
        "Time spent waiting on the text generator"
    );
    describe_gauge!("articles_stored", "Articles currently held in the store");
    describe_counter!(
        "article_lookups_total",
        "Slug lookups by outcome"
    );
}
