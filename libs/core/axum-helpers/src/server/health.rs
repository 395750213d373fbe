use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// A boxed readiness check; the error is a human-readable reason
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Connected,
    Disconnected,
}

/// Outcome of a readiness probe.
///
/// Serializes as `{"status": "ready" | "not ready", "<check>": "connected" | "disconnected", ...}`
/// and responds 200 when every check passed, 503 otherwise.
#[derive(Debug, Serialize)]
pub struct ReadinessReport {
    status: &'static str,
    #[serde(flatten)]
    checks: BTreeMap<String, CheckState>,
}

impl ReadinessReport {
    fn from_checks(checks: BTreeMap<String, CheckState>) -> Self {
        let ready = checks.values().all(|state| *state == CheckState::Connected);
        Self {
            status: if ready { "ready" } else { "not ready" },
            checks,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.values().all(|state| *state == CheckState::Connected)
    }

    pub fn check(&self, name: &str) -> Option<CheckState> {
        self.checks.get(name).copied()
    }
}

impl IntoResponse for ReadinessReport {
    fn into_response(self) -> Response {
        let status = if self.is_ready() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}

/// Run named readiness checks concurrently.
///
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
///     ("store", Box::pin(async { Ok(()) })),
///     ("gemini", Box::pin(async {
///         generator.health_check().await.map_err(|e| e.to_string())
///     })),
/// ];
/// run_health_checks(checks).await.into_response()
/// ```
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> ReadinessReport {
    let results = join_all(checks.into_iter().map(|(name, check)| async move {
        let state = match check.await {
            Ok(()) => CheckState::Connected,
            Err(reason) => {
                tracing::error!(check = name, %reason, "Readiness check failed");
                CheckState::Disconnected
            }
        };
        (name.to_string(), state)
    }))
    .await;

    ReadinessReport::from_checks(results.into_iter().collect())
}

/// Health check endpoint handler.
///
/// Returns a simple health status response with app name and version.
/// This endpoint should always return 200 if the service is running.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router with the /health endpoint.
///
/// Use this to add liveness checks to your app. The handler returns
/// the app name and version from `AppInfo`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = router.merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
