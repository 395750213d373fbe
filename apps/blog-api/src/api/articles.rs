//! Articles API routes
//!
//! Wires the articles domain to HTTP routes.

use axum::Router;
use domain_articles::handlers;

use crate::state::AppState;

/// Create articles router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.articles.clone())
}
