use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{create_company, get_company, health, list_companies, metrics, root};
use crate::state::AppState;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(root::handle))
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::handle))
        .route(
            "/api/companies",
            post(create_company::handle).get(list_companies::handle),
        )
        .route("/api/companies/:id", get(get_company::handle))
        .with_state(state)
}
