use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/hazard", get(handlers::get_hazard))
        .route("/api/hazard/recent", get(handlers::get_recent_queries))
        .route("/api/admin/initialize", post(handlers::initialize_store))
        .route("/api/admin/import", post(handlers::import_features))
        .route("/api/admin/sample-data", post(handlers::load_sample_data))
        .with_state(state)
}
