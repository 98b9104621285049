pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// PDF resumes can exceed axum's 2 MB default.
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/preview", post(handlers::handle_preview))
        .route(
            "/api/v1/analysis/preview/upload",
            post(handlers::handle_preview_upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        // Reports API
        .route("/api/v1/reports/:id", get(handlers::handle_get_report))
        .route(
            "/api/v1/reports/:id/rewrite",
            post(handlers::handle_rewrite),
        )
        .with_state(state)
}
