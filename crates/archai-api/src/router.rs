use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Largest accepted upload; CAD drawings easily exceed axum's 2 MB default
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        .route("/api/", get(handlers::root))

        // Projects
        .route(
            "/api/projects",
            post(handlers::create_project).get(handlers::list_projects),
        )
        .route(
            "/api/projects/{project_id}",
            get(handlers::get_project).delete(handlers::delete_project),
        )

        // Site boundary
        .route(
            "/api/projects/{project_id}/upload-dxf",
            post(handlers::upload_boundary),
        )

        // Floor plans
        .route("/api/projects/{project_id}/generate", post(handlers::generate_plans))
        .route(
            "/api/projects/{project_id}/select-plan/{plan_index}",
            put(handlers::select_plan),
        )

        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
