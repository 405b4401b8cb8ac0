//! API route definitions.

use axum::{
    middleware::from_fn,
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    error::ApiError,
    handlers::{health, tasks},
    middleware::logging::log_requests,
    state::AppState,
};

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // API root + health
        .route("/api", get(health::api_info))
        .route("/api/health", get(health::health_check))
        // Task collection
        .route(
            "/api/tasks",
            get(tasks::list_tasks)
                .post(tasks::create_task)
                .delete(tasks::delete_all_tasks),
        )
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/api/tasks/{id}/toggle", put(tasks::toggle_task))
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .layer(from_fn(log_requests))
        .with_state(state)
}

/// Handler for unmatched routes.
async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
