//! Health check and API root endpoints.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    models::{ApiInfoResponse, HealthResponse},
    state::AppState,
};

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        environment: state.environment.clone(),
        timestamp: Utc::now(),
        uptime: state.uptime_seconds(),
    })
}

/// GET /api
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "Task Manager API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.clone(),
    })
}
