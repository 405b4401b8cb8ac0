//! API request and response models.
//!
//! The `Task` wire shape itself comes from `taskman-core`; partial updates
//! are deserialized straight into `taskman_core::TaskPatch`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task creation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    // Optional so that a missing field is reported as the contract's 400,
    // not as a body-deserialization rejection.
    pub text: Option<String>,
}

/// Bulk delete response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllResponse {
    pub message: String,
    pub deleted_count: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
    pub uptime: u64,
}

/// API root response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
}
