//! Task CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskman_core::{Task, TaskId, TaskPatch};

use crate::{
    error::ApiResult,
    models::{CreateTaskRequest, DeleteAllResponse},
    state::AppState,
};

/// GET /api/tasks — all tasks in insertion order.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.lock_tasks()?;
    Ok(Json(tasks.list_tasks()))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> ApiResult<Json<Task>> {
    let tasks = state.lock_tasks()?;
    Ok(Json(tasks.get_task(id)?))
}

/// POST /api/tasks — create from `{text}`, 201 on success.
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let mut tasks = state.lock_tasks()?;
    let task = tasks.create_task(body.text.as_deref().unwrap_or_default())?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id} — partial update from `{text?, completed?}`.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<Json<Task>> {
    let mut tasks = state.lock_tasks()?;
    Ok(Json(tasks.update_task(id, patch)?))
}

/// PUT /api/tasks/{id}/toggle — flip completion.
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> ApiResult<Json<Task>> {
    let mut tasks = state.lock_tasks()?;
    Ok(Json(tasks.toggle_task(id)?))
}

/// DELETE /api/tasks/{id} — returns the removed task.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> ApiResult<Json<Task>> {
    let mut tasks = state.lock_tasks()?;
    Ok(Json(tasks.delete_task(id)?))
}

/// DELETE /api/tasks — remove everything, reset id assignment.
pub async fn delete_all_tasks(State(state): State<AppState>) -> ApiResult<Json<DeleteAllResponse>> {
    let mut tasks = state.lock_tasks()?;
    let deleted_count = tasks.delete_all_tasks();
    Ok(Json(DeleteAllResponse {
        message: format!("Deleted {deleted_count} tasks"),
        deleted_count,
    }))
}
