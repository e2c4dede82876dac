//! Task CRUD Handlers
//!
//! `/tasks` and `/tasks/{id}`. Request bodies use the camelCase task
//! shape; validation failures answer 400 with a field list.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::{new_task_id, Task, TaskDraft, TaskPatch};
use crate::error::{ApiErrorResponse, ApiResult};
use crate::AppState;

/// List all tasks in insertion order
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list().await?;
    tracing::debug!(count = tasks.len(), "listed tasks");
    Ok(Json(tasks))
}

/// Create a task with a server-assigned id
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(draft) = payload?;
    draft.validate()?;

    let task = draft.into_task(new_task_id());
    let created = state.tasks.create(&task).await?;
    tracing::info!(id = %created.id, status = %created.status, "created task");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get task by ID
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    state
        .tasks
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiErrorResponse::not_found("Task not found"))
}

/// Merge the given fields into a stored task. The id never changes.
/// An unknown id answers 404 before the body is looked at.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    if state.tasks.find_by_id(&id).await?.is_none() {
        return Err(ApiErrorResponse::not_found("Task not found"));
    }
    let Json(patch) = payload?;
    patch.validate()?;

    let updated = state.tasks.patch(&id, &patch).await?;
    tracing::info!(id = %updated.id, status = %updated.status, "updated task");
    Ok(Json(updated))
}

/// Delete task by ID
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.tasks.delete(&id).await?;
    tracing::info!(%id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}
