use crate::error::TaskError;
use crate::models::{CreateTask, Task};
use crate::service::TaskService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_helpers::errors::ErrorResponse;

/// List outstanding tasks.
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "Outstanding tasks, newest first", body = Vec<Task>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_tasks(State(service): State<TaskService>) -> Result<Json<Vec<Task>>, TaskError> {
    let tasks = service.list_outstanding().await?;
    Ok(Json(tasks))
}

/// Create a new task.
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_task(
    State(service): State<TaskService>,
    Json(payload): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), TaskError> {
    let task = service.create_task(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Mark a task as completed.
#[utoipa::path(
    patch,
    path = "/tasks/{id}/complete",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task completed (idempotent)", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn complete_task(
    State(service): State<TaskService>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, TaskError> {
    let task = service.complete_task(id).await?;
    Ok(Json(task))
}
