pub mod http;

use crate::models::{CreateTask, Task};
use crate::service::TaskService;
use axum::Router;
use axum::routing::{get, patch};
use axum_helpers::errors::ErrorResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(http::list_tasks, http::create_task, http::complete_task),
    components(schemas(Task, CreateTask, ErrorResponse)),
    tags((name = "tasks", description = "Task management endpoints")),
    servers((url = "/api"))
)]
pub struct ApiDoc;

/// Builds the task router. Mount it under the path prefix of your choice,
/// e.g. `/tasks`.
pub fn router(service: TaskService) -> Router {
    Router::new()
        .route("/", get(http::list_tasks).post(http::create_task))
        .route("/{id}/complete", patch(http::complete_task))
        .with_state(service)
}
