use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;
use domain_tasks::{PgTaskRepository, TaskService, handlers};
use std::sync::Arc;

/// Assembles all API routes. These get nested under `/api` by the router
/// builder in `main`.
pub fn routes(state: &AppState) -> Router {
    let repository = PgTaskRepository::new(state.db.clone());
    let service = TaskService::new(Arc::new(repository));

    Router::new().nest("/tasks", handlers::router(service))
}

/// Readiness probe: verifies the database is reachable.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(axum::http::StatusCode, Json<serde_json::Value>), (axum::http::StatusCode, Json<serde_json::Value>)>
{
    let db = state.db.clone();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async move { check_health(&db).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}
