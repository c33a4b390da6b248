use axum::response::{IntoResponse, Response};
use axum_helpers::errors::AppError;
use sea_orm::DbErr;
use thiserror::Error;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<DbErr> for TaskError {
    fn from(err: DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => AppError::NotFound("Task not found".to_string()),
            TaskError::Validation(message) => AppError::BadRequest(message),
            TaskError::Database(message) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
