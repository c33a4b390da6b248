use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use validator::Validate;

/// Number of outstanding tasks returned by the default listing.
pub const OUTSTANDING_WINDOW: u64 = 5;

/// A task as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new task.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateTask {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,
    pub description: Option<String>,
}
