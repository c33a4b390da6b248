use crate::error::TaskResult;
use crate::models::{CreateTask, Task};
use async_trait::async_trait;

/// Storage abstraction for tasks.
///
/// The service layer depends on this trait so that business rules can be
/// tested against a mock store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task. The store assigns `id` and `created_at`;
    /// the task starts incomplete.
    async fn insert(&self, task: CreateTask) -> TaskResult<Task>;

    /// Looks a task up by id.
    async fn find_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// Returns up to `limit` incomplete tasks, newest first.
    /// Ties on `created_at` break toward the higher id.
    async fn list_incomplete(&self, limit: u64) -> TaskResult<Vec<Task>>;

    /// Marks a task completed in a single atomic update.
    ///
    /// Returns the updated task, or `None` when no row matched `id`.
    async fn mark_completed(&self, id: i32) -> TaskResult<Option<Task>>;
}
