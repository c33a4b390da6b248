use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, OUTSTANDING_WINDOW, Task};
use crate::repository::TaskRepository;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

/// Business rules for tasks, independent of the storage backend.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Returns the outstanding tasks window: up to five incomplete tasks,
    /// newest first.
    #[instrument(skip(self))]
    pub async fn list_outstanding(&self) -> TaskResult<Vec<Task>> {
        self.repository.list_incomplete(OUTSTANDING_WINDOW).await
    }

    /// Validates and persists a new task.
    ///
    /// A title that is empty after trimming is rejected before the store
    /// is touched.
    #[instrument(skip(self, task), fields(title_len = task.title.len()))]
    pub async fn create_task(&self, task: CreateTask) -> TaskResult<Task> {
        if task.title.trim().is_empty() {
            return Err(TaskError::Validation("Title cannot be empty".to_string()));
        }
        task.validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        self.repository.insert(task).await
    }

    /// Marks a task completed.
    ///
    /// Completing an already-completed task is a no-op that returns the
    /// task unchanged.
    #[instrument(skip(self))]
    pub async fn complete_task(&self, id: i32) -> TaskResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        if task.is_completed {
            tracing::debug!(task_id = id, "Task already completed");
            return Ok(task);
        }

        self.repository
            .mark_completed(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;
    use chrono::{TimeZone, Utc};

    fn task(id: i32, title: &str, is_completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            is_completed,
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_task_returns_incomplete_task() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert()
            .withf(|t| t.title == "Buy milk")
            .return_once(|_| Ok(task(1, "Buy milk", false)));

        let service = TaskService::new(Arc::new(repo));
        let created = service
            .create_task(CreateTask {
                title: "Buy milk".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert!(!created.is_completed);
    }

    #[tokio::test]
    async fn test_create_task_rejects_empty_title() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert().times(0);

        let service = TaskService::new(Arc::new(repo));
        let err = service
            .create_task(CreateTask {
                title: String::new(),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Validation(msg) if msg == "Title cannot be empty"));
    }

    #[tokio::test]
    async fn test_create_task_rejects_whitespace_title() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert().times(0);

        let service = TaskService::new(Arc::new(repo));
        let err = service
            .create_task(CreateTask {
                title: "   \t ".to_string(),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Validation(msg) if msg == "Title cannot be empty"));
    }

    #[tokio::test]
    async fn test_create_task_rejects_overlong_title() {
        let mut repo = MockTaskRepository::new();
        repo.expect_insert().times(0);

        let service = TaskService::new(Arc::new(repo));
        let err = service
            .create_task(CreateTask {
                title: "x".repeat(256),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_outstanding_uses_window_of_five() {
        let mut repo = MockTaskRepository::new();
        repo.expect_list_incomplete()
            .withf(|limit| *limit == 5)
            .return_once(|_| Ok(vec![task(3, "c", false), task(2, "b", false)]));

        let service = TaskService::new(Arc::new(repo));
        let tasks = service.list_outstanding().await.unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 3);
    }

    #[tokio::test]
    async fn test_complete_task_marks_incomplete_task() {
        let mut repo = MockTaskRepository::new();
        repo.expect_find_by_id()
            .with(mockall::predicate::eq(1))
            .return_once(|_| Ok(Some(task(1, "Buy milk", false))));
        repo.expect_mark_completed()
            .with(mockall::predicate::eq(1))
            .return_once(|_| Ok(Some(task(1, "Buy milk", true))));

        let service = TaskService::new(Arc::new(repo));
        let completed = service.complete_task(1).await.unwrap();

        assert!(completed.is_completed);
    }

    #[tokio::test]
    async fn test_complete_task_missing_returns_not_found() {
        let mut repo = MockTaskRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));
        repo.expect_mark_completed().times(0);

        let service = TaskService::new(Arc::new(repo));
        let err = service.complete_task(99).await.unwrap_err();

        assert!(matches!(err, TaskError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_complete_task_already_completed_is_noop() {
        let mut repo = MockTaskRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(task(1, "Buy milk", true))));
        repo.expect_mark_completed().times(0);

        let service = TaskService::new(Arc::new(repo));
        let completed = service.complete_task(1).await.unwrap();

        assert!(completed.is_completed);
    }
}
