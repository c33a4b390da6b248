use crate::clock::{Clock, SystemClock};
use crate::entity::{self, Entity as TaskEntity};
use crate::error::TaskResult;
use crate::models::{CreateTask, Task};
use crate::repository::TaskRepository;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;

/// Postgres-backed task store built on SeaORM.
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    /// Uses the given clock for `created_at` timestamps. Tests pass a
    /// fixed clock to get deterministic ordering.
    pub fn with_clock(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn insert(&self, task: CreateTask) -> TaskResult<Task> {
        let active = entity::ActiveModel {
            id: NotSet,
            title: Set(task.title),
            description: Set(task.description),
            is_completed: Set(false),
            created_at: Set(self.clock.now().into()),
        };

        let model = active.insert(&self.db).await?;
        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let model = TaskEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_incomplete(&self, limit: u64) -> TaskResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(entity::Column::IsCompleted.eq(false))
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn mark_completed(&self, id: i32) -> TaskResult<Option<Task>> {
        // Single UPDATE so concurrent completions cannot interleave
        // between a read and a write.
        let result = TaskEntity::update_many()
            .col_expr(entity::Column::IsCompleted, Expr::value(true))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::info!(task_id = id, "Marked task completed");
        self.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, title: &str, is_completed: bool) -> entity::Model {
        entity::Model {
            id,
            title: title.to_string(),
            description: None,
            is_completed,
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap().into(),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_stored_task() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Buy milk", false)]])
            .into_connection();

        let repo = PgTaskRepository::new(db);
        let task = repo
            .insert(CreateTask {
                title: "Buy milk".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.is_completed);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let repo = PgTaskRepository::new(db);
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_incomplete_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(2, "Second", false), model(1, "First", false)]])
            .into_connection();

        let repo = PgTaskRepository::new(db);
        let tasks = repo.list_incomplete(5).await.unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 2);
        assert_eq!(tasks[1].id, 1);
    }

    #[tokio::test]
    async fn test_mark_completed_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                rows_affected: 0,
                ..Default::default()
            }])
            .into_connection();

        let repo = PgTaskRepository::new(db);
        assert!(repo.mark_completed(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mark_completed_refetches_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                rows_affected: 1,
                ..Default::default()
            }])
            .append_query_results([vec![model(1, "Buy milk", true)]])
            .into_connection();

        let repo = PgTaskRepository::new(db);
        let task = repo.mark_completed(1).await.unwrap().unwrap();

        assert!(task.is_completed);
    }
}
