//! End-to-end tests against a real Postgres instance.
//!
//! Run with `cargo test -- --ignored` (requires Docker).

use chrono::{DateTime, TimeZone, Utc};
use domain_tasks::{Clock, CreateTask, PgTaskRepository, TaskError, TaskService};
use std::sync::Arc;
use test_utils::TestDatabase;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn new_task(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        description: None,
    }
}

fn service(db: &TestDatabase) -> TaskService {
    TaskService::new(Arc::new(PgTaskRepository::new(db.connection())))
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_outstanding_window_keeps_five_newest() {
    let db = TestDatabase::new().await.unwrap();
    let service = service(&db);

    for i in 1..=7 {
        service.create_task(new_task(&format!("T{i}"))).await.unwrap();
    }

    let outstanding = service.list_outstanding().await.unwrap();
    let titles: Vec<_> = outstanding.iter().map(|t| t.title.as_str()).collect();

    assert_eq!(titles, vec!["T7", "T6", "T5", "T4", "T3"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_completing_a_windowed_task_reveals_an_older_one() {
    let db = TestDatabase::new().await.unwrap();
    let service = service(&db);

    let mut ids = Vec::new();
    for i in 1..=6 {
        let task = service.create_task(new_task(&format!("T{i}"))).await.unwrap();
        ids.push(task.id);
    }

    // T2..T6 are in the window; completing T3 should pull T1 back in.
    let t3 = ids[2];
    service.complete_task(t3).await.unwrap();

    let outstanding = service.list_outstanding().await.unwrap();
    let titles: Vec<_> = outstanding.iter().map(|t| t.title.as_str()).collect();

    assert_eq!(titles, vec!["T6", "T5", "T4", "T2", "T1"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_complete_is_idempotent() {
    let db = TestDatabase::new().await.unwrap();
    let service = service(&db);

    let task = service.create_task(new_task("Buy milk")).await.unwrap();

    let first = service.complete_task(task.id).await.unwrap();
    let second = service.complete_task(task.id).await.unwrap();

    assert!(first.is_completed);
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_complete_unknown_task_is_not_found() {
    let db = TestDatabase::new().await.unwrap();
    let service = service(&db);

    let err = service.complete_task(424242).await.unwrap_err();
    assert!(matches!(err, TaskError::NotFound(424242)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_whitespace_title_is_rejected() {
    let db = TestDatabase::new().await.unwrap();
    let service = service(&db);

    let err = service.create_task(new_task("  \t  ")).await.unwrap_err();
    assert!(matches!(err, TaskError::Validation(msg) if msg == "Title cannot be empty"));

    assert!(service.list_outstanding().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_equal_timestamps_break_ties_by_higher_id() {
    let db = TestDatabase::new().await.unwrap();
    let clock = Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
    ));
    let repo = PgTaskRepository::with_clock(db.connection(), clock);
    let service = TaskService::new(Arc::new(repo));

    for i in 1..=3 {
        service.create_task(new_task(&format!("T{i}"))).await.unwrap();
    }

    let outstanding = service.list_outstanding().await.unwrap();
    let titles: Vec<_> = outstanding.iter().map(|t| t.title.as_str()).collect();

    // All three share a created_at, so the later inserts win.
    assert_eq!(titles, vec!["T3", "T2", "T1"]);
}
