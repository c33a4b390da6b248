//! Task domain: models, persistence, service logic, and HTTP handlers.

pub mod clock;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use error::{TaskError, TaskResult};
pub use models::{CreateTask, Task};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
