//! Server setup: router assembly, startup, health checks, graceful shutdown.

mod app;
mod health;
mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
