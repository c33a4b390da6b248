use database::postgres::{DatabaseConnection, connect, run_migrations};
use migration::Migrator;
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;

/// Throwaway Postgres instance for integration tests.
///
/// Starts a container, connects, and applies all migrations. The container
/// is stopped when this value is dropped.
pub struct TestDatabase {
    // Held so the container outlives the connection.
    _container: ContainerAsync<Postgres>,
    connection: DatabaseConnection,
    connection_string: String,
}

impl TestDatabase {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = Postgres::default().start().await?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432).await?;
        let connection_string = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        tracing::debug!("Test database available at {connection_string}");

        let connection = connect(&connection_string).await?;
        run_migrations::<Migrator>(&connection, "test-utils").await?;

        Ok(Self {
            _container: container,
            connection,
            connection_string,
        })
    }

    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}
