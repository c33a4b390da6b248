mod api;
mod config;
mod state;

use axum_helpers::server::{create_production_app, create_router, health_router};
use config::Config;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_tasks::handlers::ApiDoc;
use migration::Migrator;
use state::AppState;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        environment = %config.environment,
        "Starting"
    );

    let db = connect_from_config_with_retry(config.database.clone(), None).await?;
    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState::new(db.clone());

    let router = create_router::<ApiDoc>(api::routes(&state))
        .await?
        .merge(health_router(config.app))
        .merge(api::ready_router(state));

    let cleanup = async move {
        info!("Closing database connection");
        if let Err(e) = db.close().await {
            tracing::warn!("Failed to close database connection: {e}");
        }
    };

    create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;

    info!("Shutdown complete");
    Ok(())
}
