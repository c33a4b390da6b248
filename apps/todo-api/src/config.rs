use core_config::server::ServerConfig;
use core_config::{AppInfo, Environment, FromEnv, app_info};
use database::postgres::PostgresConfig;

/// Application configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
        })
    }
}
