use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use taskserver::config::AppConfig;
use taskserver::main_module::run_axum_server;
use taskserver::shared::state::AppState;
use taskserver::shared::utils::create_conn;
use taskserver::tasks::run_migrations;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Failed to load config: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let pool = create_conn(&config.database_url).map_err(|e| {
        error!("Failed to create database pool: {e}");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    run_migrations(&pool).map_err(|e| {
        error!("Failed to apply migrations: {e}");
        std::io::Error::other(e.to_string())
    })?;

    info!(
        "Starting HTTP server on {}:{}",
        config.server.host, config.server.port
    );

    let app_state = Arc::new(AppState::new(config, pool));
    run_axum_server(app_state).await
}
