use diesel::connection::SimpleConnection;
use log::info;

use super::error::TaskError;
use crate::shared::utils::DbPool;

pub fn create_tasks_table_migration() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    );
    "#
}

pub fn run_migrations(pool: &DbPool) -> Result<(), TaskError> {
    let mut conn = pool.get().map_err(|e| {
        log::error!("Failed to get database connection for migration: {e}");
        TaskError::DatabaseConnection
    })?;
    conn.batch_execute(create_tasks_table_migration())
        .map_err(|e| {
            log::error!("Failed to run tasks migration: {e}");
            TaskError::QueryFailed
        })?;
    info!("Tasks schema is up to date");
    Ok(())
}
