use chrono::Utc;
use diesel::prelude::*;
use log::error;

use super::error::TaskError;
use super::types::{CreateTaskRequest, TaskStats, UpdateTaskRequest};
use crate::shared::models::{tasks, NewTask, Task, TaskChangeset};
use crate::shared::utils::DbPool;

/// Repository for the `tasks` table. Every operation checks one pooled
/// connection out for the duration of the call; the connection goes back
/// to the pool when the guard drops, on success and on error alike.
pub struct TaskService {
    pool: DbPool,
}

impl TaskService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            tasks::table.load::<Task>(&mut conn).map_err(|e| {
                error!("Failed to list tasks: {e}");
                TaskError::QueryFailed
            })
        })
        .await
    }

    /// Missing ids are a `None`, not an error.
    pub async fn get_task(&self, task_id: i32) -> Result<Option<Task>, TaskError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            tasks::table
                .find(task_id)
                .first::<Task>(&mut conn)
                .optional()
                .map_err(|e| {
                    error!("Failed to get task {task_id}: {e}");
                    TaskError::QueryFailed
                })
        })
        .await
    }

    pub async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, TaskError> {
        if request.title.trim().is_empty() {
            return Err(TaskError::Validation("Title must not be empty".into()));
        }

        let new_task = NewTask {
            title: request.title,
            description: request.description,
            completed: request.completed,
        };

        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            diesel::insert_into(tasks::table)
                .values(&new_task)
                .get_result::<Task>(&mut conn)
                .map_err(|e| {
                    error!("Failed to create task: {e}");
                    TaskError::QueryFailed
                })
        })
        .await
    }

    /// Applies only the fields present in the request and refreshes
    /// `updated_at`. A row that no longer exists is a not-found.
    pub async fn update_task(
        &self,
        task_id: i32,
        request: UpdateTaskRequest,
    ) -> Result<Task, TaskError> {
        if let Some(title) = &request.title {
            if title.trim().is_empty() {
                return Err(TaskError::Validation("Title must not be empty".into()));
            }
        }

        let changeset = TaskChangeset {
            title: request.title,
            description: request.description,
            completed: request.completed,
            updated_at: Utc::now(),
        };

        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            diesel::update(tasks::table.find(task_id))
                .set(&changeset)
                .get_result::<Task>(&mut conn)
                .optional()
                .map_err(|e| {
                    error!("Failed to update task {task_id}: {e}");
                    TaskError::QueryFailed
                })?
                .ok_or(TaskError::NotFound)
        })
        .await
    }

    pub async fn delete_task(&self, task_id: i32) -> Result<(), TaskError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_conn(&pool)?;
            let deleted = diesel::delete(tasks::table.find(task_id))
                .execute(&mut conn)
                .map_err(|e| {
                    error!("Failed to delete task {task_id}: {e}");
                    TaskError::QueryFailed
                })?;
            if deleted == 0 {
                return Err(TaskError::NotFound);
            }
            Ok(())
        })
        .await
    }

    pub async fn statistics(&self) -> Result<TaskStats, TaskError> {
        let all = self.list_tasks().await?;
        Ok(TaskStats::from_tasks(&all))
    }
}

fn get_conn(
    pool: &DbPool,
) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>, TaskError>
{
    pool.get().map_err(|e| {
        error!("Failed to get database connection: {e}");
        TaskError::DatabaseConnection
    })
}

async fn run_blocking<T, F>(f: F) -> Result<T, TaskError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, TaskError> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("Blocking task join failed: {e}");
        TaskError::QueryFailed
    })?
}
