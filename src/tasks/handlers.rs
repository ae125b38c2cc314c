use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;

use super::error::TaskError;
use super::service::TaskService;
use super::types::{CreateTaskRequest, DeleteResponse, TaskStats, UpdateTaskRequest};
use crate::shared::models::Task;
use crate::shared::state::AppState;

pub fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks_handler))
        .route("/tasks", post(create_task_handler))
        .route("/tasks/:id", get(get_task_handler))
        .route("/tasks/:id", put(update_task_handler))
        .route("/tasks/:id", delete(delete_task_handler))
        .route("/stats", get(stats_handler))
}

pub async fn list_tasks_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, TaskError> {
    let service = TaskService::new(state.conn.clone());
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

pub async fn get_task_handler(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<Task>, TaskError> {
    let service = TaskService::new(state.conn.clone());
    let task = service.get_task(task_id).await?.ok_or(TaskError::NotFound)?;
    Ok(Json(task))
}

pub async fn create_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Task>, TaskError> {
    let service = TaskService::new(state.conn.clone());
    let task = service.create_task(request).await?;
    Ok(Json(task))
}

pub async fn update_task_handler(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, TaskError> {
    let service = TaskService::new(state.conn.clone());
    let task = service.update_task(task_id, request).await?;
    Ok(Json(task))
}

pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
) -> Result<Json<DeleteResponse>, TaskError> {
    let service = TaskService::new(state.conn.clone());
    service.delete_task(task_id).await?;
    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

pub async fn stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TaskStats>, TaskError> {
    let service = TaskService::new(state.conn.clone());
    let stats = service.statistics().await?;
    Ok(Json(stats))
}
