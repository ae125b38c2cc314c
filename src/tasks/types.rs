use serde::{Deserialize, Serialize};

use crate::shared::models::Task;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub pending_tasks: i64,
    pub completion_rate: f64,
}

impl TaskStats {
    /// Derived on demand from the full task list. The rate is 0 for an
    /// empty list rather than dividing by zero.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len() as i64;
        let completed = tasks.iter().filter(|t| t.completed).count() as i64;
        let completion_rate = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        TaskStats {
            total_tasks: total,
            completed_tasks: completed,
            pending_tasks: total - completed,
            completion_rate,
        }
    }
}
