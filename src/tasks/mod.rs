mod error;
mod handlers;
mod migration;
mod service;
mod types;

pub use error::*;
pub use handlers::*;
pub use migration::*;
pub use service::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Task;
    use chrono::Utc;

    fn task(id: i32, completed: bool) -> Task {
        let now = Utc::now();
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_stats_empty_list() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.pending_tasks, 0);
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_stats_counts_add_up() {
        let tasks = vec![task(1, true), task(2, false), task(3, true), task(4, false)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.completed_tasks, 2);
        assert_eq!(stats.pending_tasks, 2);
        assert_eq!(
            stats.completed_tasks + stats.pending_tasks,
            stats.total_tasks
        );
        assert_eq!(stats.completion_rate, 50.0);
    }

    #[test]
    fn test_stats_all_completed() {
        let stats = TaskStats::from_tasks(&[task(1, true), task(2, true)]);
        assert_eq!(stats.completion_rate, 100.0);
        assert_eq!(stats.pending_tasks, 0);
    }

    #[test]
    fn test_task_error_display() {
        assert_eq!(TaskError::NotFound.to_string(), "Task not found");
        assert_eq!(
            TaskError::Validation("Title must not be empty".into()).to_string(),
            "Title must not be empty"
        );
        assert_eq!(
            TaskError::DatabaseConnection.to_string(),
            "Database connection failed"
        );
    }

    #[test]
    fn test_update_request_partial_deserialization() {
        let patch: UpdateTaskRequest = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert_eq!(patch.completed, Some(true));
    }

    #[test]
    fn test_create_request_defaults_completed() {
        let request: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "Write report"}"#).unwrap();
        assert_eq!(request.title, "Write report");
        assert!(request.description.is_none());
        assert!(!request.completed);
    }
}
