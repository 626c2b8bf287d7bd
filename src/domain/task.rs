use super::enums::TaskStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text written into the seed task of every new project
pub const SEED_TASK_TEXT: &str = "Project Created";

/// A single checklist entry owned by one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub status: TaskStatus,
    /// Manual position within the project
    pub order: i64,
    /// Creation time in seconds since the Unix epoch
    pub created: f64,
}

impl Task {
    /// Create a pending task with a fresh UUID, stamped with the current time
    pub fn new(text: String, order: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            status: TaskStatus::Pending,
            order,
            created: now_seconds(),
        }
    }

    /// The Done task every project starts with
    pub fn seed() -> Self {
        let mut task = Self::new(SEED_TASK_TEXT.to_string(), 0);
        task.status = TaskStatus::Done;
        task
    }
}

/// Current time as fractional seconds since the Unix epoch
pub fn now_seconds() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Next free manual position: one past the highest existing order, 0 for an empty project
pub fn next_order(tasks: &[Task]) -> i64 {
    tasks.iter().map(|t| t.order).max().map_or(0, |max| max + 1)
}
