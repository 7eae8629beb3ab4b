// Data models for the task list

use serde::{Deserialize, Serialize};

/// Unique task identifier, allocated from a monotonic counter owned by the
/// store. Ids are never reused within a store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Non-empty, trimmed. Enforced when the task is created or edited;
    /// toggling completion never re-validates.
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(42).to_string(), "42");
    }

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: TaskId(1),
            text: "Buy milk".to_string(),
            completed: false,
            created_at: 1000,
        };

        let json = serde_json::to_string(&task).unwrap();
        // TaskId serializes transparently as a bare number
        assert!(json.contains("\"id\":1"));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}
