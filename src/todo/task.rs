use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::id::generate_id;

/// A single to-do item.
///
/// Serialized with the keys `id`, `text`, `done` and `createdAt`, the last one
/// as milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
    /// Millisecond precision, the most the stored form keeps
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// Create an open task with a fresh id. `text` is stored as given.
    pub fn new(text: String) -> Self {
        Self::restore(generate_id(), text, false, Utc::now())
    }

    /// Rebuild a task from its parts. `created_at` is cut to milliseconds.
    pub fn restore(id: String, text: String, done: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            done,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    pub fn is_open(&self) -> bool {
        !self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new("Buy milk".to_string());
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
        assert!(task.is_open());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut task = Task::new("Task".to_string());
        task.toggle();
        assert!(task.done);
        task.toggle();
        assert!(!task.done);
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::restore(
            "abc".to_string(),
            "Walk dog".to_string(),
            true,
            DateTime::from_timestamp_millis(1_700_000_000_123).unwrap(),
        );

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["text"], "Walk dog");
        assert_eq!(json["done"], true);
        assert_eq!(json["createdAt"], 1_700_000_000_123i64);
    }

    #[test]
    fn test_deserialize_from_stored_shape() {
        let json = r#"{"id":"f00d18c","text":"Read","done":false,"createdAt":1700000000000}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "f00d18c");
        assert_eq!(task.created_at().timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_restore_survives_json_round_trip() {
        let task = Task::restore("id".to_string(), "Walk dog".to_string(), false, Utc::now());
        assert_eq!(task.created_at().timestamp_subsec_nanos() % 1_000_000, 0);

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }
}
