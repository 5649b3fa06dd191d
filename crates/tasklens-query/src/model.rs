//! Task records consumed by the query engine.
//!
//! The engine only reads these records; it never mutates them. Persistence
//! of tasks, projects, and labels lives elsewhere.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, `p1` (highest) through `p4` (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Highest priority.
    P1,
    P2,
    P3,
    /// Lowest priority (default for new tasks).
    P4,
}

impl Priority {
    /// Parses a user-facing priority value (`p1`..`p4`, case-insensitive).
    pub fn from_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "p1" => Some(Priority::P1),
            "p2" => Some(Priority::P2),
            "p3" => Some(Priority::P3),
            "p4" => Some(Priority::P4),
            _ => None,
        }
    }

    /// Returns the user-facing form (`"p1"`..`"p4"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "p1",
            Priority::P2 => "p2",
            Priority::P3 => "p3",
            Priority::P4 => "p4",
        }
    }
}

/// A single task record.
///
/// Only the fields relevant to filter evaluation are required; everything
/// optional defaults to "absent" when deserializing partial records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task id.
    pub id: String,

    /// Task title.
    pub content: String,

    /// Free-form description, empty when unset.
    #[serde(default)]
    pub description: String,

    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,

    /// Priority level, if one has been assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Due date (calendar day, no time component).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Label names attached to this task.
    #[serde(default)]
    pub labels: Vec<String>,

    /// Id of the project the task belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Task {
    /// Creates a minimal task with the given id and content.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            description: String::new(),
            completed: false,
            priority: None,
            due_date: None,
            created_at: None,
            labels: Vec::new(),
            project_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_value() {
        assert_eq!(Priority::from_value("p1"), Some(Priority::P1));
        assert_eq!(Priority::from_value("P3"), Some(Priority::P3));
        assert_eq!(Priority::from_value("p4"), Some(Priority::P4));
        assert_eq!(Priority::from_value("p5"), None);
        assert_eq!(Priority::from_value("high"), None);
    }

    #[test]
    fn test_priority_as_str_round_trip() {
        for p in [Priority::P1, Priority::P2, Priority::P3, Priority::P4] {
            assert_eq!(Priority::from_value(p.as_str()), Some(p));
        }
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("t1", "Buy milk");
        assert_eq!(task.id, "t1");
        assert_eq!(task.content, "Buy milk");
        assert!(!task.completed);
        assert!(task.priority.is_none());
        assert!(task.due_date.is_none());
        assert!(task.labels.is_empty());
        assert!(task.project_id.is_none());
    }

    #[test]
    fn test_task_deserialize_minimal() {
        let json = r#"{"id": "t1", "content": "Write report"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "t1");
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = Task {
            id: "t2".to_string(),
            content: "Review PR".to_string(),
            description: "the big one".to_string(),
            completed: true,
            priority: Some(Priority::P2),
            due_date: Some(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()),
            created_at: Some(Utc::now()),
            labels: vec!["work".to_string()],
            project_id: Some("proj-1".to_string()),
        };

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::P1).unwrap();
        assert_eq!(json, r#""p1""#);
    }
}
