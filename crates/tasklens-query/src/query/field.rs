//! Field resolvers: one comparator per recognized field.
//!
//! Fields are a closed enum so adding one is a single-file change: extend
//! [`FieldKind`], its `resolve` table, and its `matches` arm. The parser
//! and evaluator never need to know.

use chrono::{Datelike, Local};

use crate::model::{Priority, Task};

/// The recognized filter fields.
///
/// Resolved from the lower-cased field name of a `field:value` clause.
/// Unrecognized names resolve to no `FieldKind` at all, which the evaluator
/// treats as a constant non-match rather than an error, so one unknown
/// clause cannot invalidate an otherwise-valid compound query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `status:active`, `status:completed` / `status:done`.
    Status,
    /// `priority:p1` .. `priority:p4`.
    Priority,
    /// `due:overdue|today|tomorrow|upcoming|thisweek`.
    Due,
    /// `created:today`.
    Created,
    /// `label:<name>`, case-insensitive membership.
    Label,
    /// `project:<id>`, exact id match.
    Project,
    /// `search:<text>`, substring over content and description.
    Search,
}

/// Canonical field names, in registration order.
pub const FIELD_NAMES: &[&str] = &[
    "status", "priority", "due", "created", "label", "project", "search",
];

impl FieldKind {
    /// Resolves a lower-cased field name, including its aliases.
    pub fn resolve(name: &str) -> Option<FieldKind> {
        match name {
            "status" | "state" => Some(FieldKind::Status),
            "priority" => Some(FieldKind::Priority),
            "due" | "duedate" => Some(FieldKind::Due),
            "created" | "createddate" => Some(FieldKind::Created),
            "label" => Some(FieldKind::Label),
            "project" => Some(FieldKind::Project),
            "search" | "text" => Some(FieldKind::Search),
            _ => None,
        }
    }

    /// Tests whether `task` matches this field with the given literal value.
    ///
    /// Pure and side-effect free; an unrecognized value for a known field is
    /// a non-match, never an error.
    pub fn matches(&self, task: &Task, value: &str) -> bool {
        match self {
            FieldKind::Status => match value.to_lowercase().as_str() {
                "active" => !task.completed,
                "completed" | "done" => task.completed,
                _ => false,
            },

            FieldKind::Priority => {
                Priority::from_value(value).is_some_and(|p| task.priority == Some(p))
            }

            FieldKind::Due => due_matches(task, value),

            FieldKind::Created => match value.to_lowercase().as_str() {
                "today" => task
                    .created_at
                    .is_some_and(|at| at.with_timezone(&Local).date_naive() == today()),
                _ => false,
            },

            FieldKind::Label => {
                let value_lower = value.to_lowercase();
                task.labels.iter().any(|l| l.to_lowercase() == value_lower)
            }

            FieldKind::Project => task.project_id.as_deref() == Some(value),

            FieldKind::Search => {
                let needle = value.to_lowercase();
                task.content.to_lowercase().contains(&needle)
                    || task.description.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Resolves a field name and tests the task against it.
///
/// This is the single entry point the evaluator uses for `field:value`
/// leaves. Unknown field names yield `false`.
pub fn resolve_match(task: &Task, field: &str, value: &str) -> bool {
    FieldKind::resolve(field).is_some_and(|kind| kind.matches(task, value))
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn due_matches(task: &Task, value: &str) -> bool {
    let Some(due) = task.due_date else {
        return false;
    };
    let today = today();

    match value.to_lowercase().as_str() {
        "overdue" => due < today && !task.completed,
        "today" => due == today,
        "tomorrow" => due == today + chrono::Duration::days(1),
        "upcoming" => due > today,
        "thisweek" => {
            let week_start = today - chrono::Duration::days(today.weekday().num_days_from_sunday() as i64);
            let week_end = week_start + chrono::Duration::days(7);
            due >= week_start && due < week_end
        }
        _ => false,
    }
}
