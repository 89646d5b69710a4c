//! Single-key stable sorting of task collections.

use crate::board::domain::Task;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

/// Field a task list is sorted by; doubles as the list column key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Task name.
    Name,
    /// Priority rank.
    Priority,
    /// Due date.
    DueDate,
    /// Creation timestamp.
    CreatedAt,
    /// Resolved status name.
    StatusName,
    /// Resolved assignee display name.
    AssigneeName,
}

impl SortField {
    /// Every sortable field.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Priority,
        Self::DueDate,
        Self::CreatedAt,
        Self::StatusName,
        Self::AssigneeName,
    ];
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// Sort field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by.
    pub field: SortField,
    /// Direction to sort in.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort specification.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Ascending by `field`.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Descending by `field`.
    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

impl Default for SortSpec {
    /// Newest tasks first.
    fn default() -> Self {
        Self::descending(SortField::CreatedAt)
    }
}

/// Extracted sort key.
///
/// Missing values extract as the zero of their type: an empty string, the
/// Unix epoch, or priority rank `0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Case-folded text.
    Text(String),
    /// Priority rank.
    Rank(u8),
    /// Calendar date.
    Date(NaiveDate),
    /// Timestamp.
    Timestamp(DateTime<Utc>),
}

/// Extracts the sort key of `task` for `field`.
#[must_use]
pub fn sort_key(task: &Task, field: SortField) -> SortKey {
    match field {
        SortField::Name => SortKey::Text(task.name().to_lowercase()),
        SortField::Priority => SortKey::Rank(task.priority().map_or(0, |priority| priority.rank())),
        // `NaiveDate::default()` is 1970-01-01.
        SortField::DueDate => SortKey::Date(task.due_date().unwrap_or_default()),
        SortField::CreatedAt => SortKey::Timestamp(task.created_at()),
        SortField::StatusName => {
            SortKey::Text(task.status().name().unwrap_or_default().to_lowercase())
        }
        SortField::AssigneeName => {
            SortKey::Text(task.assignee_name().unwrap_or_default().to_lowercase())
        }
    }
}

/// Compares two tasks under `spec`.
#[must_use]
pub fn compare(left: &Task, right: &Task, spec: SortSpec) -> Ordering {
    let ordering = sort_key(left, spec.field).cmp(&sort_key(right, spec.field));
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sorts `tasks` in place; ties keep their input order in both directions.
pub fn sort_tasks(tasks: &mut [Task], spec: SortSpec) {
    match spec.direction {
        SortDirection::Ascending => tasks.sort_by_cached_key(|task| sort_key(task, spec.field)),
        SortDirection::Descending => {
            tasks.sort_by_cached_key(|task| Reverse(sort_key(task, spec.field)));
        }
    }
}
