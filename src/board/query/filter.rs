//! Filter predicates over task collections.

use super::markup::strip_markup;
use crate::board::domain::{Assignment, Priority, StatusType, Task, UserId};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Inclusive date range with optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range; either bound may be open.
    #[must_use]
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Returns `true` when at least one bound is set.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Returns `true` when `date` lies within the bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Applies the range to an optional date.
    ///
    /// An unbounded range passes everything; a bounded range rejects a
    /// missing date.
    #[must_use]
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        if !self.is_bounded() {
            return true;
        }
        date.is_some_and(|value| self.contains(value))
    }
}

/// Conjunction of optional task predicates.
///
/// Empty sets and unbounded ranges pass every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: Option<String>,
    status_types: BTreeSet<StatusType>,
    priorities: BTreeSet<Priority>,
    assignees: BTreeSet<Assignment>,
    creators: BTreeSet<UserId>,
    due: DateRange,
    created: DateRange,
}

impl TaskFilter {
    /// Creates a filter that passes every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text; blank text disables the predicate.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let raw = search.into();
        let trimmed = raw.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Restricts to the given status types.
    #[must_use]
    pub fn with_status_types(mut self, status_types: impl IntoIterator<Item = StatusType>) -> Self {
        self.status_types = status_types.into_iter().collect();
        self
    }

    /// Restricts to the given priorities.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Restricts to the given assignments.
    ///
    /// Including [`Assignment::Unassigned`] selects unassigned tasks.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = Assignment>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Restricts to tasks authored by the given users.
    #[must_use]
    pub fn with_creators(mut self, creators: impl IntoIterator<Item = UserId>) -> Self {
        self.creators = creators.into_iter().collect();
        self
    }

    /// Restricts due dates to `range`.
    #[must_use]
    pub const fn with_due_range(mut self, range: DateRange) -> Self {
        self.due = range;
        self
    }

    /// Restricts creation dates to `range`.
    #[must_use]
    pub const fn with_created_range(mut self, range: DateRange) -> Self {
        self.created = range;
        self
    }

    /// Returns the normalised search text.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns `true` when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status_types.is_empty()
            && self.priorities.is_empty()
            && self.assignees.is_empty()
            && self.creators.is_empty()
            && !self.due.is_bounded()
            && !self.created.is_bounded()
    }

    /// Returns `true` when `task` passes every active predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && membership(&self.status_types, task.status().status_type())
            && membership(&self.priorities, task.priority())
            && (self.assignees.is_empty() || self.assignees.contains(task.assignment()))
            && (self.creators.is_empty() || self.creators.contains(task.created_by()))
            && self.due.admits(task.due_date())
            && self.created.admits(Some(task.created_at().date_naive()))
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(needle) = self.search.as_deref() else {
            return true;
        };
        task.name().to_lowercase().contains(needle)
            || task
                .description()
                .is_some_and(|description| strip_markup(description).to_lowercase().contains(needle))
    }
}

fn membership<T: Ord>(selected: &BTreeSet<T>, value: Option<T>) -> bool {
    selected.is_empty() || value.is_some_and(|inner| selected.contains(&inner))
}
