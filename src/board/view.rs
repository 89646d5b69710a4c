//! Immutable UI state shared between list and board render modes.

use crate::board::domain::{StatusId, TaskId};
use crate::board::query::SortField;
use im::OrdSet;

/// Set-valued presentation state.
///
/// Every update returns a new value; a render pass holding the previous
/// value keeps seeing it unchanged. The sets share structure, so copies are
/// cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardViewState {
    expanded_tasks: OrdSet<TaskId>,
    collapsed_statuses: OrdSet<StatusId>,
    visible_columns: OrdSet<SortField>,
}

impl Default for BoardViewState {
    fn default() -> Self {
        Self {
            expanded_tasks: OrdSet::new(),
            collapsed_statuses: OrdSet::new(),
            visible_columns: SortField::ALL.iter().copied().collect(),
        }
    }
}

impl BoardViewState {
    /// Creates the initial state: nothing expanded or collapsed, every
    /// column visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the task's subtasks are shown.
    #[must_use]
    pub fn is_expanded(&self, task_id: &TaskId) -> bool {
        self.expanded_tasks.contains(task_id)
    }

    /// Returns `true` when the status group is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, status_id: &StatusId) -> bool {
        self.collapsed_statuses.contains(status_id)
    }

    /// Returns `true` when the list column is shown.
    #[must_use]
    pub fn is_column_visible(&self, column: SortField) -> bool {
        self.visible_columns.contains(&column)
    }

    /// Returns the expanded tasks.
    #[must_use]
    pub const fn expanded_tasks(&self) -> &OrdSet<TaskId> {
        &self.expanded_tasks
    }

    /// Returns the collapsed statuses.
    #[must_use]
    pub const fn collapsed_statuses(&self) -> &OrdSet<StatusId> {
        &self.collapsed_statuses
    }

    /// Returns the visible list columns.
    #[must_use]
    pub const fn visible_columns(&self) -> &OrdSet<SortField> {
        &self.visible_columns
    }

    /// Returns a state with the task's expansion toggled.
    #[must_use]
    pub fn toggle_expanded(&self, task_id: &TaskId) -> Self {
        Self {
            expanded_tasks: toggled(&self.expanded_tasks, task_id),
            ..self.clone()
        }
    }

    /// Returns a state with the status group's collapse toggled.
    #[must_use]
    pub fn toggle_collapsed(&self, status_id: &StatusId) -> Self {
        Self {
            collapsed_statuses: toggled(&self.collapsed_statuses, status_id),
            ..self.clone()
        }
    }

    /// Returns a state with the list column's visibility toggled.
    #[must_use]
    pub fn toggle_column(&self, column: SortField) -> Self {
        Self {
            visible_columns: toggled(&self.visible_columns, &column),
            ..self.clone()
        }
    }

    /// Returns a state with every expanded task not in `existing` dropped.
    ///
    /// Called after a reload so deleted tasks do not linger in the set.
    #[must_use]
    pub fn retain_tasks<'a>(&self, existing: impl IntoIterator<Item = &'a TaskId>) -> Self {
        let live: OrdSet<TaskId> = existing.into_iter().cloned().collect();
        Self {
            expanded_tasks: self.expanded_tasks.clone().intersection(live),
            ..self.clone()
        }
    }
}

fn toggled<T: Ord + Clone>(set: &OrdSet<T>, value: &T) -> OrdSet<T> {
    if set.contains(value) {
        set.without(value)
    } else {
        set.update(value.clone())
    }
}
