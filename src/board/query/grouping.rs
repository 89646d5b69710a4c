//! Board and list groupings of a filtered task sequence.

use crate::board::domain::{Status, StatusId, StatusType, Task, TaskId};
use std::collections::HashMap;

/// One board column and the top-level tasks filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    status: Status,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the column's status.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the column's tasks in input order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Board columns in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    columns: Vec<BoardColumn>,
    unfiled: Vec<Task>,
}

impl BoardColumns {
    /// Returns the columns ordered by status position.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status_id`.
    #[must_use]
    pub fn column(&self, status_id: &StatusId) -> Option<&BoardColumn> {
        self.columns
            .iter()
            .find(|column| column.status.id() == status_id)
    }

    /// Returns top-level tasks whose status is missing from the registry.
    #[must_use]
    pub fn unfiled(&self) -> &[Task] {
        &self.unfiled
    }

    /// Returns `true` when no status and no task is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.unfiled.is_empty()
    }
}

/// Groups top-level, non-deleted tasks by status.
///
/// Columns follow status position (ties keep registry order); tasks keep
/// their input order inside a column.
#[must_use]
pub fn group_by_status(tasks: &[Task], statuses: &[Status]) -> BoardColumns {
    let mut ordered: Vec<&Status> = statuses.iter().collect();
    ordered.sort_by_key(|status| status.position());

    let mut columns: Vec<BoardColumn> = ordered
        .into_iter()
        .map(|status| BoardColumn {
            status: status.clone(),
            tasks: Vec::new(),
        })
        .collect();
    let index: HashMap<StatusId, usize> = columns
        .iter()
        .enumerate()
        .map(|(position, column)| (column.status.id().clone(), position))
        .collect();

    let mut unfiled = Vec::new();
    for task in tasks.iter().filter(|task| is_top_level(task)) {
        match index
            .get(task.status_id())
            .and_then(|position| columns.get_mut(*position))
        {
            Some(column) => column.tasks.push(task.clone()),
            None => unfiled.push(task.clone()),
        }
    }

    BoardColumns { columns, unfiled }
}

/// Top-level tasks grouped by lifecycle category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusTypeGroups {
    groups: Vec<(StatusType, Vec<Task>)>,
    unresolved: Vec<Task>,
}

impl StatusTypeGroups {
    /// Returns one group per status type in lifecycle order, including empty
    /// groups.
    #[must_use]
    pub fn groups(&self) -> &[(StatusType, Vec<Task>)] {
        &self.groups
    }

    /// Returns the tasks of one status type.
    #[must_use]
    pub fn tasks_of(&self, status_type: StatusType) -> &[Task] {
        self.groups
            .iter()
            .find(|(group_type, _)| *group_type == status_type)
            .map(|(_, tasks)| tasks.as_slice())
            .unwrap_or_default()
    }

    /// Returns tasks whose status type could not be resolved.
    #[must_use]
    pub fn unresolved(&self) -> &[Task] {
        &self.unresolved
    }
}

/// Groups top-level, non-deleted tasks by status type.
#[must_use]
pub fn group_by_status_type(tasks: &[Task]) -> StatusTypeGroups {
    let mut groups: Vec<(StatusType, Vec<Task>)> = StatusType::ALL
        .iter()
        .map(|status_type| (*status_type, Vec::new()))
        .collect();
    let mut unresolved = Vec::new();
    for task in tasks.iter().filter(|task| is_top_level(task)) {
        let bucket = task.status().status_type().and_then(|status_type| {
            groups
                .iter_mut()
                .find(|(group_type, _)| *group_type == status_type)
        });
        match bucket {
            Some((_, group_tasks)) => group_tasks.push(task.clone()),
            None => unresolved.push(task.clone()),
        }
    }
    StatusTypeGroups { groups, unresolved }
}

/// List view: top-level rows plus subtasks indexed by parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListView {
    top_level: Vec<Task>,
    subtasks: HashMap<TaskId, Vec<Task>>,
}

impl TaskListView {
    /// Returns top-level tasks in input order.
    #[must_use]
    pub fn top_level(&self) -> &[Task] {
        &self.top_level
    }

    /// Returns the subtasks of `parent_id` in input order.
    #[must_use]
    pub fn subtasks_of(&self, parent_id: &TaskId) -> &[Task] {
        self.subtasks
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of subtasks indexed under any parent.
    #[must_use]
    pub fn subtask_count(&self) -> usize {
        self.subtasks.values().map(Vec::len).sum()
    }
}

/// Splits non-deleted tasks into top-level rows and per-parent subtasks.
#[must_use]
pub fn build_list(tasks: &[Task]) -> TaskListView {
    let mut view = TaskListView::default();
    for task in tasks.iter().filter(|task| !task.is_deleted()) {
        match task.parent_id() {
            Some(parent_id) => view
                .subtasks
                .entry(parent_id.clone())
                .or_default()
                .push(task.clone()),
            None => view.top_level.push(task.clone()),
        }
    }
    view
}

fn is_top_level(task: &Task) -> bool {
    !task.is_subtask() && !task.is_deleted()
}
