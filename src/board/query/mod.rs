//! Task filter/sort engine.
//!
//! Pure transformations from a raw task collection to the sequences and
//! groupings rendered by list and board views. Soft-deleted tasks never
//! survive filtering.

mod filter;
mod grouping;
mod markup;
mod sort;

pub use filter::{DateRange, TaskFilter};
pub use grouping::{
    BoardColumn, BoardColumns, StatusTypeGroups, TaskListView, build_list, group_by_status,
    group_by_status_type,
};
pub use markup::strip_markup;
pub use sort::{SortDirection, SortField, SortKey, SortSpec, compare, sort_key, sort_tasks};

use crate::board::domain::Task;

/// Filters `tasks` with every active predicate of `filter`, then sorts the
/// survivors stably by `sort`.
#[must_use]
pub fn filter_and_sort(tasks: &[Task], filter: &TaskFilter, sort: SortSpec) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| !task.is_deleted() && filter.matches(task))
        .cloned()
        .collect();
    sort_tasks(&mut selected, sort);
    selected
}
