//! Pure drop-target resolution, independent of any pointer framework.

use crate::board::domain::{Status, StatusId, Task, TaskId};

/// Something the user can pick up on the board.
pub trait DragSource {
    /// Identifier reported by the pointer layer when this item is dragged.
    fn drag_id(&self) -> &str;
}

impl DragSource for Task {
    fn drag_id(&self) -> &str {
        self.id().as_str()
    }
}

impl DragSource for Status {
    fn drag_id(&self) -> &str {
        self.id().as_str()
    }
}

/// A location the pointer layer reports under the cursor at drop time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropCandidate(String);

impl DropCandidate {
    /// Wraps a reported drop-location identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// How a drop location was recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMatch {
    /// The location is a status column.
    Status,
    /// The location carries a prefix-encoded status identifier.
    EncodedStatus,
    /// The location is a task; the drop joins that task's column.
    Task(TaskId),
}

/// Resolved drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    status_id: StatusId,
    matched: TargetMatch,
}

impl DropTarget {
    /// Returns the target status.
    #[must_use]
    pub const fn status_id(&self) -> &StatusId {
        &self.status_id
    }

    /// Returns how the location was recognised.
    #[must_use]
    pub const fn matched(&self) -> &TargetMatch {
        &self.matched
    }
}

/// Board state a drop is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct DropContext<'a> {
    tasks: &'a [Task],
    statuses: &'a [Status],
    status_prefix: &'a str,
}

impl<'a> DropContext<'a> {
    /// Creates a context over the current tasks and statuses.
    ///
    /// `status_prefix` is the encoding used for column drop zones, e.g.
    /// `"status-"`.
    #[must_use]
    pub const fn new(tasks: &'a [Task], statuses: &'a [Status], status_prefix: &'a str) -> Self {
        Self {
            tasks,
            statuses,
            status_prefix,
        }
    }

    /// Returns the task with `id`.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&'a Task> {
        self.tasks.iter().find(|task| task.id().as_str() == id)
    }

    /// Returns the status with `id`.
    #[must_use]
    pub fn status(&self, id: &str) -> Option<&'a Status> {
        self.statuses.iter().find(|status| status.id().as_str() == id)
    }

    /// Returns the status identifier encoded in `id`, if it carries the
    /// status prefix.
    #[must_use]
    pub fn decode_status(&self, id: &str) -> Option<StatusId> {
        if self.status_prefix.is_empty() {
            return None;
        }
        id.strip_prefix(self.status_prefix)
            .and_then(|raw| StatusId::new(raw).ok())
    }
}

/// Resolves the first candidate that names a target status.
///
/// Per candidate, the precedence is: a status identifier, then a
/// prefix-encoded identifier of a registered status, then a task identifier
/// (yielding that task's current status). A prefixed id naming no known
/// status falls through to the task match and then to the next candidate.
/// Returns `None` when no candidate resolves.
#[must_use]
pub fn resolve_target(candidates: &[DropCandidate], context: &DropContext<'_>) -> Option<DropTarget> {
    candidates
        .iter()
        .find_map(|candidate| resolve_candidate(candidate.id(), context))
}

fn resolve_candidate(id: &str, context: &DropContext<'_>) -> Option<DropTarget> {
    if let Some(status) = context.status(id) {
        return Some(DropTarget {
            status_id: status.id().clone(),
            matched: TargetMatch::Status,
        });
    }
    if let Some(status) = context
        .decode_status(id)
        .and_then(|status_id| context.status(status_id.as_str()))
    {
        return Some(DropTarget {
            status_id: status.id().clone(),
            matched: TargetMatch::EncodedStatus,
        });
    }
    context.task(id).map(|task| DropTarget {
        status_id: task.status_id().clone(),
        matched: TargetMatch::Task(task.id().clone()),
    })
}
