//! Field updates written through the task store.

use super::{
    Assignment, BoardDomainError, Priority, ProjectId, SpaceId, Status, StatusId, StatusType,
    TaskSchedule, TaskStatus, validated_task_name,
};
use chrono::{DateTime, Utc};

/// Status reference together with the project and space it cascades.
///
/// Only constructible from a [`Status`], so the three fields always change
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPlacement {
    status_id: StatusId,
    status_name: String,
    status_type: StatusType,
    project_id: Option<ProjectId>,
    space_id: Option<SpaceId>,
}

impl StatusPlacement {
    /// Derives the placement of a task filed under `status`.
    #[must_use]
    pub fn for_status(status: &Status) -> Self {
        Self {
            status_id: status.id().clone(),
            status_name: status.name().to_owned(),
            status_type: status.status_type(),
            project_id: status.project_id().cloned(),
            space_id: status.space_id().cloned(),
        }
    }

    /// Returns the target status identifier.
    #[must_use]
    pub const fn status_id(&self) -> &StatusId {
        &self.status_id
    }

    /// Returns the project the task moves into.
    #[must_use]
    pub const fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    /// Returns the space the task moves into.
    #[must_use]
    pub const fn space_id(&self) -> Option<&SpaceId> {
        self.space_id.as_ref()
    }

    /// Returns the resolved status reference a task carries after the move.
    #[must_use]
    pub fn task_status(&self) -> TaskStatus {
        TaskStatus::resolved(
            self.status_id.clone(),
            self.status_name.clone(),
            self.status_type,
        )
    }
}

/// A set of task field changes persisted as one write.
///
/// Each constructor produces a single-concern update; the store applies all
/// present fields atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    name: Option<String>,
    placement: Option<StatusPlacement>,
    assignment: Option<Assignment>,
    priority: Option<Option<Priority>>,
    schedule: Option<TaskSchedule>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    const fn empty() -> Self {
        Self {
            name: None,
            placement: None,
            assignment: None,
            priority: None,
            schedule: None,
            deleted_at: None,
        }
    }

    /// Renames a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when `name` is blank.
    pub fn rename(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            name: Some(validated_task_name(name)?),
            ..Self::empty()
        })
    }

    /// Files a task under `status`, cascading its project and space.
    #[must_use]
    pub fn move_to(status: &Status) -> Self {
        Self {
            placement: Some(StatusPlacement::for_status(status)),
            ..Self::empty()
        }
    }

    /// Replaces the assignment.
    #[must_use]
    pub fn assign(assignment: Assignment) -> Self {
        Self {
            assignment: Some(assignment),
            ..Self::empty()
        }
    }

    /// Sets or clears the priority.
    #[must_use]
    pub fn set_priority(priority: Option<Priority>) -> Self {
        Self {
            priority: Some(priority),
            ..Self::empty()
        }
    }

    /// Replaces the start and due dates.
    #[must_use]
    pub fn reschedule(schedule: TaskSchedule) -> Self {
        Self {
            schedule: Some(schedule),
            ..Self::empty()
        }
    }

    /// Soft-deletes a task at `deleted_at`.
    #[must_use]
    pub fn soft_delete(deleted_at: DateTime<Utc>) -> Self {
        Self {
            deleted_at: Some(deleted_at),
            ..Self::empty()
        }
    }

    /// Returns the new name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the new status placement.
    #[must_use]
    pub const fn placement(&self) -> Option<&StatusPlacement> {
        self.placement.as_ref()
    }

    /// Returns the new assignment.
    #[must_use]
    pub const fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Returns the new priority; `Some(None)` clears it.
    #[must_use]
    pub const fn priority(&self) -> Option<Option<Priority>> {
        self.priority
    }

    /// Returns the new schedule.
    #[must_use]
    pub const fn schedule(&self) -> Option<TaskSchedule> {
        self.schedule
    }

    /// Returns the soft-delete timestamp.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
