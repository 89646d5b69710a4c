//! Task aggregate and the value types it carries.

use super::{
    Assignment, BoardDomainError, Priority, ProjectId, SpaceId, SprintId, Status, StatusId,
    StatusType, TaskId, TaskUpdate, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status reference carried by a task, with the joined display fields.
///
/// The name and type are resolved by the task store; either may be missing
/// when the status was deleted concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    id: StatusId,
    name: Option<String>,
    status_type: Option<StatusType>,
}

impl TaskStatus {
    /// Creates a status reference without resolved display fields.
    #[must_use]
    pub const fn unresolved(id: StatusId) -> Self {
        Self {
            id,
            name: None,
            status_type: None,
        }
    }

    /// Creates a status reference with resolved display fields.
    #[must_use]
    pub fn resolved(id: StatusId, name: impl Into<String>, status_type: StatusType) -> Self {
        Self {
            id,
            name: Some(name.into()),
            status_type: Some(status_type),
        }
    }

    /// Returns the referenced status identifier.
    #[must_use]
    pub const fn id(&self) -> &StatusId {
        &self.id
    }

    /// Returns the resolved status name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the resolved status type.
    #[must_use]
    pub const fn status_type(&self) -> Option<StatusType> {
        self.status_type
    }
}

/// Start and due dates of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSchedule {
    start: Option<NaiveDate>,
    due: Option<NaiveDate>,
}

impl TaskSchedule {
    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidDateRange`] when both dates are set
    /// and the start falls after the due date.
    pub fn new(start: Option<NaiveDate>, due: Option<NaiveDate>) -> Result<Self, BoardDomainError> {
        if let (Some(start_date), Some(due_date)) = (start, due) {
            if start_date > due_date {
                return Err(BoardDomainError::InvalidDateRange {
                    start: start_date,
                    due: due_date,
                });
            }
        }
        Ok(Self { start, due })
    }

    /// Reconstructs a schedule from storage without range validation.
    ///
    /// Rows written before dates were validated may hold inverted ranges.
    #[must_use]
    pub const fn from_persisted(start: Option<NaiveDate>, due: Option<NaiveDate>) -> Self {
        Self { start, due }
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due(&self) -> Option<NaiveDate> {
        self.due
    }
}

/// Effort estimate used by workload aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskEstimate {
    /// Estimated effort in hours.
    pub hours: Option<f64>,
    /// Story-point estimate, used when no hour estimate exists.
    pub story_points: Option<u32>,
}

impl TaskEstimate {
    /// Returns the effort in hours, converting story points at the given rate.
    ///
    /// An hour estimate wins over story points; a task with neither counts as
    /// zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "effort hours are fractional by nature"
    )]
    pub fn effort_hours(&self, hours_per_story_point: f64) -> f64 {
        match (self.hours, self.story_points) {
            (Some(hours), _) => hours,
            (None, Some(points)) => f64::from(points) * hours_per_story_point,
            (None, None) => 0.0,
        }
    }
}

/// Parameter object for building a [`Task`].
///
/// Task stores fill this from their rows; tests build it with the `with_*`
/// helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Rich-text description.
    pub description: Option<String>,
    /// Current status reference.
    pub status: TaskStatus,
    /// Priority, if set.
    pub priority: Option<Priority>,
    /// Assignment.
    pub assignment: Assignment,
    /// Resolved display name of the assignee.
    pub assignee_name: Option<String>,
    /// Owning project, derived from the status.
    pub project_id: Option<ProjectId>,
    /// Owning space, derived from the status.
    pub space_id: Option<SpaceId>,
    /// Sprint the task is planned into.
    pub sprint_id: Option<SprintId>,
    /// Start and due dates.
    pub schedule: TaskSchedule,
    /// Parent task; set for subtasks.
    pub parent_id: Option<TaskId>,
    /// Effort estimate.
    pub estimate: TaskEstimate,
    /// Author of the task.
    pub created_by: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TaskData {
    /// Creates task data with the required fields and everything else unset.
    #[must_use]
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        status: TaskStatus,
        created_by: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            status,
            priority: None,
            assignment: Assignment::Unassigned,
            assignee_name: None,
            project_id: None,
            space_id: None,
            sprint_id: None,
            schedule: TaskSchedule::default(),
            parent_id: None,
            estimate: TaskEstimate::default(),
            created_by,
            created_at,
            deleted_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the assignment.
    #[must_use]
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignment = assignment;
        self
    }

    /// Sets the resolved assignee display name.
    #[must_use]
    pub fn with_assignee_name(mut self, name: impl Into<String>) -> Self {
        self.assignee_name = Some(name.into());
        self
    }

    /// Sets the project reference.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the space reference.
    #[must_use]
    pub fn with_space(mut self, space_id: SpaceId) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Sets the sprint reference.
    #[must_use]
    pub fn with_sprint(mut self, sprint_id: SprintId) -> Self {
        self.sprint_id = Some(sprint_id);
        self
    }

    /// Sets the schedule.
    #[must_use]
    pub const fn with_schedule(mut self, schedule: TaskSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Marks the task as a subtask of `parent_id`.
    #[must_use]
    pub fn with_parent(mut self, parent_id: TaskId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the effort estimate in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimate.hours = Some(hours);
        self
    }

    /// Sets the story-point estimate.
    #[must_use]
    pub const fn with_story_points(mut self, points: u32) -> Self {
        self.estimate.story_points = Some(points);
        self
    }

    /// Marks the task soft-deleted at `deleted_at`.
    #[must_use]
    pub const fn with_deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: Option<String>,
    status: TaskStatus,
    priority: Option<Priority>,
    assignment: Assignment,
    assignee_name: Option<String>,
    project_id: Option<ProjectId>,
    space_id: Option<SpaceId>,
    sprint_id: Option<SprintId>,
    schedule: TaskSchedule,
    parent_id: Option<TaskId>,
    estimate: TaskEstimate,
    created_by: UserId,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Builds a task from its data.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when the name is blank.
    pub fn from_data(data: TaskData) -> Result<Self, BoardDomainError> {
        let TaskData {
            id,
            name,
            description,
            status,
            priority,
            assignment,
            assignee_name,
            project_id,
            space_id,
            sprint_id,
            schedule,
            parent_id,
            estimate,
            created_by,
            created_at,
            deleted_at,
        } = data;

        Ok(Self {
            id,
            name: validated_task_name(name)?,
            description,
            status,
            priority,
            assignment,
            assignee_name,
            project_id,
            space_id,
            sprint_id,
            schedule,
            parent_id,
            estimate,
            created_by,
            created_at,
            deleted_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rich-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status reference.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the current status identifier.
    #[must_use]
    pub const fn status_id(&self) -> &StatusId {
        self.status.id()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assignment.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns the resolved assignee display name.
    #[must_use]
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee_name.as_deref()
    }

    /// Returns the project reference.
    #[must_use]
    pub const fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    /// Returns the space reference.
    #[must_use]
    pub const fn space_id(&self) -> Option<&SpaceId> {
        self.space_id.as_ref()
    }

    /// Returns the sprint reference.
    #[must_use]
    pub const fn sprint_id(&self) -> Option<&SprintId> {
        self.sprint_id.as_ref()
    }

    /// Returns the schedule.
    #[must_use]
    pub const fn schedule(&self) -> TaskSchedule {
        self.schedule
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.schedule.due
    }

    /// Returns the parent task, if this is a subtask.
    #[must_use]
    pub const fn parent_id(&self) -> Option<&TaskId> {
        self.parent_id.as_ref()
    }

    /// Returns `true` when the task has a parent.
    #[must_use]
    pub const fn is_subtask(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Returns the effort estimate.
    #[must_use]
    pub const fn estimate(&self) -> TaskEstimate {
        self.estimate
    }

    /// Returns the author.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the soft-delete timestamp.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns `true` when the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Applies a field update in place.
    ///
    /// Status placements overwrite the project and space together. A new
    /// assignment drops the resolved assignee name until the store resolves
    /// it again.
    pub fn apply(&mut self, update: &TaskUpdate) {
        if let Some(name) = update.name() {
            name.clone_into(&mut self.name);
        }
        if let Some(placement) = update.placement() {
            self.status = placement.task_status();
            self.project_id = placement.project_id().cloned();
            self.space_id = placement.space_id().cloned();
        }
        if let Some(assignment) = update.assignment() {
            if assignment != &self.assignment {
                self.assignee_name = None;
            }
            self.assignment = assignment.clone();
        }
        if let Some(priority) = update.priority() {
            self.priority = priority;
        }
        if let Some(schedule) = update.schedule() {
            self.schedule = schedule;
        }
        if let Some(deleted_at) = update.deleted_at() {
            self.deleted_at = Some(deleted_at);
        }
    }

    /// Re-resolves the joined status fields against `status`.
    ///
    /// `None`, or a status with a different id, leaves the reference
    /// unresolved, as a dangling join would.
    pub fn resolve_status(&mut self, status: Option<&Status>) {
        self.status = match status {
            Some(found) if found.id() == self.status.id() => {
                TaskStatus::resolved(found.id().clone(), found.name(), found.status_type())
            }
            _ => TaskStatus::unresolved(self.status.id().clone()),
        };
    }

    /// Replaces the joined assignee display name.
    pub fn resolve_assignee_name(&mut self, name: Option<String>) {
        self.assignee_name = name;
    }
}

/// Validates and trims a task name.
///
/// # Errors
///
/// Returns [`BoardDomainError::EmptyTaskName`] when `name` is blank.
pub fn validated_task_name(name: impl Into<String>) -> Result<String, BoardDomainError> {
    let raw = name.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTaskName);
    }
    Ok(trimmed.to_owned())
}
