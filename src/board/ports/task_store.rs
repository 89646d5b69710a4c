//! Task store port: listing a workspace's tasks and writing field updates.

use crate::board::domain::{ProjectId, SpaceId, SprintId, Task, TaskId, TaskUpdate, WorkspaceId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Scope filters applied by the store when listing tasks.
///
/// The default scope covers the whole workspace and omits soft-deleted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskScope {
    project_id: Option<ProjectId>,
    space_id: Option<SpaceId>,
    sprint_id: Option<SprintId>,
    include_deleted: bool,
}

impl TaskScope {
    /// Creates a workspace-wide scope.
    #[must_use]
    pub fn workspace() -> Self {
        Self::default()
    }

    /// Restricts the scope to a project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts the scope to a space.
    #[must_use]
    pub fn with_space(mut self, space_id: SpaceId) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Restricts the scope to a sprint.
    #[must_use]
    pub fn with_sprint(mut self, sprint_id: SprintId) -> Self {
        self.sprint_id = Some(sprint_id);
        self
    }

    /// Includes soft-deleted tasks in listings.
    #[must_use]
    pub const fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    /// Returns the project restriction.
    #[must_use]
    pub const fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    /// Returns the space restriction.
    #[must_use]
    pub const fn space_id(&self) -> Option<&SpaceId> {
        self.space_id.as_ref()
    }

    /// Returns the sprint restriction.
    #[must_use]
    pub const fn sprint_id(&self) -> Option<&SprintId> {
        self.sprint_id.as_ref()
    }

    /// Returns whether soft-deleted tasks are listed.
    #[must_use]
    pub const fn include_deleted(&self) -> bool {
        self.include_deleted
    }

    /// Returns `true` when `task` falls inside this scope.
    #[must_use]
    pub fn contains(&self, task: &Task) -> bool {
        let within = |wanted: Option<&str>, actual: Option<&str>| {
            wanted.is_none_or(|id| actual == Some(id))
        };
        within(
            self.project_id.as_ref().map(ProjectId::as_str),
            task.project_id().map(ProjectId::as_str),
        ) && within(
            self.space_id.as_ref().map(SpaceId::as_str),
            task.space_id().map(SpaceId::as_str),
        ) && within(
            self.sprint_id.as_ref().map(SprintId::as_str),
            task.sprint_id().map(SprintId::as_str),
        ) && (self.include_deleted || !task.is_deleted())
    }
}

/// Task persistence contract.
///
/// Joined display fields (status name and type, assignee name) are resolved
/// by the implementation.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists the workspace's tasks within `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the listing fails.
    async fn list_tasks(
        &self,
        workspace_id: &WorkspaceId,
        scope: &TaskScope,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Writes every field present in `update` as one atomic change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
