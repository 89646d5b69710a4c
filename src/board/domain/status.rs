//! Workflow statuses (board columns) and their lifecycle categories.

use super::{BoardDomainError, ParseStatusTypeError, ProjectId, SpaceId, StatusId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed lifecycle category attached to every custom status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    /// Work has not started.
    NotStarted,
    /// Work is under way.
    Active,
    /// Work is finished.
    Done,
    /// Work was closed without completion.
    Closed,
}

impl StatusType {
    /// Every status type in lifecycle order.
    pub const ALL: [Self; 4] = [Self::NotStarted, Self::Active, Self::Done, Self::Closed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Active => "active",
            Self::Done => "done",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StatusType {
    type Error = ParseStatusTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "active" => Ok(Self::Active),
            "done" => Ok(Self::Done),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStatusTypeError(value.to_owned())),
        }
    }
}

/// A named workflow column a task can occupy.
///
/// A status may be scoped to a project and/or space. Moving a task into a
/// status re-files the task under that scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    id: StatusId,
    name: String,
    status_type: StatusType,
    position: i32,
    project_id: Option<ProjectId>,
    space_id: Option<SpaceId>,
}

impl Status {
    /// Creates an unscoped status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStatusName`] when `name` is blank.
    pub fn new(
        id: StatusId,
        name: impl Into<String>,
        status_type: StatusType,
        position: i32,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            name: validated_status_name(name)?,
            status_type,
            position,
            project_id: None,
            space_id: None,
        })
    }

    /// Scopes the status to a project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Scopes the status to a space.
    #[must_use]
    pub fn with_space(mut self, space_id: SpaceId) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> &StatusId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lifecycle category.
    #[must_use]
    pub const fn status_type(&self) -> StatusType {
        self.status_type
    }

    /// Returns the ordering position within the workspace.
    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Returns the owning project, if scoped.
    #[must_use]
    pub const fn project_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }

    /// Returns the owning space, if scoped.
    #[must_use]
    pub const fn space_id(&self) -> Option<&SpaceId> {
        self.space_id.as_ref()
    }

    /// Renames the status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyStatusName`] when `name` is blank.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), BoardDomainError> {
        self.name = validated_status_name(name)?;
        Ok(())
    }
}

/// Validates and trims a status name.
///
/// # Errors
///
/// Returns [`BoardDomainError::EmptyStatusName`] when `name` is blank.
pub fn validated_status_name(name: impl Into<String>) -> Result<String, BoardDomainError> {
    let raw = name.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyStatusName);
    }
    Ok(trimmed.to_owned())
}
