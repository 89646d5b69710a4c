//! Workload report service: loads the roster and tasks, then aggregates.

use super::aggregate;
use crate::board::{
    domain::WorkspaceId,
    ports::{TaskScope, TaskStore, TaskStoreError},
};
use crate::workload::{
    domain::{WorkloadDomainError, WorkloadPolicy, WorkloadReport},
    ports::{Roster, RosterError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workload reporting.
#[derive(Debug, Error)]
pub enum WorkloadServiceError {
    /// The policy was rejected.
    #[error(transparent)]
    Domain(#[from] WorkloadDomainError),
    /// Loading tasks failed.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),
    /// Loading the roster failed.
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Result type for workload service operations.
pub type WorkloadServiceResult<T> = Result<T, WorkloadServiceError>;

/// Builds workload reports from the raw task collection.
///
/// Reports ignore any board filter; every non-deleted task in `scope`
/// counts.
#[derive(Clone)]
pub struct WorkloadService<T, R>
where
    T: TaskStore,
    R: Roster,
{
    tasks: Arc<T>,
    roster: Arc<R>,
    policy: WorkloadPolicy,
}

impl<T, R> WorkloadService<T, R>
where
    T: TaskStore,
    R: Roster,
{
    /// Creates a service with a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadServiceError::Domain`] when `policy` is invalid.
    pub fn new(
        tasks: Arc<T>,
        roster: Arc<R>,
        policy: WorkloadPolicy,
    ) -> WorkloadServiceResult<Self> {
        policy.validate()?;
        Ok(Self {
            tasks,
            roster,
            policy,
        })
    }

    /// Returns the policy in force.
    #[must_use]
    pub const fn policy(&self) -> &WorkloadPolicy {
        &self.policy
    }

    /// Loads the roster and tasks for `workspace_id` and aggregates them.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadServiceError`] when either port fails.
    pub async fn report(
        &self,
        workspace_id: &WorkspaceId,
        scope: &TaskScope,
    ) -> WorkloadServiceResult<WorkloadReport> {
        let members = self.roster.list_members(workspace_id).await?;
        let tasks = self.tasks.list_tasks(workspace_id, scope).await?;
        Ok(aggregate(&tasks, &members, &self.policy))
    }
}
