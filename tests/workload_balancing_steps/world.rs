//! Shared world state for workload balancing BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use sprintboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{StatusId, StatusType, TaskStatus, WorkspaceId},
};
use sprintboard::workload::{
    adapters::memory::InMemoryRoster,
    domain::{WorkloadPolicy, WorkloadRecord, WorkloadReport},
    services::WorkloadServiceError,
};

/// Scenario world for workload balancing behaviour tests.
pub struct WorkloadWorld {
    pub workspace_id: WorkspaceId,
    pub tasks: Arc<InMemoryTaskStore>,
    pub roster: Arc<InMemoryRoster>,
    pub policy: WorkloadPolicy,
    pub last_report: Option<Result<WorkloadReport, WorkloadServiceError>>,
}

impl WorkloadWorld {
    /// Creates a world with an empty roster and the default policy.
    ///
    /// # Panics
    ///
    /// Panics if the fixed workspace identifier is rejected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workspace_id: WorkspaceId::new("ws-bdd").expect("valid workspace id"),
            tasks: Arc::new(InMemoryTaskStore::new()),
            roster: Arc::new(InMemoryRoster::new()),
            policy: WorkloadPolicy::default(),
            last_report: None,
        }
    }

    /// Returns the status every scenario task is filed under.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed status identifier is rejected.
    pub fn open_status() -> Result<TaskStatus, eyre::Report> {
        Ok(TaskStatus::resolved(
            StatusId::new("s-open")?,
            "Open",
            StatusType::Active,
        ))
    }

    /// Returns the last built report.
    ///
    /// # Errors
    ///
    /// Returns an error if no report was built or building it failed.
    pub fn report(&self) -> Result<&WorkloadReport, eyre::Report> {
        match self.last_report.as_ref() {
            Some(Ok(report)) => Ok(report),
            Some(Err(err)) => Err(eyre::eyre!("workload report failed: {err}")),
            None => Err(eyre::eyre!("no workload report was built")),
        }
    }

    /// Returns the record of the member with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no report was built or the member is absent.
    pub fn record(&self, id: &str) -> Result<&WorkloadRecord, eyre::Report> {
        self.report()?
            .records()
            .iter()
            .find(|record| record.member_id.as_str() == id)
            .ok_or_else(|| eyre::eyre!("member {id} missing from the report"))
    }
}

impl Default for WorkloadWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WorkloadWorld {
    WorkloadWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
