//! Shared world state for board drag BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use sprintboard::board::{
    adapters::memory::{InMemoryStatusRegistry, InMemoryTaskStore},
    domain::{Status, Task, TaskData, WorkspaceId},
    drag::DropOutcome,
    ports::TaskScope,
    services::{BoardServiceError, BoardSession},
};
use sprintboard::config::BoardConfig;

/// Session type used by the BDD world.
pub type TestSession = BoardSession<InMemoryTaskStore, InMemoryStatusRegistry, DefaultClock>;

/// Scenario world for board drag behaviour tests.
///
/// Given steps describe statuses and tasks; the board session opens on the
/// first drag so every seeded row is loaded.
pub struct BoardDragWorld {
    pub workspace_id: WorkspaceId,
    pub pending_statuses: Vec<Status>,
    pub pending_tasks: Vec<TaskData>,
    pub store: Arc<InMemoryTaskStore>,
    pub registry: Arc<InMemoryStatusRegistry>,
    pub session: Option<TestSession>,
    pub last_drop: Option<Result<DropOutcome, BoardServiceError>>,
}

impl BoardDragWorld {
    /// Creates a world with an empty board.
    ///
    /// # Panics
    ///
    /// Panics if the fixed workspace identifier is rejected.
    #[must_use]
    pub fn new() -> Self {
        let registry = Arc::new(InMemoryStatusRegistry::new());
        Self {
            workspace_id: WorkspaceId::new("ws-bdd").expect("valid workspace id"),
            pending_statuses: Vec::new(),
            pending_tasks: Vec::new(),
            store: Arc::new(InMemoryTaskStore::with_status_registry(&registry)),
            registry,
            session: None,
            last_drop: None,
        }
    }

    /// Returns the open session, seeding the stores on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding or the initial reload fails.
    pub fn session(&mut self) -> Result<&mut TestSession, eyre::Report> {
        if self.session.is_none() {
            for status in self.pending_statuses.drain(..) {
                self.registry
                    .insert(&self.workspace_id, status)
                    .wrap_err("seed status")?;
            }
            for data in self.pending_tasks.drain(..) {
                let task = Task::from_data(data).wrap_err("build seeded task")?;
                self.store
                    .insert(&self.workspace_id, task)
                    .wrap_err("seed task")?;
            }
            let mut session = BoardSession::new(
                self.workspace_id.clone(),
                TaskScope::workspace(),
                Arc::clone(&self.store),
                Arc::clone(&self.registry),
                Arc::new(DefaultClock),
                BoardConfig::default(),
            );
            run_async(session.reload()).wrap_err("initial board reload")?;
            self.session = Some(session);
        }
        self.session
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board session was not opened"))
    }
}

impl Default for BoardDragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardDragWorld {
    BoardDragWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
