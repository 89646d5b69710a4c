//! Status transitions with project and space cascade.

use crate::board::{
    domain::{Status, Task, TaskUpdate},
    ports::{TaskStore, TaskStoreResult},
};
use std::sync::Arc;

/// Result of executing a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The task already occupies the target status; nothing was written.
    Unchanged,
    /// The update was persisted and the board must be reloaded.
    Applied(TaskUpdate),
}

impl TransitionOutcome {
    /// Returns `true` when a write happened.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Moves tasks between statuses.
///
/// The task inherits the target status's project and space, including
/// clearing them when the status has none. Status, project and space are
/// written as one update.
#[derive(Clone)]
pub struct TransitionExecutor<T>
where
    T: TaskStore,
{
    store: Arc<T>,
}

impl<T> TransitionExecutor<T>
where
    T: TaskStore,
{
    /// Creates an executor writing through `store`.
    #[must_use]
    pub const fn new(store: Arc<T>) -> Self {
        Self { store }
    }

    /// Moves `task` into `target`.
    ///
    /// # Errors
    ///
    /// Returns the store error when the write fails. Nothing is rolled back
    /// since nothing was applied locally.
    pub async fn execute(
        &self,
        task: &Task,
        target: &Status,
    ) -> TaskStoreResult<TransitionOutcome> {
        if task.status_id() == target.id() {
            return Ok(TransitionOutcome::Unchanged);
        }

        let update = TaskUpdate::move_to(target);
        match self.store.update_task(task.id(), &update).await {
            Ok(()) => {
                tracing::info!(
                    task_id = %task.id(),
                    from = %task.status_id(),
                    to = %target.id(),
                    project_id = ?target.project_id().map(|id| id.as_str()),
                    space_id = ?target.space_id().map(|id| id.as_str()),
                    "task transitioned"
                );
                Ok(TransitionOutcome::Applied(update))
            }
            Err(err) => {
                tracing::warn!(
                    task_id = %task.id(),
                    to = %target.id(),
                    error = %err,
                    "task transition failed"
                );
                Err(err)
            }
        }
    }
}
