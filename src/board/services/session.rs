//! Board session: the loaded board state and the operations the UI calls.

use super::transition::{TransitionExecutor, TransitionOutcome};
use crate::board::{
    domain::{
        Assignment, BoardDomainError, Priority, Status, StatusId, Task, TaskId, TaskSchedule,
        TaskUpdate, WorkspaceId, validated_status_name,
    },
    drag::{
        DragCoordinator, DragError, DragState, DragSubject, DropCandidate, DropContext,
        DropOutcome,
    },
    ports::{StatusRegistry, StatusRegistryError, TaskScope, TaskStore, TaskStoreError},
    query::{
        BoardColumns, SortSpec, StatusTypeGroups, TaskFilter, TaskListView, build_list,
        filter_and_sort, group_by_status, group_by_status_type,
    },
    view::BoardViewState,
};
use crate::config::BoardConfig;
use crate::workload::{
    domain::{RosterMember, WorkloadReport},
    services::aggregate,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Whether the loaded board reflects the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    /// The last reload succeeded and nothing has been written since.
    #[default]
    Clean,
    /// A write was issued; the loaded board may be stale.
    Dirty,
    /// A reload is in flight.
    Reconciling,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The task store failed.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),
    /// The status registry failed.
    #[error(transparent)]
    StatusRegistry(#[from] StatusRegistryError),
    /// A gesture call arrived in the wrong phase.
    #[error(transparent)]
    Drag(#[from] DragError),
    /// The task is not on the loaded board.
    #[error("task not on board: {0}")]
    UnknownTask(TaskId),
    /// The status is not on the loaded board.
    #[error("status not on board: {0}")]
    UnknownStatus(StatusId),
}

/// Result type for board session operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// One user's view of a workspace board.
///
/// Every successful write is followed by a full reload; the session never
/// patches its local collections optimistically.
pub struct BoardSession<T, S, C>
where
    T: TaskStore,
    S: StatusRegistry,
    C: Clock + Send + Sync,
{
    workspace_id: WorkspaceId,
    scope: TaskScope,
    task_store: Arc<T>,
    status_registry: Arc<S>,
    clock: Arc<C>,
    config: BoardConfig,
    executor: TransitionExecutor<T>,
    tasks: Vec<Task>,
    statuses: Vec<Status>,
    sync: SyncState,
    drag: DragCoordinator,
    view: BoardViewState,
}

impl<T, S, C> BoardSession<T, S, C>
where
    T: TaskStore,
    S: StatusRegistry,
    C: Clock + Send + Sync,
{
    /// Creates an empty session; call [`BoardSession::reload`] to load it.
    #[must_use]
    pub fn new(
        workspace_id: WorkspaceId,
        scope: TaskScope,
        task_store: Arc<T>,
        status_registry: Arc<S>,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> Self {
        let executor = TransitionExecutor::new(Arc::clone(&task_store));
        Self {
            workspace_id,
            scope,
            task_store,
            status_registry,
            clock,
            config,
            executor,
            tasks: Vec::new(),
            statuses: Vec::new(),
            sync: SyncState::Dirty,
            drag: DragCoordinator::new(),
            view: BoardViewState::default(),
        }
    }

    /// Returns the workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    /// Returns the configuration in force.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the loaded tasks, unfiltered and in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the loaded statuses in registry order.
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Returns the loaded task with `id`.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the loaded status with `id`.
    #[must_use]
    pub fn status(&self, id: &StatusId) -> Option<&Status> {
        self.statuses.iter().find(|status| status.id() == id)
    }

    /// Returns the sync state.
    #[must_use]
    pub const fn sync_state(&self) -> SyncState {
        self.sync
    }

    /// Returns the UI set state.
    #[must_use]
    pub const fn view(&self) -> &BoardViewState {
        &self.view
    }

    /// Replaces the UI set state with `update(current)`.
    pub fn update_view(&mut self, update: impl FnOnce(&BoardViewState) -> BoardViewState) {
        self.view = update(&self.view);
    }

    /// Reloads statuses and tasks from the stores.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when either port fails. The previous
    /// data is kept, and the session is [`SyncState::Dirty`] unless it was
    /// clean before the attempt.
    pub async fn reload(&mut self) -> BoardServiceResult<()> {
        let previous = self.sync;
        self.sync = SyncState::Reconciling;
        match self.fetch().await {
            Ok((statuses, tasks)) => {
                tracing::debug!(
                    workspace_id = %self.workspace_id,
                    statuses = statuses.len(),
                    tasks = tasks.len(),
                    "board reloaded"
                );
                self.statuses = statuses;
                self.tasks = tasks;
                self.view = self.view.retain_tasks(self.tasks.iter().map(Task::id));
                self.sync = SyncState::Clean;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    workspace_id = %self.workspace_id,
                    error = %err,
                    "board reload failed"
                );
                self.sync = match previous {
                    SyncState::Clean => SyncState::Clean,
                    SyncState::Dirty | SyncState::Reconciling => SyncState::Dirty,
                };
                Err(err)
            }
        }
    }

    async fn fetch(&self) -> BoardServiceResult<(Vec<Status>, Vec<Task>)> {
        let statuses = self.status_registry.list_statuses(&self.workspace_id).await?;
        let tasks = self
            .task_store
            .list_tasks(&self.workspace_id, &self.scope)
            .await?;
        Ok((statuses, tasks))
    }

    /// Returns the filtered and sorted task sequence.
    #[must_use]
    pub fn filtered(&self, filter: &TaskFilter, sort: SortSpec) -> Vec<Task> {
        filter_and_sort(&self.tasks, filter, sort)
    }

    /// Returns board columns keyed by status.
    #[must_use]
    pub fn board(&self, filter: &TaskFilter, sort: SortSpec) -> BoardColumns {
        group_by_status(&self.filtered(filter, sort), &self.statuses)
    }

    /// Returns the list view with subtasks indexed under their parents.
    #[must_use]
    pub fn list(&self, filter: &TaskFilter, sort: SortSpec) -> TaskListView {
        build_list(&self.filtered(filter, sort))
    }

    /// Returns top-level tasks grouped by status type.
    #[must_use]
    pub fn list_by_status_type(&self, filter: &TaskFilter, sort: SortSpec) -> StatusTypeGroups {
        group_by_status_type(&self.filtered(filter, sort))
    }

    /// Aggregates workload over the unfiltered task collection.
    #[must_use]
    pub fn workload(&self, roster: &[RosterMember]) -> WorkloadReport {
        aggregate(&self.tasks, roster, &self.config.workload)
    }

    /// Returns the drag gesture phase.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Starts dragging the task or column identified by `dragged_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Drag`] when a gesture is active or the
    /// identifier is unknown.
    pub fn begin_drag(&mut self, dragged_id: &str) -> BoardServiceResult<DragSubject> {
        let context = DropContext::new(
            &self.tasks,
            &self.statuses,
            &self.config.drop_target_prefix,
        );
        Ok(self.drag.start(dragged_id, &context)?)
    }

    /// Abandons the active gesture without I/O.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel()
    }

    /// Drops the dragged subject over `candidates`.
    ///
    /// A transition is written, the board reloaded, and only then is the
    /// gesture settled, so the task never renders in its new column before
    /// the store has acknowledged the move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Drag`] when nothing is being dragged, or
    /// the store error when the write or reload fails. The gesture is
    /// settled either way.
    pub async fn drop_dragged(
        &mut self,
        candidates: &[DropCandidate],
    ) -> BoardServiceResult<DropOutcome> {
        let context = DropContext::new(
            &self.tasks,
            &self.statuses,
            &self.config.drop_target_prefix,
        );
        let outcome = self.drag.drop_on(candidates, &context)?;
        let DropOutcome::Transition(intent) = &outcome else {
            return Ok(outcome);
        };

        let committed = self.commit_transition(intent.task_id(), intent.to()).await;
        self.drag.settle();
        committed.map(|()| outcome)
    }

    async fn commit_transition(
        &mut self,
        task_id: &TaskId,
        status_id: &StatusId,
    ) -> BoardServiceResult<()> {
        let task = self
            .task(task_id)
            .cloned()
            .ok_or_else(|| BoardServiceError::UnknownTask(task_id.clone()))?;
        let target = self
            .status(status_id)
            .cloned()
            .ok_or_else(|| BoardServiceError::UnknownStatus(status_id.clone()))?;

        let previous = self.sync;
        self.sync = SyncState::Dirty;
        match self.executor.execute(&task, &target).await? {
            TransitionOutcome::Unchanged => {
                self.sync = previous;
                Ok(())
            }
            TransitionOutcome::Applied(_) => self.reload().await,
        }
    }

    /// Renames a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank name, or the store
    /// error.
    pub async fn rename_task(&mut self, id: &TaskId, name: &str) -> BoardServiceResult<()> {
        let update = TaskUpdate::rename(name)?;
        self.write(id, &update).await
    }

    /// Assigns a task to a user, a roster member, or nobody.
    ///
    /// # Errors
    ///
    /// Returns the store error.
    pub async fn assign_task(
        &mut self,
        id: &TaskId,
        assignment: Assignment,
    ) -> BoardServiceResult<()> {
        self.write(id, &TaskUpdate::assign(assignment)).await
    }

    /// Sets or clears a task's priority.
    ///
    /// # Errors
    ///
    /// Returns the store error.
    pub async fn set_priority(
        &mut self,
        id: &TaskId,
        priority: Option<Priority>,
    ) -> BoardServiceResult<()> {
        self.write(id, &TaskUpdate::set_priority(priority)).await
    }

    /// Sets a task's start and due dates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when `start` is after `due`, or
    /// the store error.
    pub async fn set_dates(
        &mut self,
        id: &TaskId,
        start: Option<NaiveDate>,
        due: Option<NaiveDate>,
    ) -> BoardServiceResult<()> {
        let schedule = TaskSchedule::new(start, due)?;
        self.write(id, &TaskUpdate::reschedule(schedule)).await
    }

    /// Soft-deletes a task, stamping the deletion with the session clock.
    ///
    /// # Errors
    ///
    /// Returns the store error.
    pub async fn delete_task(&mut self, id: &TaskId) -> BoardServiceResult<()> {
        let deleted_at = self.clock.utc();
        self.write(id, &TaskUpdate::soft_delete(deleted_at)).await
    }

    /// Renames a status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank name, or the
    /// registry error.
    pub async fn rename_status(&mut self, id: &StatusId, name: &str) -> BoardServiceResult<()> {
        let validated = validated_status_name(name)?;
        self.sync = SyncState::Dirty;
        if let Err(err) = self.status_registry.rename_status(id, &validated).await {
            tracing::warn!(status_id = %id, error = %err, "status rename failed");
            return Err(err.into());
        }
        self.reload().await
    }

    async fn write(&mut self, id: &TaskId, update: &TaskUpdate) -> BoardServiceResult<()> {
        self.sync = SyncState::Dirty;
        if let Err(err) = self.task_store.update_task(id, update).await {
            tracing::warn!(task_id = %id, error = %err, "task update failed");
            return Err(err.into());
        }
        self.reload().await
    }
}
