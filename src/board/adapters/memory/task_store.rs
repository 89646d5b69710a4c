//! In-memory task store for tests and demos.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::InMemoryStatusRegistry;
use crate::board::{
    domain::{Assignment, Task, TaskId, TaskUpdate, WorkspaceId},
    ports::{TaskScope, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Listings return tasks in insertion order, which stands in for the hosted
/// store's creation ordering.
///
/// When linked to a status registry, listings re-resolve each task's status
/// name and type from it, and assignee names come from the store's name
/// index, mirroring the joins of the hosted store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
    statuses: Option<InMemoryStatusRegistry>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    assignee_names: BTreeMap<Assignment, String>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct StoredTask {
    workspace_id: WorkspaceId,
    sequence: u64,
    task: Task,
}

fn poisoned(err: impl ToString) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    ///
    /// Without a linked registry, listings return joined fields as inserted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose listings resolve statuses against
    /// `registry`.
    ///
    /// The registry handle shares state with the original, so later renames
    /// show up on the next listing.
    #[must_use]
    pub fn with_status_registry(registry: &InMemoryStatusRegistry) -> Self {
        Self {
            statuses: Some(registry.clone()),
            ..Self::default()
        }
    }

    /// Inserts or replaces a task in `workspace_id`.
    ///
    /// Replacing keeps the original listing position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn insert(&self, workspace_id: &WorkspaceId, task: Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let sequence = match state.tasks.get(task.id()) {
            Some(existing) => existing.sequence,
            None => {
                let next = state.next_sequence;
                state.next_sequence = next.saturating_add(1);
                next
            }
        };
        state.tasks.insert(
            task.id().clone(),
            StoredTask {
                workspace_id: workspace_id.clone(),
                sequence,
                task,
            },
        );
        Ok(())
    }

    /// Records the display name listings report for `assignment`.
    ///
    /// Named assignments override the name a task was inserted with.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn name_assignee(
        &self,
        assignment: Assignment,
        name: impl Into<String>,
    ) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.assignee_names.insert(assignment, name.into());
        Ok(())
    }

    /// Returns a stored task regardless of scope or soft-delete state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn get(&self, id: &TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(id).map(|stored| stored.task.clone()))
    }

    fn resolve_joins(
        &self,
        mut task: Task,
        assignee_names: &BTreeMap<Assignment, String>,
    ) -> TaskStoreResult<Task> {
        if let Some(registry) = &self.statuses {
            let status = registry
                .get(task.status_id())
                .map_err(TaskStoreError::persistence)?;
            task.resolve_status(status.as_ref());
        }
        if task.assignment().is_unassigned() {
            task.resolve_assignee_name(None);
        } else if let Some(name) = assignee_names.get(task.assignment()) {
            task.resolve_assignee_name(Some(name.clone()));
        }
        Ok(task)
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_tasks(
        &self,
        workspace_id: &WorkspaceId,
        scope: &TaskScope,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut matching: Vec<&StoredTask> = state
            .tasks
            .values()
            .filter(|stored| &stored.workspace_id == workspace_id)
            .filter(|stored| scope.contains(&stored.task))
            .collect();
        matching.sort_by_key(|stored| stored.sequence);
        matching
            .into_iter()
            .map(|stored| self.resolve_joins(stored.task.clone(), &state.assignee_names))
            .collect()
    }

    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        stored.task.apply(update);
        Ok(())
    }
}
