//! In-memory status registry for tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Status, StatusId, WorkspaceId},
    ports::{StatusRegistry, StatusRegistryError, StatusRegistryResult},
};

/// Thread-safe in-memory status registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusRegistry {
    state: Arc<RwLock<Vec<(WorkspaceId, Status)>>>,
}

impl InMemoryStatusRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a status in `workspace_id`, replacing one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryError::Persistence`] when the registry lock is
    /// poisoned.
    pub fn insert(&self, workspace_id: &WorkspaceId, status: Status) -> StatusRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            StatusRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.retain(|(_, existing)| existing.id() != status.id());
        state.push((workspace_id.clone(), status));
        Ok(())
    }

    /// Returns a registered status by id.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryError::Persistence`] when the registry lock is
    /// poisoned.
    pub fn get(&self, id: &StatusId) -> StatusRegistryResult<Option<Status>> {
        let state = self.state.read().map_err(|err| {
            StatusRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .find(|(_, status)| status.id() == id)
            .map(|(_, status)| status.clone()))
    }
}

#[async_trait]
impl StatusRegistry for InMemoryStatusRegistry {
    async fn list_statuses(&self, workspace_id: &WorkspaceId) -> StatusRegistryResult<Vec<Status>> {
        let state = self.state.read().map_err(|err| {
            StatusRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut statuses: Vec<Status> = state
            .iter()
            .filter(|(owner, _)| owner == workspace_id)
            .map(|(_, status)| status.clone())
            .collect();
        statuses.sort_by_key(Status::position);
        Ok(statuses)
    }

    async fn rename_status(&self, id: &StatusId, name: &str) -> StatusRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            StatusRegistryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let (_, status) = state
            .iter_mut()
            .find(|(_, status)| status.id() == id)
            .ok_or_else(|| StatusRegistryError::NotFound(id.clone()))?;
        status
            .rename(name)
            .map_err(StatusRegistryError::persistence)?;
        Ok(())
    }
}
