//! In-memory roster for tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::domain::WorkspaceId;
use crate::workload::{
    domain::RosterMember,
    ports::{Roster, RosterError, RosterResult},
};

/// Thread-safe in-memory roster that keeps members in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    members: Arc<RwLock<Vec<(WorkspaceId, RosterMember)>>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member to `workspace_id`, replacing any member with the same
    /// identifier in place.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] when the roster lock is poisoned.
    pub fn insert(&self, workspace_id: &WorkspaceId, member: RosterMember) -> RosterResult<()> {
        let mut members = self
            .members
            .write()
            .map_err(|err| RosterError::persistence(std::io::Error::other(err.to_string())))?;
        match members
            .iter_mut()
            .find(|(_, existing)| existing.id() == member.id())
        {
            Some(slot) => *slot = (workspace_id.clone(), member),
            None => members.push((workspace_id.clone(), member)),
        }
        Ok(())
    }
}

#[async_trait]
impl Roster for InMemoryRoster {
    async fn list_members(&self, workspace_id: &WorkspaceId) -> RosterResult<Vec<RosterMember>> {
        let members = self
            .members
            .read()
            .map_err(|err| RosterError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(members
            .iter()
            .filter(|(workspace, _)| workspace == workspace_id)
            .map(|(_, member)| member.clone())
            .collect())
    }
}
