//! Roster port: the people whose workload is balanced.

use crate::board::domain::WorkspaceId;
use crate::workload::domain::RosterMember;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Team roster contract.
#[async_trait]
pub trait Roster: Send + Sync {
    /// Lists the workspace's roster members in roster order, with role and
    /// level names resolved where the referenced rows exist.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Persistence`] when the listing fails.
    async fn list_members(&self, workspace_id: &WorkspaceId) -> RosterResult<Vec<RosterMember>>;
}

/// Errors returned by roster implementations.
#[derive(Debug, Clone, Error)]
pub enum RosterError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RosterError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
