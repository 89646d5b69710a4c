//! Status registry port: the ordered workflow columns of a workspace.

use crate::board::domain::{Status, StatusId, WorkspaceId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status registry operations.
pub type StatusRegistryResult<T> = Result<T, StatusRegistryError>;

/// Status registry contract.
#[async_trait]
pub trait StatusRegistry: Send + Sync {
    /// Lists the workspace's statuses ordered by position.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryError::Persistence`] when the listing fails.
    async fn list_statuses(&self, workspace_id: &WorkspaceId) -> StatusRegistryResult<Vec<Status>>;

    /// Renames a status.
    ///
    /// # Errors
    ///
    /// Returns [`StatusRegistryError::NotFound`] when the status does not
    /// exist.
    async fn rename_status(&self, id: &StatusId, name: &str) -> StatusRegistryResult<()>;
}

/// Errors returned by status registry implementations.
#[derive(Debug, Clone, Error)]
pub enum StatusRegistryError {
    /// The status was not found.
    #[error("status not found: {0}")]
    NotFound(StatusId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StatusRegistryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
