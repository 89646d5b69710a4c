//! `PostgreSQL` status registry.

use super::{BoardPgPool, models::StatusRow, schema::statuses};
use crate::board::{
    domain::{ProjectId, SpaceId, Status, StatusId, StatusType, WorkspaceId},
    ports::{StatusRegistry, StatusRegistryError, StatusRegistryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed status registry.
#[derive(Debug, Clone)]
pub struct PostgresStatusRegistry {
    pool: BoardPgPool,
}

impl PostgresStatusRegistry {
    /// Creates a registry from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> StatusRegistryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StatusRegistryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StatusRegistryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StatusRegistryError::persistence)?
    }
}

#[async_trait]
impl StatusRegistry for PostgresStatusRegistry {
    async fn list_statuses(&self, workspace_id: &WorkspaceId) -> StatusRegistryResult<Vec<Status>> {
        let workspace = workspace_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = statuses::table
                .filter(statuses::workspace_id.eq(workspace))
                .order((statuses::position.asc(), statuses::id.asc()))
                .select(StatusRow::as_select())
                .load::<StatusRow>(connection)
                .map_err(StatusRegistryError::persistence)?;
            rows.into_iter().map(row_to_status).collect()
        })
        .await
    }

    async fn rename_status(&self, id: &StatusId, name: &str) -> StatusRegistryResult<()> {
        let status_id = id.clone();
        let new_name = name.to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::update(statuses::table.find(status_id.as_str()))
                .set(statuses::name.eq(new_name))
                .execute(connection)
                .map_err(StatusRegistryError::persistence)?;
            if updated == 0 {
                return Err(StatusRegistryError::NotFound(status_id));
            }
            Ok(())
        })
        .await
    }
}

pub(super) fn row_to_status(row: StatusRow) -> StatusRegistryResult<Status> {
    let StatusRow {
        id,
        workspace_id: _,
        name,
        status_type,
        position,
        project_id,
        space_id,
    } = row;

    let parsed_type =
        StatusType::try_from(status_type.as_str()).map_err(StatusRegistryError::persistence)?;
    let mut status = Status::new(
        StatusId::new(id).map_err(StatusRegistryError::persistence)?,
        name,
        parsed_type,
        position,
    )
    .map_err(StatusRegistryError::persistence)?;
    if let Some(project) = project_id.filter(|raw| !raw.trim().is_empty()) {
        let owner_project = ProjectId::new(project).map_err(StatusRegistryError::persistence)?;
        status = status.with_project(owner_project);
    }
    if let Some(space) = space_id.filter(|raw| !raw.trim().is_empty()) {
        let owner_space = SpaceId::new(space).map_err(StatusRegistryError::persistence)?;
        status = status.with_space(owner_space);
    }
    Ok(status)
}
