//! `PostgreSQL` roster.

use super::models::MemberRow;
use crate::board::{adapters::postgres::BoardPgPool, domain::MemberId, domain::WorkspaceId};
use crate::workload::{
    domain::{LevelId, MemberIdentity, RoleId, RosterMember, RosterRef},
    ports::{Roster, RosterError, RosterResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;

const LIST_MEMBERS_SQL: &str = concat!(
    "SELECT m.id, m.display_name, m.email, p.full_name AS profile_name, ",
    "m.role_id, r.name AS role_name, m.level_id, l.name AS level_name, ",
    "m.weekly_hours ",
    "FROM team_members m ",
    "LEFT JOIN profiles p ON p.id = m.profile_id ",
    "LEFT JOIN roles r ON r.id = m.role_id ",
    "LEFT JOIN levels l ON l.id = m.level_id ",
    "WHERE m.workspace_id = $1 ",
    "ORDER BY m.created_at, m.id",
);

/// `PostgreSQL`-backed roster.
#[derive(Debug, Clone)]
pub struct PostgresRoster {
    pool: BoardPgPool,
}

impl PostgresRoster {
    /// Creates a roster from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RosterResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RosterResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RosterError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RosterError::persistence)?
    }
}

#[async_trait]
impl Roster for PostgresRoster {
    async fn list_members(&self, workspace_id: &WorkspaceId) -> RosterResult<Vec<RosterMember>> {
        let workspace = workspace_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(LIST_MEMBERS_SQL)
                .bind::<Text, _>(workspace)
                .load::<MemberRow>(connection)
                .map_err(RosterError::persistence)?;
            rows.into_iter().map(row_to_member).collect()
        })
        .await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

pub(super) fn row_to_member(row: MemberRow) -> RosterResult<RosterMember> {
    let MemberRow {
        id,
        display_name,
        email,
        profile_name,
        role_id,
        role_name,
        level_id,
        level_name,
        weekly_hours,
    } = row;

    let identity = MemberIdentity {
        display_name: non_blank(display_name),
        email: non_blank(email),
        profile_name: non_blank(profile_name),
    };
    let mut member = RosterMember::new(
        MemberId::new(id).map_err(RosterError::persistence)?,
        identity,
    );
    if let Some(role) = non_blank(role_id) {
        let reference = RosterRef {
            id: RoleId::new(role).map_err(RosterError::persistence)?,
            name: role_name,
        };
        member = member.with_role(reference);
    }
    if let Some(level) = non_blank(level_id) {
        let reference = RosterRef {
            id: LevelId::new(level).map_err(RosterError::persistence)?,
            name: level_name,
        };
        member = member.with_level(reference);
    }
    match weekly_hours {
        Some(hours) => member.with_weekly_hours(hours).map_err(RosterError::persistence),
        None => Ok(member),
    }
}
