//! `PostgreSQL` task store.

use super::{
    BoardPgPool,
    models::{TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::board::{
    domain::{
        Assignment, BoardDomainError, MemberId, Priority, ProjectId, SpaceId, SprintId, StatusId,
        StatusType, Task, TaskData, TaskEstimate, TaskId, TaskSchedule, TaskStatus, TaskUpdate,
        UserId, WorkspaceId,
    },
    ports::{TaskScope, TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable, Text};

const LIST_TASKS_SQL: &str = concat!(
    "SELECT t.id, t.name, t.description, t.status_id, ",
    "s.name AS status_name, s.status_type AS status_type, ",
    "t.priority, t.assignee_id, t.assigned_member_id, ",
    "COALESCE(p.full_name, p.email, m.display_name, m.email) AS assignee_name, ",
    "t.project_id, t.space_id, t.sprint_id, t.start_date, t.due_date, ",
    "t.parent_task_id, t.estimated_hours, t.story_points, ",
    "t.created_by, t.created_at, t.deleted_at ",
    "FROM tasks t ",
    "LEFT JOIN statuses s ON s.id = t.status_id ",
    "LEFT JOIN profiles p ON p.id = t.assignee_id ",
    "LEFT JOIN team_members m ON m.id = t.assigned_member_id ",
    "WHERE t.workspace_id = $1 ",
    "AND ($2::text IS NULL OR t.project_id = $2) ",
    "AND ($3::text IS NULL OR t.space_id = $3) ",
    "AND ($4::text IS NULL OR t.sprint_id = $4) ",
    "AND ($5 OR t.deleted_at IS NULL) ",
    "ORDER BY t.created_at, t.id",
);

const PLACEHOLDER_TASK_NAME: &str = "Unknown";

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: BoardPgPool,
}

impl PostgresTaskStore {
    /// Creates a store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_tasks(
        &self,
        workspace_id: &WorkspaceId,
        scope: &TaskScope,
    ) -> TaskStoreResult<Vec<Task>> {
        let workspace = workspace_id.as_str().to_owned();
        let project = scope.project_id().map(|id| id.as_str().to_owned());
        let space = scope.space_id().map(|id| id.as_str().to_owned());
        let sprint = scope.sprint_id().map(|id| id.as_str().to_owned());
        let include_deleted = scope.include_deleted();

        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(LIST_TASKS_SQL)
                .bind::<Text, _>(workspace)
                .bind::<Nullable<Text>, _>(project)
                .bind::<Nullable<Text>, _>(space)
                .bind::<Nullable<Text>, _>(sprint)
                .bind::<Bool, _>(include_deleted)
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(rows_to_tasks(rows))
        })
        .await
    }

    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> TaskStoreResult<()> {
        let task_id = id.clone();
        let changeset = to_changeset(update);

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.as_str()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if updated == 0 {
                return Err(TaskStoreError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }
}

/// Maps a task update onto the columns it writes.
pub(super) fn to_changeset(update: &TaskUpdate) -> TaskChangeset {
    let mut changeset = TaskChangeset {
        name: update.name().map(str::to_owned),
        deleted_at: update.deleted_at(),
        ..TaskChangeset::default()
    };

    if let Some(placement) = update.placement() {
        changeset.status_id = Some(placement.status_id().as_str().to_owned());
        changeset.project_id = Some(placement.project_id().map(|id| id.as_str().to_owned()));
        changeset.space_id = Some(placement.space_id().map(|id| id.as_str().to_owned()));
    }
    if let Some(assignment) = update.assignment() {
        changeset.assignee_id = Some(assignment.user().map(|id| id.as_str().to_owned()));
        changeset.assigned_member_id =
            Some(assignment.roster_member().map(|id| id.as_str().to_owned()));
    }
    if let Some(priority) = update.priority() {
        changeset.priority = Some(priority.map(|value| value.as_str().to_owned()));
    }
    if let Some(schedule) = update.schedule() {
        changeset.start_date = Some(schedule.start());
        changeset.due_date = Some(schedule.due());
    }
    changeset
}

/// Converts a joined row into a task, degrading unknown enum strings to
/// unset values.
/// Converts listed rows, skipping rows that cannot form a task.
pub(super) fn rows_to_tasks(rows: Vec<TaskRow>) -> Vec<Task> {
    rows.into_iter()
        .filter_map(|row| {
            let row_id = row.id.clone();
            match row_to_task(row) {
                Ok(task) => Some(task),
                Err(err) => {
                    tracing::warn!(task_id = %row_id, error = %err, "skipping unreadable task row");
                    None
                }
            }
        })
        .collect()
}

pub(super) fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        status_id,
        status_name,
        status_type,
        priority,
        assignee_id,
        assigned_member_id,
        assignee_name,
        project_id,
        space_id,
        sprint_id,
        start_date,
        due_date,
        parent_task_id,
        estimated_hours,
        story_points,
        created_by,
        created_at,
        deleted_at,
    } = row;

    let task_id = TaskId::new(id).map_err(TaskStoreError::persistence)?;
    let status = resolve_status(
        StatusId::new(status_id).map_err(TaskStoreError::persistence)?,
        status_name,
        status_type.as_deref(),
    );
    let assignment = Assignment::from_columns(
        optional_id(assignee_id, UserId::new)?,
        optional_id(assigned_member_id, MemberId::new)?,
    );
    let created_by = UserId::new(created_by).map_err(TaskStoreError::persistence)?;

    let task_name = if name.trim().is_empty() {
        tracing::warn!(task_id = %task_id, "blank task name, using placeholder");
        PLACEHOLDER_TASK_NAME.to_owned()
    } else {
        name
    };
    let hours = valid_hours(&task_id, estimated_hours);

    let data = TaskData {
        id: task_id,
        name: task_name,
        description,
        status,
        priority: priority.as_deref().and_then(parse_priority),
        assignment,
        assignee_name,
        project_id: optional_id(project_id, ProjectId::new)?,
        space_id: optional_id(space_id, SpaceId::new)?,
        sprint_id: optional_id(sprint_id, SprintId::new)?,
        schedule: TaskSchedule::from_persisted(start_date, due_date),
        parent_id: optional_id(parent_task_id, TaskId::new)?,
        estimate: TaskEstimate {
            hours,
            story_points: story_points.and_then(|points| u32::try_from(points).ok()),
        },
        created_by,
        created_at,
        deleted_at,
    };
    Task::from_data(data).map_err(TaskStoreError::persistence)
}

fn resolve_status(id: StatusId, name: Option<String>, status_type: Option<&str>) -> TaskStatus {
    let parsed_type = status_type.and_then(|raw| match StatusType::try_from(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(status_id = %id, error = %err, "ignoring unknown status type");
            None
        }
    });
    match (name, parsed_type) {
        (Some(status_name), Some(value)) => TaskStatus::resolved(id, status_name, value),
        _ => TaskStatus::unresolved(id),
    }
}

fn valid_hours(task_id: &TaskId, hours: Option<f64>) -> Option<f64> {
    hours.filter(|value| {
        let valid = value.is_finite() && *value >= 0.0;
        if !valid {
            tracing::warn!(task_id = %task_id, hours = %value, "ignoring invalid estimated hours");
        }
        valid
    })
}

fn parse_priority(raw: &str) -> Option<Priority> {
    match Priority::try_from(raw) {
        Ok(priority) => Some(priority),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unknown task priority");
            None
        }
    }
}

fn optional_id<T>(
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, BoardDomainError>,
) -> TaskStoreResult<Option<T>> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(parse)
        .transpose()
        .map_err(TaskStoreError::persistence)
}
