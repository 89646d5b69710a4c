//! Diesel row models for board persistence.

use super::schema::{statuses, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sql_types::{Date, Double, Integer, Nullable, Text, Timestamptz, Varchar};

/// Task row joined with its status and assignee display fields.
#[derive(Debug, Clone, QueryableByName)]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = Text)]
    pub id: String,
    /// Task name.
    #[diesel(sql_type = Text)]
    pub name: String,
    /// Rich-text description.
    #[diesel(sql_type = Nullable<Text>)]
    pub description: Option<String>,
    /// Current status.
    #[diesel(sql_type = Text)]
    pub status_id: String,
    /// Joined status name.
    #[diesel(sql_type = Nullable<Text>)]
    pub status_name: Option<String>,
    /// Joined status type.
    #[diesel(sql_type = Nullable<Varchar>)]
    pub status_type: Option<String>,
    /// Priority.
    #[diesel(sql_type = Nullable<Varchar>)]
    pub priority: Option<String>,
    /// Assigned user.
    #[diesel(sql_type = Nullable<Text>)]
    pub assignee_id: Option<String>,
    /// Assigned roster member.
    #[diesel(sql_type = Nullable<Text>)]
    pub assigned_member_id: Option<String>,
    /// Joined assignee display name.
    #[diesel(sql_type = Nullable<Text>)]
    pub assignee_name: Option<String>,
    /// Owning project.
    #[diesel(sql_type = Nullable<Text>)]
    pub project_id: Option<String>,
    /// Owning space.
    #[diesel(sql_type = Nullable<Text>)]
    pub space_id: Option<String>,
    /// Planned sprint.
    #[diesel(sql_type = Nullable<Text>)]
    pub sprint_id: Option<String>,
    /// Start date.
    #[diesel(sql_type = Nullable<Date>)]
    pub start_date: Option<NaiveDate>,
    /// Due date.
    #[diesel(sql_type = Nullable<Date>)]
    pub due_date: Option<NaiveDate>,
    /// Parent task.
    #[diesel(sql_type = Nullable<Text>)]
    pub parent_task_id: Option<String>,
    /// Estimated hours.
    #[diesel(sql_type = Nullable<Double>)]
    pub estimated_hours: Option<f64>,
    /// Story points.
    #[diesel(sql_type = Nullable<Integer>)]
    pub story_points: Option<i32>,
    /// Author.
    #[diesel(sql_type = Text)]
    pub created_by: String,
    /// Creation timestamp.
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Soft-delete timestamp.
    #[diesel(sql_type = Nullable<Timestamptz>)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Partial update model for task records.
///
/// Outer `None` leaves a column untouched; `Some(None)` writes `NULL`.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New name.
    pub name: Option<String>,
    /// New status.
    pub status_id: Option<String>,
    /// New project, cascaded with the status.
    pub project_id: Option<Option<String>>,
    /// New space, cascaded with the status.
    pub space_id: Option<Option<String>>,
    /// New assigned user.
    pub assignee_id: Option<Option<String>>,
    /// New assigned roster member.
    pub assigned_member_id: Option<Option<String>>,
    /// New priority.
    pub priority: Option<Option<String>>,
    /// New start date.
    pub start_date: Option<Option<NaiveDate>>,
    /// New due date.
    pub due_date: Option<Option<NaiveDate>>,
    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Query result row for status records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatusRow {
    /// Status identifier.
    pub id: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Display name.
    pub name: String,
    /// Lifecycle category.
    pub status_type: String,
    /// Ordering position.
    pub position: i32,
    /// Owning project.
    pub project_id: Option<String>,
    /// Owning space.
    pub space_id: Option<String>,
}
