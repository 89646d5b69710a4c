//! Diesel schema for board persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Text,
        /// Owning workspace.
        workspace_id -> Text,
        /// Task name.
        name -> Text,
        /// Rich-text description.
        description -> Nullable<Text>,
        /// Current status.
        status_id -> Text,
        /// Priority in canonical string form.
        #[max_length = 20]
        priority -> Nullable<Varchar>,
        /// Assigned user (profile).
        assignee_id -> Nullable<Text>,
        /// Assigned roster member.
        assigned_member_id -> Nullable<Text>,
        /// Owning project, cascaded from the status.
        project_id -> Nullable<Text>,
        /// Owning space, cascaded from the status.
        space_id -> Nullable<Text>,
        /// Planned sprint.
        sprint_id -> Nullable<Text>,
        /// Start date.
        start_date -> Nullable<Date>,
        /// Due date.
        due_date -> Nullable<Date>,
        /// Parent task for subtasks.
        parent_task_id -> Nullable<Text>,
        /// Estimated effort in hours.
        estimated_hours -> Nullable<Double>,
        /// Story-point estimate.
        story_points -> Nullable<Integer>,
        /// Author.
        created_by -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Soft-delete timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Workflow statuses.
    statuses (id) {
        /// Status identifier.
        id -> Text,
        /// Owning workspace.
        workspace_id -> Text,
        /// Display name.
        name -> Text,
        /// Lifecycle category in canonical string form.
        #[max_length = 20]
        status_type -> Varchar,
        /// Ordering position.
        position -> Integer,
        /// Owning project.
        project_id -> Nullable<Text>,
        /// Owning space.
        space_id -> Nullable<Text>,
    }
}
