//! Shared builders for in-memory integration tests.

use chrono::{DateTime, TimeZone, Utc};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use sprintboard::board::{
    adapters::memory::{InMemoryStatusRegistry, InMemoryTaskStore},
    domain::{
        Assignment, MemberId, ProjectId, SpaceId, Status, StatusId, StatusType, Task, TaskData,
        TaskId, TaskStatus, UserId, WorkspaceId,
    },
    ports::TaskScope,
    services::BoardSession,
};
use sprintboard::config::BoardConfig;
use sprintboard::workload::{
    adapters::memory::InMemoryRoster,
    domain::{MemberIdentity, RosterMember},
};
use std::sync::Arc;

/// Board session over the in-memory adapters.
pub type MemorySession = BoardSession<InMemoryTaskStore, InMemoryStatusRegistry, DefaultClock>;

/// In-memory stores seeded with a small sprint board.
pub struct SeededBoard {
    pub workspace_id: WorkspaceId,
    pub tasks: Arc<InMemoryTaskStore>,
    pub statuses: Arc<InMemoryStatusRegistry>,
    pub roster: Arc<InMemoryRoster>,
}

impl SeededBoard {
    /// Opens a loaded session over the seeded stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial reload fails.
    pub async fn open(&self, config: BoardConfig) -> Result<MemorySession, eyre::Report> {
        let mut session = BoardSession::new(
            self.workspace_id.clone(),
            TaskScope::workspace(),
            Arc::clone(&self.tasks),
            Arc::clone(&self.statuses),
            Arc::new(DefaultClock),
            config,
        );
        session.reload().await.wrap_err("initial board reload")?;
        Ok(session)
    }
}

/// Parses a task identifier.
pub fn task_id(raw: &str) -> TaskId {
    TaskId::new(raw).expect("valid task id")
}

/// Parses a status identifier.
pub fn status_id(raw: &str) -> StatusId {
    StatusId::new(raw).expect("valid status id")
}

/// Parses a member identifier.
pub fn member_id(raw: &str) -> MemberId {
    MemberId::new(raw).expect("valid member id")
}

fn created(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn data(id: &str, name: &str, status: &Status, day: u32) -> TaskData {
    TaskData::new(
        task_id(id),
        name,
        TaskStatus::resolved(status.id().clone(), status.name(), status.status_type()),
        UserId::new("user-1").expect("valid user id"),
        created(day),
    )
}

fn member(id: &str, name: &str, weekly_hours: f64) -> RosterMember {
    RosterMember::new(
        member_id(id),
        MemberIdentity {
            display_name: Some(name.to_owned()),
            ..MemberIdentity::default()
        },
    )
    .with_weekly_hours(weekly_hours)
    .expect("valid weekly hours")
}

/// Seeds three statuses, five tasks and two roster members.
///
/// - `41` "Backlog" (project `p-1`, space `s-1`), `42` "In progress"
///   (project `p-1`), `43` "Done" (unscoped)
/// - `task-1` .. `task-3` top-level, `task-4` a subtask of `task-1`,
///   `task-5` unassigned in "Done"
#[fixture]
pub fn seeded() -> SeededBoard {
    let workspace_id = WorkspaceId::new("ws-1").expect("valid workspace id");
    let project = ProjectId::new("p-1").expect("valid project id");
    let space = SpaceId::new("s-1").expect("valid space id");
    let backlog = Status::new(status_id("41"), "Backlog", StatusType::NotStarted, 0)
        .expect("valid status")
        .with_project(project.clone())
        .with_space(space.clone());
    let doing = Status::new(status_id("42"), "In progress", StatusType::Active, 1)
        .expect("valid status")
        .with_project(project.clone());
    let done = Status::new(status_id("43"), "Done", StatusType::Done, 2).expect("valid status");

    let statuses = Arc::new(InMemoryStatusRegistry::new());
    for status in [&done, &backlog, &doing] {
        statuses
            .insert(&workspace_id, status.clone())
            .expect("insert status");
    }

    let ada = Assignment::RosterMember(member_id("m-ada"));
    let tasks = Arc::new(InMemoryTaskStore::with_status_registry(&statuses));
    let seeded = [
        data("task-1", "Design schema", &backlog, 1)
            .with_project(project.clone())
            .with_space(space.clone())
            .with_assignment(ada.clone())
            .with_estimated_hours(20.0),
        data("task-2", "Build API", &doing, 2)
            .with_project(project.clone())
            .with_assignment(ada.clone())
            .with_story_points(3),
        data("task-3", "Write docs", &backlog, 3)
            .with_project(project.clone())
            .with_space(space.clone())
            .with_assignment(Assignment::RosterMember(member_id("m-bob")))
            .with_estimated_hours(4.0),
        data("task-4", "Review schema", &backlog, 4)
            .with_parent(task_id("task-1"))
            .with_assignment(ada)
            .with_estimated_hours(30.0),
        data("task-5", "Release", &done, 5),
    ];
    for entry in seeded {
        tasks
            .insert(&workspace_id, Task::from_data(entry).expect("valid task"))
            .expect("insert task");
    }

    let roster = Arc::new(InMemoryRoster::new());
    for entry in [member("m-ada", "Ada", 40.0), member("m-bob", "Bob", 40.0)] {
        roster.insert(&workspace_id, entry).expect("insert member");
    }

    SeededBoard {
        workspace_id,
        tasks,
        statuses,
        roster,
    }
}
