//! Given steps for workload balancing BDD scenarios.

use super::world::WorkloadWorld;
use chrono::{TimeZone, Utc};
use rstest_bdd_macros::given;
use sprintboard::board::domain::{Assignment, MemberId, Task, TaskData, TaskId, UserId};
use sprintboard::workload::domain::{MemberIdentity, RosterMember, WorkloadPolicy};

fn add_member(world: &WorkloadWorld, member: RosterMember) -> Result<(), eyre::Report> {
    world.roster.insert(&world.workspace_id, member)?;
    Ok(())
}

fn named(id: String, name: String) -> Result<RosterMember, eyre::Report> {
    Ok(RosterMember::new(
        MemberId::new(id)?,
        MemberIdentity {
            display_name: Some(name),
            ..MemberIdentity::default()
        },
    ))
}

fn add_task(
    world: &WorkloadWorld,
    id: String,
    build: impl FnOnce(TaskData) -> TaskData,
) -> Result<(), eyre::Report> {
    let created_at = Utc
        .with_ymd_and_hms(2026, 4, 6, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario timestamp"))?;
    let data = TaskData::new(
        TaskId::new(id.as_str())?,
        format!("Task {id}"),
        WorkloadWorld::open_status()?,
        UserId::new("user-bdd")?,
        created_at,
    );
    world
        .tasks
        .insert(&world.workspace_id, Task::from_data(build(data))?)?;
    Ok(())
}

fn assigned_to(member: &str) -> Result<Assignment, eyre::Report> {
    Ok(Assignment::RosterMember(MemberId::new(member)?))
}

#[given(r#"a roster member "{id}" named "{name}" with {hours:f64} weekly hours"#)]
fn member_with_hours(
    world: &mut WorkloadWorld,
    id: String,
    name: String,
    hours: f64,
) -> Result<(), eyre::Report> {
    let member = named(id, name)?.with_weekly_hours(hours)?;
    add_member(world, member)
}

#[given(r#"a roster member "{id}" named "{name}" without weekly hours"#)]
fn member_without_hours(
    world: &mut WorkloadWorld,
    id: String,
    name: String,
) -> Result<(), eyre::Report> {
    let member = named(id, name)?;
    add_member(world, member)
}

#[given(r#"a task "{id}" for "{member}" estimated at {hours:f64} hours"#)]
fn task_with_hours(
    world: &mut WorkloadWorld,
    id: String,
    member: String,
    hours: f64,
) -> Result<(), eyre::Report> {
    let assignment = assigned_to(&member)?;
    add_task(world, id, |data| {
        data.with_assignment(assignment).with_estimated_hours(hours)
    })
}

#[given(r#"a task "{id}" for "{member}" worth {points:u32} story points"#)]
fn task_with_points(
    world: &mut WorkloadWorld,
    id: String,
    member: String,
    points: u32,
) -> Result<(), eyre::Report> {
    let assignment = assigned_to(&member)?;
    add_task(world, id, |data| {
        data.with_assignment(assignment).with_story_points(points)
    })
}

#[given(r#"an unassigned task "{id}" estimated at {hours:f64} hours"#)]
fn unassigned_task(world: &mut WorkloadWorld, id: String, hours: f64) -> Result<(), eyre::Report> {
    add_task(world, id, |data| data.with_estimated_hours(hours))
}

#[given("capacity is not discounted")]
fn full_capacity(world: &mut WorkloadWorld) {
    world.policy = WorkloadPolicy::full_capacity();
}
