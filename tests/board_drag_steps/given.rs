//! Given steps for board drag BDD scenarios.

use super::world::BoardDragWorld;
use chrono::{TimeZone, Utc};
use rstest_bdd_macros::given;
use sprintboard::board::domain::{
    ProjectId, SpaceId, Status, StatusId, StatusType, TaskData, TaskId, TaskStatus, UserId,
};

#[given(r#"a status "{id}" named "{name}" of type "{status_type}""#)]
fn status_named(
    world: &mut BoardDragWorld,
    id: String,
    name: String,
    status_type: String,
) -> Result<(), eyre::Report> {
    let parsed_type = StatusType::try_from(status_type.as_str())?;
    let position = i32::try_from(world.pending_statuses.len())?;
    let status = Status::new(StatusId::new(id)?, name, parsed_type, position)?;
    world.pending_statuses.push(status);
    Ok(())
}

#[given(r#"status "{id}" belongs to project "{project}""#)]
fn status_in_project(
    world: &mut BoardDragWorld,
    id: String,
    project: String,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new(project)?;
    let status = world
        .pending_statuses
        .iter_mut()
        .find(|status| status.id().as_str() == id)
        .ok_or_else(|| eyre::eyre!("unknown status {id} in scenario"))?;
    *status = status.clone().with_project(project_id);
    Ok(())
}

#[given(r#"a task "{id}" in status "{status}""#)]
fn task_in_status(
    world: &mut BoardDragWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let column = world
        .pending_statuses
        .iter()
        .find(|candidate| candidate.id().as_str() == status)
        .ok_or_else(|| eyre::eyre!("unknown status {status} in scenario"))?;
    let created_at = Utc
        .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario timestamp"))?;
    let data = TaskData::new(
        TaskId::new(id.as_str())?,
        format!("Task {id}"),
        TaskStatus::resolved(column.id().clone(), column.name(), column.status_type()),
        UserId::new("user-bdd")?,
        created_at,
    );
    world.pending_tasks.push(data);
    Ok(())
}

#[given(r#"task "{id}" belongs to project "{project}" and space "{space}""#)]
fn task_in_project(
    world: &mut BoardDragWorld,
    id: String,
    project: String,
    space: String,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new(project)?;
    let space_id = SpaceId::new(space)?;
    let data = pending_task(world, &id)?;
    *data = data.clone().with_project(project_id).with_space(space_id);
    Ok(())
}

#[given(r#"task "{id}" is a subtask of "{parent}""#)]
fn task_is_subtask(
    world: &mut BoardDragWorld,
    id: String,
    parent: String,
) -> Result<(), eyre::Report> {
    let parent_id = TaskId::new(parent)?;
    let data = pending_task(world, &id)?;
    *data = data.clone().with_parent(parent_id);
    Ok(())
}

fn pending_task<'a>(
    world: &'a mut BoardDragWorld,
    id: &str,
) -> Result<&'a mut TaskData, eyre::Report> {
    world
        .pending_tasks
        .iter_mut()
        .find(|data| data.id.as_str() == id)
        .ok_or_else(|| eyre::eyre!("unknown task {id} in scenario"))
}
