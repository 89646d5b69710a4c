//! Then steps for board drag BDD scenarios.

use super::world::BoardDragWorld;
use rstest_bdd_macros::then;
use sprintboard::board::{
    domain::{Task, TaskId},
    drag::{CancelReason, DragState, DropOutcome},
    services::SyncState,
};

fn stored_task(world: &BoardDragWorld, id: &str) -> Result<Task, eyre::Report> {
    world
        .store
        .get(&TaskId::new(id)?)?
        .ok_or_else(|| eyre::eyre!("task {id} missing from the store"))
}

fn last_outcome(world: &BoardDragWorld) -> Result<&DropOutcome, eyre::Report> {
    match world.last_drop.as_ref() {
        Some(Ok(outcome)) => Ok(outcome),
        Some(Err(err)) => Err(eyre::eyre!("drop failed: {err}")),
        None => Err(eyre::eyre!("no drop was performed")),
    }
}

fn parse_reason(raw: &str) -> Result<CancelReason, eyre::Report> {
    match raw {
        "no target" => Ok(CancelReason::NoTarget),
        "same status" => Ok(CancelReason::SameStatus),
        "column drag" => Ok(CancelReason::ColumnDrag),
        "subtask" => Ok(CancelReason::Subtask),
        "unknown task" => Ok(CancelReason::UnknownTask),
        "unknown status" => Ok(CancelReason::UnknownStatus),
        other => Err(eyre::eyre!("unknown cancel reason in scenario: {other}")),
    }
}

#[then(r#"task "{id}" is stored in status "{status}""#)]
fn task_stored_in_status(
    world: &BoardDragWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task = stored_task(world, &id)?;
    eyre::ensure!(
        task.status_id().as_str() == status,
        "expected {id} in status {status}, found {}",
        task.status_id()
    );
    Ok(())
}

#[then(r#"task "{id}" has no project or space"#)]
fn task_unscoped(world: &BoardDragWorld, id: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, &id)?;
    eyre::ensure!(task.project_id().is_none(), "project should be cleared");
    eyre::ensure!(task.space_id().is_none(), "space should be cleared");
    Ok(())
}

#[then(r#"task "{id}" belongs to project "{project}""#)]
fn task_has_project(world: &BoardDragWorld, id: String, project: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, &id)?;
    eyre::ensure!(
        task.project_id().map(|project_id| project_id.as_str()) == Some(project.as_str()),
        "expected {id} in project {project}"
    );
    Ok(())
}

#[then("the drop is a transition")]
fn drop_is_transition(world: &BoardDragWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        matches!(outcome, DropOutcome::Transition(_)),
        "expected a transition, found {outcome:?}"
    );
    Ok(())
}

#[then(r#"the drop is cancelled as "{reason}""#)]
fn drop_is_cancelled(world: &BoardDragWorld, reason: String) -> Result<(), eyre::Report> {
    let expected = DropOutcome::Cancelled(parse_reason(&reason)?);
    let outcome = last_outcome(world)?;
    eyre::ensure!(*outcome == expected, "expected {expected:?}, found {outcome:?}");
    Ok(())
}

#[then("the board is clean and idle")]
fn board_clean_and_idle(world: &BoardDragWorld) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board session was never opened"))?;
    eyre::ensure!(session.sync_state() == SyncState::Clean, "board should be clean");
    eyre::ensure!(session.drag_state() == &DragState::Idle, "gesture should be settled");
    Ok(())
}
