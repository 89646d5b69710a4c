//! In-memory integration tests for board sessions.

use super::helpers::{SeededBoard, seeded, status_id, task_id};
use eyre::WrapErr;
use rstest::rstest;
use sprintboard::board::{
    domain::{Priority, StatusType},
    drag::{CancelReason, DragState, DropCandidate, DropOutcome},
    query::{SortField, SortSpec, TaskFilter},
    services::SyncState,
};
use sprintboard::config::BoardConfig;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_columns_follow_registry_position(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let session = seeded.open(BoardConfig::default()).await?;

    let board = session.board(&TaskFilter::new(), SortSpec::ascending(SortField::Name));

    let names: Vec<&str> = board
        .columns()
        .iter()
        .map(|column| column.status().name())
        .collect();
    eyre::ensure!(names == ["Backlog", "In progress", "Done"], "unexpected order {names:?}");
    let backlog = board
        .column(&status_id("41"))
        .ok_or_else(|| eyre::eyre!("missing backlog column"))?;
    let ids: Vec<&str> = backlog.tasks().iter().map(|task| task.id().as_str()).collect();
    eyre::ensure!(ids == ["task-1", "task-3"], "subtasks must stay off the board: {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_view_nests_subtasks(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let session = seeded.open(BoardConfig::default()).await?;

    let list = session.list(&TaskFilter::new(), SortSpec::ascending(SortField::CreatedAt));

    eyre::ensure!(list.top_level().len() == 4, "four top-level tasks");
    let subtasks = list.subtasks_of(&task_id("task-1"));
    eyre::ensure!(subtasks.len() == 1, "one subtask under task-1");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_to_done_clears_project_and_space(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let mut session = seeded.open(BoardConfig::default()).await?;

    session.begin_drag("task-1").wrap_err("start drag")?;
    let outcome = session
        .drop_dragged(&[DropCandidate::new("status-43")])
        .await
        .wrap_err("drop on done")?;

    eyre::ensure!(matches!(outcome, DropOutcome::Transition(_)), "expected transition");
    let stored = seeded
        .tasks
        .get(&task_id("task-1"))?
        .ok_or_else(|| eyre::eyre!("task-1 missing"))?;
    eyre::ensure!(stored.status_id() == &status_id("43"), "status written");
    eyre::ensure!(stored.project_id().is_none(), "project cleared");
    eyre::ensure!(stored.space_id().is_none(), "space cleared");
    eyre::ensure!(session.drag_state() == &DragState::Idle, "gesture settled");
    eyre::ensure!(session.sync_state() == SyncState::Clean, "board reloaded");
    let done = session
        .list_by_status_type(&TaskFilter::new(), SortSpec::default())
        .tasks_of(StatusType::Done)
        .len();
    eyre::ensure!(done == 2, "task-1 now groups as done");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_onto_task_adopts_its_scope(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let mut session = seeded.open(BoardConfig::default()).await?;

    session.begin_drag("task-5").wrap_err("start drag")?;
    session
        .drop_dragged(&[DropCandidate::new("task-2")])
        .await
        .wrap_err("drop on task-2")?;

    let moved = session
        .task(&task_id("task-5"))
        .ok_or_else(|| eyre::eyre!("task-5 missing"))?;
    eyre::ensure!(moved.status_id() == &status_id("42"), "joined task-2's column");
    eyre::ensure!(
        moved.project_id().map(|id| id.as_str()) == Some("p-1"),
        "project cascaded from the status"
    );
    eyre::ensure!(moved.space_id().is_none(), "space cleared");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_drop_prefix_is_honoured(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let config = BoardConfig::from_json_str(r#"{"drop_target_prefix":"column:"}"#)?;
    let mut session = seeded.open(config).await?;

    session.begin_drag("task-3").wrap_err("start drag")?;
    let ignored = session
        .drop_dragged(&[DropCandidate::new("status-42")])
        .await?;
    session.begin_drag("task-3").wrap_err("restart drag")?;
    let moved = session
        .drop_dragged(&[DropCandidate::new("column:42")])
        .await?;

    eyre::ensure!(
        ignored == DropOutcome::Cancelled(CancelReason::NoTarget),
        "default prefix no longer recognised"
    );
    eyre::ensure!(matches!(moved, DropOutcome::Transition(_)), "custom prefix resolved");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_combine_across_hooks(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let mut session = seeded.open(BoardConfig::default()).await?;
    session
        .set_priority(&task_id("task-3"), Some(Priority::Critical))
        .await?;

    let filter = TaskFilter::new()
        .with_priorities([Priority::Critical])
        .with_search("DOCS");
    let found = session.filtered(&filter, SortSpec::default());

    let ids: Vec<&str> = found.iter().map(|task| task.id().as_str()).collect();
    eyre::ensure!(ids == ["task-3"], "unexpected matches {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_leave_every_view(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let mut session = seeded.open(BoardConfig::default()).await?;

    session.delete_task(&task_id("task-3")).await?;

    eyre::ensure!(session.task(&task_id("task-3")).is_none(), "not listed");
    let all = session.filtered(&TaskFilter::new(), SortSpec::default());
    eyre::ensure!(all.len() == 4, "four live tasks remain");
    Ok(())
}
