//! In-memory integration tests for workload reports.

use super::helpers::{SeededBoard, member_id, seeded, task_id};
use rstest::rstest;
use sprintboard::board::{domain::Assignment, ports::TaskScope};
use sprintboard::config::BoardConfig;
use sprintboard::workload::{
    domain::{WorkloadBand, WorkloadPolicy},
    ports::Roster,
    services::WorkloadService,
};
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_classifies_the_seeded_team(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let service = WorkloadService::new(
        Arc::clone(&seeded.tasks),
        Arc::clone(&seeded.roster),
        WorkloadPolicy::default(),
    )?;

    let report = service
        .report(&seeded.workspace_id, &TaskScope::workspace())
        .await?;

    let ada = report
        .record(&member_id("m-ada"))
        .ok_or_else(|| eyre::eyre!("missing Ada"))?;
    eyre::ensure!(ada.task_count == 2, "the subtask does not count");
    eyre::ensure!(ada.workload_hours.total_cmp(&44.0).is_eq(), "20 h plus 3 points at 8 h");
    eyre::ensure!(ada.band == WorkloadBand::Overloaded, "44 h of 32 h");
    let bob = report
        .record(&member_id("m-bob"))
        .ok_or_else(|| eyre::eyre!("missing Bob"))?;
    eyre::ensure!(bob.band == WorkloadBand::Underutilized, "4 h of 32 h");
    eyre::ensure!(report.summary().unallocated_tasks == 1, "task-5 is unassigned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_rebalances_after_reload(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let mut session = seeded.open(BoardConfig::default()).await?;
    let roster = seeded.roster.list_members(&seeded.workspace_id).await?;

    session
        .assign_task(
            &task_id("task-1"),
            Assignment::RosterMember(member_id("m-bob")),
        )
        .await?;
    let report = session.workload(&roster);

    let counts = report.band_counts();
    eyre::ensure!(counts.total() == 2, "every member classified once");
    let bob = report
        .record(&member_id("m-bob"))
        .ok_or_else(|| eyre::eyre!("missing Bob"))?;
    eyre::ensure!(bob.workload_hours.total_cmp(&24.0).is_eq(), "4 h plus 20 h");
    eyre::ensure!(bob.band == WorkloadBand::Balanced, "24 h of 32 h");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_capacity_policy_lowers_percentages(seeded: SeededBoard) -> Result<(), eyre::Report> {
    let session = seeded.open(BoardConfig::full_capacity()).await?;
    let roster = seeded.roster.list_members(&seeded.workspace_id).await?;

    let report = session.workload(&roster);

    let ada = report
        .record(&member_id("m-ada"))
        .ok_or_else(|| eyre::eyre!("missing Ada"))?;
    eyre::ensure!(ada.capacity_hours.total_cmp(&40.0).is_eq(), "no capacity discount");
    eyre::ensure!(
        ada.workload_percent > 109.9 && ada.workload_percent < 110.1,
        "44 h of 40 h"
    );
    Ok(())
}
