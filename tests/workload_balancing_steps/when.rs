//! When steps for workload balancing BDD scenarios.

use super::world::{WorkloadWorld, run_async};
use rstest_bdd_macros::when;
use sprintboard::board::ports::TaskScope;
use sprintboard::workload::services::WorkloadService;
use std::sync::Arc;

#[when("the workload report is built")]
fn build_report(world: &mut WorkloadWorld) -> Result<(), eyre::Report> {
    let service = WorkloadService::new(
        Arc::clone(&world.tasks),
        Arc::clone(&world.roster),
        world.policy,
    )?;
    let result = run_async(service.report(&world.workspace_id, &TaskScope::workspace()));
    world.last_report = Some(result);
    Ok(())
}
