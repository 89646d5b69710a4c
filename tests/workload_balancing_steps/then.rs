//! Then steps for workload balancing BDD scenarios.

use super::world::WorkloadWorld;
use rstest_bdd_macros::then;
use sprintboard::workload::domain::WorkloadBand;

fn parse_band(raw: &str) -> Result<WorkloadBand, eyre::Report> {
    WorkloadBand::ALL
        .into_iter()
        .find(|band| band.as_str() == raw)
        .ok_or_else(|| eyre::eyre!("unknown band in scenario: {raw}"))
}

#[then(r#"member "{id}" carries {hours:f64} hours"#)]
fn member_carries(world: &WorkloadWorld, id: String, hours: f64) -> Result<(), eyre::Report> {
    let record = world.record(&id)?;
    eyre::ensure!(
        record.workload_hours.total_cmp(&hours).is_eq(),
        "expected {hours} h for {id}, found {}",
        record.workload_hours
    );
    Ok(())
}

#[then(r#"member "{id}" has a capacity of {hours:f64} hours"#)]
fn member_capacity(world: &WorkloadWorld, id: String, hours: f64) -> Result<(), eyre::Report> {
    let record = world.record(&id)?;
    eyre::ensure!(
        record.capacity_hours.total_cmp(&hours).is_eq(),
        "expected capacity {hours} h for {id}, found {}",
        record.capacity_hours
    );
    Ok(())
}

#[then(r#"member "{id}" is at {percent:f64} percent"#)]
fn member_percent(world: &WorkloadWorld, id: String, percent: f64) -> Result<(), eyre::Report> {
    let record = world.record(&id)?;
    eyre::ensure!(
        record.workload_percent.total_cmp(&percent).is_eq(),
        "expected {percent}% for {id}, found {}",
        record.workload_percent
    );
    Ok(())
}

#[then(r#"member "{id}" is "{band}""#)]
fn member_band(world: &WorkloadWorld, id: String, band: String) -> Result<(), eyre::Report> {
    let expected = parse_band(&band)?;
    let record = world.record(&id)?;
    eyre::ensure!(
        record.band == expected,
        "expected {id} to be {expected}, found {}",
        record.band
    );
    Ok(())
}

#[then(r#"the "{band}" band holds {count:usize} members"#)]
fn band_holds(world: &WorkloadWorld, band: String, count: usize) -> Result<(), eyre::Report> {
    let expected = parse_band(&band)?;
    let found = world.report()?.in_band(expected).count();
    eyre::ensure!(found == count, "expected {count} {band} members, found {found}");
    Ok(())
}

#[then("every member is classified exactly once")]
fn partition_complete(world: &WorkloadWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let counts = report.band_counts();
    eyre::ensure!(
        counts.total() == report.records().len(),
        "band counts {counts:?} do not cover {} records",
        report.records().len()
    );
    Ok(())
}

#[then(r#"the report counts {count:usize} unallocated tasks"#)]
fn unallocated_count(world: &WorkloadWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.report()?.summary().unallocated_tasks;
    eyre::ensure!(found == count, "expected {count} unallocated tasks, found {found}");
    Ok(())
}
