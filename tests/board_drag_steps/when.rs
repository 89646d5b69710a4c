//! When steps for board drag BDD scenarios.

use super::world::{BoardDragWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use sprintboard::board::drag::DropCandidate;

#[when(r#"task "{id}" is dragged onto "{target}""#)]
fn drag_task_onto(
    world: &mut BoardDragWorld,
    id: String,
    target: String,
) -> Result<(), eyre::Report> {
    let session = world.session()?;
    session.begin_drag(&id).wrap_err("start drag gesture")?;
    let result = run_async(session.drop_dragged(&[DropCandidate::new(target)]));
    world.last_drop = Some(result);
    Ok(())
}
