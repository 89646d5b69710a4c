//! Port contracts for the workload context.

mod roster;

pub use roster::{Roster, RosterError, RosterResult};
