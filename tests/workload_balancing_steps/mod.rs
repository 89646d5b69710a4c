//! Step definitions for workload balancing scenarios.

pub mod world;

mod given;
mod then;
mod when;
