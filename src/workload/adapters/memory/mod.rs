//! In-memory adapters for workload ports.

mod roster;

pub use roster::InMemoryRoster;
