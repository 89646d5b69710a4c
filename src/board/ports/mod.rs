//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod status_registry;
pub mod task_store;

pub use status_registry::{StatusRegistry, StatusRegistryError, StatusRegistryResult};
pub use task_store::{TaskScope, TaskStore, TaskStoreError, TaskStoreResult};
