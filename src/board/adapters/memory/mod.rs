//! In-memory adapters for board ports.

mod status_registry;
mod task_store;

pub use status_registry::InMemoryStatusRegistry;
pub use task_store::InMemoryTaskStore;
