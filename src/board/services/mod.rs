//! Service layer for board operations.

mod session;
mod transition;

pub use session::{BoardServiceError, BoardServiceResult, BoardSession, SyncState};
pub use transition::{TransitionExecutor, TransitionOutcome};
