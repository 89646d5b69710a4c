//! Drag-and-drop coordination for the board.
//!
//! [`resolve_target`] turns pointer-reported drop candidates into a target
//! status; [`DragCoordinator`] enforces one gesture at a time and decides
//! whether a drop becomes a [`TransitionIntent`].

mod coordinator;
mod resolve;

pub use coordinator::{
    CancelReason, DragCoordinator, DragError, DragState, DragSubject, DropOutcome,
    TransitionIntent,
};
pub use resolve::{DragSource, DropCandidate, DropContext, DropTarget, TargetMatch, resolve_target};
