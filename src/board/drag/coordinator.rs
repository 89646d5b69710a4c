//! Drag gesture state machine.

use super::resolve::{DropCandidate, DropContext, resolve_target};
use crate::board::domain::{StatusId, TaskId};
use std::mem;
use thiserror::Error;

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSubject {
    /// A task card.
    Task(TaskId),
    /// A status column; tracked for rendering only.
    Column(StatusId),
}

/// A resolved request to move a task into another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionIntent {
    task_id: TaskId,
    from: StatusId,
    to: StatusId,
}

impl TransitionIntent {
    /// Returns the task to move.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the status the task currently occupies.
    #[must_use]
    pub const fn from(&self) -> &StatusId {
        &self.from
    }

    /// Returns the target status.
    #[must_use]
    pub const fn to(&self) -> &StatusId {
        &self.to
    }
}

/// Why a drop produced no transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// No candidate resolved to a status.
    NoTarget,
    /// The task already occupies the target status.
    SameStatus,
    /// A column was dragged; column reordering is not persisted.
    ColumnDrag,
    /// Subtasks cannot be moved between columns.
    Subtask,
    /// The dragged task is no longer in the collection.
    UnknownTask,
    /// The resolved status is not in the registry.
    UnknownStatus,
}

/// Result of dropping the dragged subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The drop requests a status transition.
    Transition(TransitionIntent),
    /// The drop is a no-op.
    Cancelled(CancelReason),
}

/// Gesture phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A subject is being dragged.
    Dragging(DragSubject),
    /// A transition was requested and awaits write acknowledgment.
    Dropped(TransitionIntent),
}

/// Errors for gesture calls made in the wrong phase.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// Another gesture is dragging or awaiting acknowledgment.
    #[error("a drag gesture is already in progress")]
    GestureInProgress,
    /// A drop arrived with no gesture in progress.
    #[error("no drag gesture is in progress")]
    NotDragging,
    /// The dragged identifier matches neither a task nor a status.
    #[error("unknown drag subject: {0}")]
    UnknownSubject(String),
}

/// Tracks the single in-progress drag gesture.
///
/// `Idle → Dragging → Idle` for cancelled drops; `Idle → Dragging → Dropped
/// → Idle` for transitions, where [`DragCoordinator::settle`] is called once
/// the write is acknowledged or has failed. Until then the task keeps
/// rendering in its original column.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gesture phase.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` when no gesture is active.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Returns the subject being dragged.
    #[must_use]
    pub const fn subject(&self) -> Option<&DragSubject> {
        match &self.state {
            DragState::Dragging(subject) => Some(subject),
            DragState::Idle | DragState::Dropped(_) => None,
        }
    }

    /// Returns the transition awaiting acknowledgment.
    #[must_use]
    pub const fn pending(&self) -> Option<&TransitionIntent> {
        match &self.state {
            DragState::Dropped(intent) => Some(intent),
            DragState::Idle | DragState::Dragging(_) => None,
        }
    }

    /// Starts a gesture for `dragged_id`.
    ///
    /// The identifier is matched against tasks first, then statuses.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::GestureInProgress`] unless idle, or
    /// [`DragError::UnknownSubject`] when nothing matches.
    pub fn start(
        &mut self,
        dragged_id: &str,
        context: &DropContext<'_>,
    ) -> Result<DragSubject, DragError> {
        if !self.is_idle() {
            return Err(DragError::GestureInProgress);
        }
        let subject = if let Some(task) = context.task(dragged_id) {
            DragSubject::Task(task.id().clone())
        } else if let Some(status) = context.status(dragged_id) {
            DragSubject::Column(status.id().clone())
        } else {
            return Err(DragError::UnknownSubject(dragged_id.to_owned()));
        };
        self.state = DragState::Dragging(subject.clone());
        Ok(subject)
    }

    /// Abandons a gesture that has not been dropped.
    ///
    /// Returns `true` when a gesture was cancelled.
    pub fn cancel(&mut self) -> bool {
        if matches!(self.state, DragState::Dragging(_)) {
            self.state = DragState::Idle;
            return true;
        }
        false
    }

    /// Drops the dragged subject over `candidates`.
    ///
    /// Cancelled outcomes return the coordinator to idle immediately. A
    /// transition outcome holds the gesture in [`DragState::Dropped`] until
    /// [`DragCoordinator::settle`].
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] when no subject is being dragged.
    pub fn drop_on(
        &mut self,
        candidates: &[DropCandidate],
        context: &DropContext<'_>,
    ) -> Result<DropOutcome, DragError> {
        let DragState::Dragging(subject) = mem::take(&mut self.state) else {
            return Err(DragError::NotDragging);
        };

        let outcome = resolve_drop(&subject, candidates, context);
        match &outcome {
            DropOutcome::Transition(intent) => {
                tracing::debug!(
                    task_id = %intent.task_id,
                    from = %intent.from,
                    to = %intent.to,
                    "drop resolved to transition"
                );
                self.state = DragState::Dropped(intent.clone());
            }
            DropOutcome::Cancelled(reason) => {
                tracing::debug!(?subject, ?reason, "drop cancelled");
            }
        }
        Ok(outcome)
    }

    /// Ends a dropped gesture, returning its intent.
    pub fn settle(&mut self) -> Option<TransitionIntent> {
        match mem::take(&mut self.state) {
            DragState::Dropped(intent) => Some(intent),
            other => {
                self.state = other;
                None
            }
        }
    }
}

fn resolve_drop(
    subject: &DragSubject,
    candidates: &[DropCandidate],
    context: &DropContext<'_>,
) -> DropOutcome {
    let task_id = match subject {
        DragSubject::Column(_) => return DropOutcome::Cancelled(CancelReason::ColumnDrag),
        DragSubject::Task(task_id) => task_id,
    };
    let Some(task) = context.task(task_id.as_str()) else {
        return DropOutcome::Cancelled(CancelReason::UnknownTask);
    };
    if task.is_subtask() {
        return DropOutcome::Cancelled(CancelReason::Subtask);
    }
    let Some(target) = resolve_target(candidates, context) else {
        return DropOutcome::Cancelled(CancelReason::NoTarget);
    };
    if context.status(target.status_id().as_str()).is_none() {
        return DropOutcome::Cancelled(CancelReason::UnknownStatus);
    }
    if target.status_id() == task.status_id() {
        return DropOutcome::Cancelled(CancelReason::SameStatus);
    }
    DropOutcome::Transition(TransitionIntent {
        task_id: task.id().clone(),
        from: task.status_id().clone(),
        to: target.status_id().clone(),
    })
}
