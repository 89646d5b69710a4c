//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was blank after trimming.
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    /// A task name was blank after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// A status name was blank after trimming.
    #[error("status name must not be empty")]
    EmptyStatusName,

    /// The start date falls after the due date.
    #[error("start date {start} is after due date {due}")]
    InvalidDateRange {
        /// Requested start date.
        start: chrono::NaiveDate,
        /// Requested due date.
        due: chrono::NaiveDate,
    },
}

/// Error returned while parsing a status type from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status type: {0}")]
pub struct ParseStatusTypeError(pub String);

/// Error returned while parsing a task priority from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
