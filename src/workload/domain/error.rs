//! Error types for workload domain validation.

use thiserror::Error;

/// Errors returned while constructing workload domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkloadDomainError {
    /// An identifier was blank after trimming.
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    /// Weekly hours must be finite and non-negative.
    #[error("weekly hours must be finite and non-negative, got {0}")]
    InvalidWeeklyHours(f64),

    /// A policy value is out of range.
    #[error("invalid workload policy: {0}")]
    InvalidPolicy(&'static str),
}
