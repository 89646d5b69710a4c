//! Identifier types for roster references.

use super::WorkloadDomainError;
use crate::board::domain::text_identifier;

text_identifier!(
    /// Team role identifier.
    RoleId,
    "role",
    WorkloadDomainError
);
text_identifier!(
    /// Seniority level identifier.
    LevelId,
    "level",
    WorkloadDomainError
);
