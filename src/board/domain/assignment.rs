//! Task assignment and priority value types.

use super::{MemberId, ParsePriorityError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a task is assigned to.
///
/// A task is assigned to at most one of an authenticated user or a roster
/// member; the union makes holding both unrepresentable.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum Assignment {
    /// Nobody is assigned.
    #[default]
    Unassigned,
    /// Assigned to an authenticated user.
    User(UserId),
    /// Assigned to a team roster member.
    RosterMember(MemberId),
}

impl Assignment {
    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserId> {
        match self {
            Self::User(user_id) => Some(user_id),
            Self::Unassigned | Self::RosterMember(_) => None,
        }
    }

    /// Returns the assigned roster member, if any.
    #[must_use]
    pub const fn roster_member(&self) -> Option<&MemberId> {
        match self {
            Self::RosterMember(member_id) => Some(member_id),
            Self::Unassigned | Self::User(_) => None,
        }
    }

    /// Returns `true` when nobody is assigned.
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }

    /// Builds an assignment from the two nullable storage columns.
    ///
    /// Rows violating exclusivity (both columns set) resolve to the roster
    /// member, matching how the store writes assignments: the member column is
    /// always the last one written.
    #[must_use]
    pub fn from_columns(user: Option<UserId>, member: Option<MemberId>) -> Self {
        match (user, member) {
            (_, Some(member_id)) => Self::RosterMember(member_id),
            (Some(user_id), None) => Self::User(user_id),
            (None, None) => Self::Unassigned,
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
    /// Critical priority.
    Critical,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Returns the sort rank; `0` is reserved for tasks without priority.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}
