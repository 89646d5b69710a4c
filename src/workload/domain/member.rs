//! Team roster members.

use super::{LevelId, RoleId, WorkloadDomainError};
use crate::board::domain::MemberId;
use serde::{Deserialize, Serialize};

/// Label shown when a name cannot be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Label shown when no role or level is set.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Ways a roster member can be named.
///
/// A member may be invited by email only, given a display name, or linked to
/// an authenticated profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberIdentity {
    /// Name entered on the roster.
    pub display_name: Option<String>,
    /// Invitation email.
    pub email: Option<String>,
    /// Full name of the linked profile.
    pub profile_name: Option<String>,
}

impl MemberIdentity {
    /// Returns the best available label: profile name, display name, email,
    /// then [`UNKNOWN_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        [&self.profile_name, &self.display_name, &self.email]
            .into_iter()
            .filter_map(|candidate| candidate.as_deref())
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(UNKNOWN_LABEL)
    }
}

/// Reference to a role or level with its resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRef<I> {
    /// Referenced identifier.
    pub id: I,
    /// Resolved name; missing when the referenced row is gone.
    pub name: Option<String>,
}

impl<I> RosterRef<I> {
    /// Creates a resolved reference.
    #[must_use]
    pub fn named(id: I, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Creates an unresolved reference.
    #[must_use]
    pub const fn dangling(id: I) -> Self {
        Self { id, name: None }
    }
}

fn ref_label<I>(reference: Option<&RosterRef<I>>) -> &str {
    match reference {
        None => UNASSIGNED_LABEL,
        Some(resolved) => resolved
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_LABEL),
    }
}

/// A person on the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMember {
    id: MemberId,
    identity: MemberIdentity,
    role: Option<RosterRef<RoleId>>,
    level: Option<RosterRef<LevelId>>,
    weekly_hours: Option<f64>,
}

impl RosterMember {
    /// Creates a member with no role, level or declared hours.
    #[must_use]
    pub const fn new(id: MemberId, identity: MemberIdentity) -> Self {
        Self {
            id,
            identity,
            role: None,
            level: None,
            weekly_hours: None,
        }
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: RosterRef<RoleId>) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the level.
    #[must_use]
    pub fn with_level(mut self, level: RosterRef<LevelId>) -> Self {
        self.level = Some(level);
        self
    }

    /// Declares weekly availability.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::InvalidWeeklyHours`] when `hours` is
    /// negative or not finite.
    pub fn with_weekly_hours(mut self, hours: f64) -> Result<Self, WorkloadDomainError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(WorkloadDomainError::InvalidWeeklyHours(hours));
        }
        self.weekly_hours = Some(hours);
        Ok(self)
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> &MemberId {
        &self.id
    }

    /// Returns the identity fields.
    #[must_use]
    pub const fn identity(&self) -> &MemberIdentity {
        &self.identity
    }

    /// Returns the role reference.
    #[must_use]
    pub const fn role(&self) -> Option<&RosterRef<RoleId>> {
        self.role.as_ref()
    }

    /// Returns the level reference.
    #[must_use]
    pub const fn level(&self) -> Option<&RosterRef<LevelId>> {
        self.level.as_ref()
    }

    /// Returns the declared weekly hours, if any.
    #[must_use]
    pub const fn weekly_hours(&self) -> Option<f64> {
        self.weekly_hours
    }

    /// Returns the display label.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.identity.label()
    }

    /// Returns the role label; [`UNASSIGNED_LABEL`] without a role,
    /// [`UNKNOWN_LABEL`] for an unresolved one.
    #[must_use]
    pub fn role_label(&self) -> &str {
        ref_label(self.role.as_ref())
    }

    /// Returns the level label; [`UNASSIGNED_LABEL`] without a level,
    /// [`UNKNOWN_LABEL`] for an unresolved one.
    #[must_use]
    pub fn level_label(&self) -> &str {
        ref_label(self.level.as_ref())
    }
}
