//! Domain model for team workload.
//!
//! Roster members, the capacity policy and the derived workload records.

mod error;
mod ids;
mod member;
mod policy;
mod record;

pub use error::WorkloadDomainError;
pub use ids::{LevelId, RoleId};
pub use member::{MemberIdentity, RosterMember, RosterRef, UNASSIGNED_LABEL, UNKNOWN_LABEL};
pub use policy::WorkloadPolicy;
pub use record::{BandCounts, WorkloadBand, WorkloadRecord, WorkloadReport, WorkloadSummary};
