//! Domain model for the task board.
//!
//! Tasks, workflow statuses and the updates written back to the task store.
//! Infrastructure concerns stay outside this boundary.

mod assignment;
mod error;
mod ids;
mod status;
mod task;
mod update;

pub use assignment::{Assignment, Priority};
pub use error::{BoardDomainError, ParsePriorityError, ParseStatusTypeError};
pub(crate) use ids::text_identifier;
pub use ids::{MemberId, ProjectId, SpaceId, SprintId, StatusId, TaskId, UserId, WorkspaceId};
pub use status::{Status, StatusType, validated_status_name};
pub use task::{Task, TaskData, TaskEstimate, TaskSchedule, TaskStatus, validated_task_name};
pub use update::{StatusPlacement, TaskUpdate};
