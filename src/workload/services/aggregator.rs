//! Per-member workload aggregation.

use crate::board::domain::{MemberId, Task};
use crate::workload::domain::{
    RosterMember, WorkloadBand, WorkloadPolicy, WorkloadRecord, WorkloadReport, WorkloadSummary,
};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    tasks: usize,
    hours: f64,
}

/// Computes a workload record for every roster member, in roster order.
///
/// Only non-deleted, top-level tasks assigned to a roster member count.
/// Tasks assigned to a user, or to a member missing from the roster, are
/// reported as unallocated in the summary.
///
/// # Examples
///
/// ```
/// use sprintboard::workload::domain::WorkloadPolicy;
/// use sprintboard::workload::services::aggregate;
///
/// let report = aggregate(&[], &[], &WorkloadPolicy::default());
/// assert!(report.is_empty());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "workload hours are summed as fractional quantities"
)]
pub fn aggregate(
    tasks: &[Task],
    roster: &[RosterMember],
    policy: &WorkloadPolicy,
) -> WorkloadReport {
    let members: HashSet<&MemberId> = roster.iter().map(RosterMember::id).collect();
    let mut tallies: HashMap<&MemberId, Tally> = HashMap::new();
    let mut unallocated_tasks = 0_usize;

    for task in tasks
        .iter()
        .filter(|task| !task.is_deleted() && !task.is_subtask())
    {
        match task
            .assignment()
            .roster_member()
            .filter(|member_id| members.contains(member_id))
        {
            Some(member_id) => {
                let tally = tallies.entry(member_id).or_default();
                tally.tasks += 1;
                tally.hours += task.estimate().effort_hours(policy.hours_per_story_point);
            }
            None => unallocated_tasks += 1,
        }
    }

    let records: Vec<WorkloadRecord> = roster
        .iter()
        .map(|member| {
            let tally = tallies.get(member.id()).copied().unwrap_or_default();
            let capacity_hours = policy.capacity_hours(member.weekly_hours());
            let workload_percent = policy.utilisation_percent(tally.hours, capacity_hours);
            WorkloadRecord {
                member_id: member.id().clone(),
                display_name: member.display_label().to_owned(),
                role: member.role_label().to_owned(),
                level: member.level_label().to_owned(),
                task_count: tally.tasks,
                workload_hours: tally.hours,
                capacity_hours,
                workload_percent,
                band: WorkloadBand::classify(workload_percent, policy),
            }
        })
        .collect();

    let workload_hours: f64 = records.iter().map(|record| record.workload_hours).sum();
    let capacity_hours: f64 = records.iter().map(|record| record.capacity_hours).sum();
    let summary = WorkloadSummary {
        workload_hours,
        capacity_hours,
        workload_percent: policy.utilisation_percent(workload_hours, capacity_hours),
        unallocated_tasks,
    };

    tracing::debug!(
        members = records.len(),
        unallocated_tasks,
        "workload aggregated"
    );
    WorkloadReport::new(records, summary)
}
