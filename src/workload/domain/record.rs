//! Derived per-member workload records.

use super::WorkloadPolicy;
use crate::board::domain::MemberId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity band a member falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadBand {
    /// Above the overload threshold.
    Overloaded,
    /// Between the two thresholds.
    Balanced,
    /// At or below the underutilisation threshold.
    Underutilized,
}

impl WorkloadBand {
    /// Every band, most loaded first.
    pub const ALL: [Self; 3] = [Self::Overloaded, Self::Balanced, Self::Underutilized];

    /// Classifies a utilisation percentage.
    ///
    /// Every value, including `NaN`, lands in exactly one band.
    #[must_use]
    pub fn classify(percent: f64, policy: &WorkloadPolicy) -> Self {
        if percent > policy.overloaded_above_percent {
            Self::Overloaded
        } else if percent > policy.underutilized_max_percent {
            Self::Balanced
        } else {
            Self::Underutilized
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overloaded => "overloaded",
            Self::Balanced => "balanced",
            Self::Underutilized => "underutilized",
        }
    }
}

impl fmt::Display for WorkloadBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workload of one roster member. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadRecord {
    /// Member identifier.
    pub member_id: MemberId,
    /// Display label, with placeholder for unresolved names.
    pub display_name: String,
    /// Role label, with placeholder when unset or unresolved.
    pub role: String,
    /// Level label, with placeholder when unset or unresolved.
    pub level: String,
    /// Directly assigned, non-deleted, top-level tasks.
    pub task_count: usize,
    /// Sum of effort hours over those tasks.
    pub workload_hours: f64,
    /// Plannable hours.
    pub capacity_hours: f64,
    /// Workload as a percentage of capacity.
    pub workload_percent: f64,
    /// Capacity band.
    pub band: WorkloadBand,
}

/// Per-band member counts, for warning banners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    /// Overloaded members.
    pub overloaded: usize,
    /// Balanced members.
    pub balanced: usize,
    /// Underutilised members.
    pub underutilized: usize,
}

impl BandCounts {
    /// Returns the total number of members counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.overloaded + self.balanced + self.underutilized
    }
}

/// Team-wide totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkloadSummary {
    /// Summed workload hours.
    pub workload_hours: f64,
    /// Summed capacity hours.
    pub capacity_hours: f64,
    /// Team workload as a percentage of team capacity.
    pub workload_percent: f64,
    /// Top-level, non-deleted tasks not assigned to anyone on the roster.
    pub unallocated_tasks: usize,
}

/// Workload records for a whole roster, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkloadReport {
    records: Vec<WorkloadRecord>,
    summary: WorkloadSummary,
}

impl WorkloadReport {
    /// Assembles a report.
    #[must_use]
    pub const fn new(records: Vec<WorkloadRecord>, summary: WorkloadSummary) -> Self {
        Self { records, summary }
    }

    /// Returns every record in roster order.
    #[must_use]
    pub fn records(&self) -> &[WorkloadRecord] {
        &self.records
    }

    /// Returns the record for `member_id`.
    #[must_use]
    pub fn record(&self, member_id: &MemberId) -> Option<&WorkloadRecord> {
        self.records
            .iter()
            .find(|record| &record.member_id == member_id)
    }

    /// Returns the records in `band`, in roster order.
    pub fn in_band(&self, band: WorkloadBand) -> impl Iterator<Item = &WorkloadRecord> {
        self.records.iter().filter(move |record| record.band == band)
    }

    /// Returns overloaded members.
    pub fn overloaded(&self) -> impl Iterator<Item = &WorkloadRecord> {
        self.in_band(WorkloadBand::Overloaded)
    }

    /// Returns balanced members.
    pub fn balanced(&self) -> impl Iterator<Item = &WorkloadRecord> {
        self.in_band(WorkloadBand::Balanced)
    }

    /// Returns underutilised members.
    pub fn underutilized(&self) -> impl Iterator<Item = &WorkloadRecord> {
        self.in_band(WorkloadBand::Underutilized)
    }

    /// Counts members per band.
    #[must_use]
    pub fn band_counts(&self) -> BandCounts {
        self.records
            .iter()
            .fold(BandCounts::default(), |mut counts, record| {
                match record.band {
                    WorkloadBand::Overloaded => counts.overloaded += 1,
                    WorkloadBand::Balanced => counts.balanced += 1,
                    WorkloadBand::Underutilized => counts.underutilized += 1,
                }
                counts
            })
    }

    /// Returns the team totals.
    #[must_use]
    pub const fn summary(&self) -> &WorkloadSummary {
        &self.summary
    }

    /// Returns `true` when the roster was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
