//! Capacity policy for workload classification.

use super::WorkloadDomainError;
use serde::{Deserialize, Serialize};

/// Constants turning estimates and availability into workload bands.
///
/// # Examples
///
/// ```
/// use sprintboard::workload::domain::WorkloadPolicy;
///
/// let policy = WorkloadPolicy::default();
/// assert_eq!(policy.capacity_hours(Some(40.0)), 32.0);
/// assert_eq!(policy.capacity_hours(None), 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadPolicy {
    /// Hours one story point stands for.
    pub hours_per_story_point: f64,
    /// Share of weekly hours treated as plannable capacity.
    pub capacity_ratio: f64,
    /// Weekly hours assumed when a member declares none.
    pub default_weekly_hours: f64,
    /// Highest percentage still classified as underutilised.
    pub underutilized_max_percent: f64,
    /// Percentage above which a member is overloaded.
    pub overloaded_above_percent: f64,
    /// Percentage reported for work assigned against zero capacity.
    pub overload_sentinel_percent: f64,
}

impl Default for WorkloadPolicy {
    fn default() -> Self {
        Self {
            hours_per_story_point: 8.0,
            capacity_ratio: 0.8,
            default_weekly_hours: 40.0,
            underutilized_max_percent: 30.0,
            overloaded_above_percent: 100.0,
            overload_sentinel_percent: 999.0,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "capacity and utilisation are fractional hour quantities"
)]
impl WorkloadPolicy {
    /// Creates a policy that plans against the full weekly availability.
    #[must_use]
    pub fn full_capacity() -> Self {
        Self {
            capacity_ratio: 1.0,
            ..Self::default()
        }
    }

    /// Checks that ratios are positive and thresholds ordered.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::InvalidPolicy`] naming the first
    /// offending value.
    pub fn validate(&self) -> Result<(), WorkloadDomainError> {
        let negative = |value: f64| !value.is_finite() || value < 0.0;
        if negative(self.hours_per_story_point) {
            return Err(WorkloadDomainError::InvalidPolicy("hours_per_story_point"));
        }
        if !self.capacity_ratio.is_finite() || self.capacity_ratio <= 0.0 {
            return Err(WorkloadDomainError::InvalidPolicy("capacity_ratio"));
        }
        if negative(self.default_weekly_hours) {
            return Err(WorkloadDomainError::InvalidPolicy("default_weekly_hours"));
        }
        if negative(self.overloaded_above_percent) {
            return Err(WorkloadDomainError::InvalidPolicy("overloaded_above_percent"));
        }
        if negative(self.underutilized_max_percent)
            || self.underutilized_max_percent > self.overloaded_above_percent
        {
            return Err(WorkloadDomainError::InvalidPolicy(
                "underutilized_max_percent",
            ));
        }
        if negative(self.overload_sentinel_percent)
            || self.overload_sentinel_percent <= self.overloaded_above_percent
        {
            return Err(WorkloadDomainError::InvalidPolicy(
                "overload_sentinel_percent",
            ));
        }
        Ok(())
    }

    /// Returns plannable hours for a member declaring `weekly_hours`.
    #[must_use]
    pub fn capacity_hours(&self, weekly_hours: Option<f64>) -> f64 {
        weekly_hours.unwrap_or(self.default_weekly_hours) * self.capacity_ratio
    }

    /// Returns `workload_hours` as a percentage of `capacity_hours`.
    ///
    /// Zero capacity yields `0` for zero workload and the overload sentinel
    /// otherwise.
    #[must_use]
    pub fn utilisation_percent(&self, workload_hours: f64, capacity_hours: f64) -> f64 {
        if capacity_hours > 0.0 {
            workload_hours / capacity_hours * 100.0
        } else if workload_hours > 0.0 {
            self.overload_sentinel_percent
        } else {
            0.0
        }
    }
}
