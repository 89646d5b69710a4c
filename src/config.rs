//! Board configuration.
//!
//! Configuration arrives as JSON from the embedding application; every field
//! is optional and falls back to the defaults below.

use crate::workload::domain::{WorkloadDomainError, WorkloadPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix the board uses when encoding status ids as drop-zone ids.
pub const DEFAULT_DROP_TARGET_PREFIX: &str = "status-";

/// Settings for a board session.
///
/// # Examples
///
/// ```
/// use sprintboard::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.drop_target_prefix, "status-");
///
/// let parsed = BoardConfig::from_json_str(r#"{"workload":{"capacity_ratio":1.0}}"#)
///     .expect("valid configuration");
/// assert_eq!(parsed.workload.capacity_ratio, 1.0);
/// assert_eq!(parsed.workload.hours_per_story_point, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix marking drop-zone ids that encode a status id.
    pub drop_target_prefix: String,
    /// Capacity policy for workload reports.
    pub workload: WorkloadPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            drop_target_prefix: DEFAULT_DROP_TARGET_PREFIX.to_owned(),
            workload: WorkloadPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Creates a configuration that plans against full weekly availability.
    ///
    /// Useful for teams that track capacity net of meetings already.
    #[must_use]
    pub fn full_capacity() -> Self {
        Self {
            workload: WorkloadPolicy::full_capacity(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyDropTargetPrefix`] or [`ConfigError::Workload`]
    /// for out-of-range values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drop_target_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyDropTargetPrefix);
        }
        self.workload.validate()?;
        Ok(())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`BoardConfig`].
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The drop-target prefix was blank.
    #[error("drop target prefix must not be empty")]
    EmptyDropTargetPrefix,

    /// The workload policy was rejected.
    #[error(transparent)]
    Workload(#[from] WorkloadDomainError),
}
