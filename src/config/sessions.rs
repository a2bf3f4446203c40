//! Wizard retention settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// How long the in-memory store keeps wizards nobody touches.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle lifetime of an unfinished wizard, in seconds
    pub idle_ttl_secs: u64,

    /// Grace period a completed wizard stays readable, in seconds
    pub completed_ttl_secs: u64,

    /// Interval of the background eviction sweep, in seconds
    pub sweep_interval_secs: u64,
}

impl SessionConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn completed_ttl(&self) -> Duration {
        Duration::from_secs(self.completed_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idle_ttl_secs == 0 || self.completed_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: 30 * 60,
            completed_ttl_secs: 5 * 60,
            sweep_interval_secs: 60,
        }
    }
}
