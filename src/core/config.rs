/*!
 * Runtime Configuration
 * Environment-driven settings with compile-time defaults
 */

use super::errors::ValidationError;
use super::limits::{ENV_OUTPUT_JSON, ENV_RR_QUANTUM};
use crate::scheduler::TimeQuantum;
use serde::{Deserialize, Serialize};

/// Settings shared by every run of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SimConfig {
    pub rr_quantum: TimeQuantum,
    pub json_output: bool,
}

impl SimConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_RR_QUANTUM) {
            config.rr_quantum = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_OUTPUT_JSON) {
            config.json_output = matches!(raw.trim(), "1" | "true");
        }

        Ok(config)
    }
}
