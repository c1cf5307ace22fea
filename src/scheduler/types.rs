/*!
 * Scheduler Types
 * Policy selection and quantum configuration
 */

use crate::core::errors::ValidationError;
use crate::core::limits::DEFAULT_TIME_QUANTUM;
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Round robin time quantum, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create a new time quantum
    pub fn new(ticks: i64) -> Result<Self, ValidationError> {
        if ticks < 1 {
            return Err(ValidationError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    /// Get the quantum in ticks
    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_TIME_QUANTUM)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimeQuantum {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ticks = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::MalformedQuantum(s.to_string()))?;
        Self::new(ticks)
    }
}

impl Serialize for TimeQuantum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Dispatch policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingPolicy {
    /// Shortest remaining time first, re-evaluated every tick
    Srtf,
    /// FIFO time slicing with a fixed quantum
    RoundRobin { quantum: TimeQuantum },
}

impl SchedulingPolicy {
    /// Round robin with the given quantum
    pub fn round_robin(quantum: TimeQuantum) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Short machine-readable name
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Srtf => "srtf",
            Self::RoundRobin { .. } => "rr",
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Srtf => write!(f, "SRTF"),
            Self::RoundRobin { quantum } => write!(f, "RR (Q={})", quantum),
        }
    }
}

impl FromStr for SchedulingPolicy {
    type Err = ValidationError;

    /// Accepts `srtf`, `rr` (default quantum) and `rr:<quantum>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let (name, quantum) = match lower.split_once(':') {
            Some((name, quantum)) => (name, Some(quantum)),
            None => (lower.as_str(), None),
        };

        match (name, quantum) {
            ("srtf" | "shortest_remaining" | "sjf_preemptive", None) => Ok(Self::Srtf),
            ("rr" | "round_robin" | "roundrobin", None) => Ok(Self::RoundRobin {
                quantum: TimeQuantum::default(),
            }),
            ("rr" | "round_robin" | "roundrobin", Some(q)) => Ok(Self::RoundRobin {
                quantum: q.parse()?,
            }),
            _ => Err(ValidationError::InvalidPolicy(s.to_string())),
        }
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Srtf => serializer.serialize_str(self.as_str()),
            Self::RoundRobin { quantum } => {
                serializer.serialize_str(&format!("{}:{}", self.as_str(), quantum))
            }
        }
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
