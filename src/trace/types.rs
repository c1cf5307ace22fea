/*!
 * Trace Types
 * Labels and intervals of the execution timeline
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupied the processor during an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pid", rename_all = "snake_case")]
pub enum TraceLabel {
    Process(Pid),
    Idle,
}

impl TraceLabel {
    #[inline]
    pub const fn pid(&self) -> Option<Pid> {
        match self {
            Self::Process(pid) => Some(*pid),
            Self::Idle => None,
        }
    }

    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for TraceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => write!(f, "P{}", pid),
            Self::Idle => write!(f, "Idle"),
        }
    }
}

/// Half-open span `[start, end)` of simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TraceInterval {
    pub label: TraceLabel,
    pub start: Ticks,
    pub end: Ticks,
}

impl TraceInterval {
    #[inline]
    pub const fn new(label: TraceLabel, start: Ticks, end: Ticks) -> Self {
        Self { label, start, end }
    }

    #[inline]
    pub const fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl fmt::Display for TraceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.label, self.start, self.end)
    }
}
