/*!
 * Scheduler Statistics
 * Dispatch counters collected during a run
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// Counters describing how a run used the processor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    /// Executed slices
    pub dispatches: u64,
    /// Slices whose process differs from the previously executed one
    pub context_switches: u64,
    /// Unfinished running process replaced by another
    pub preemptions: u64,
    pub busy_ticks: Ticks,
    pub idle_ticks: Ticks,
}

impl SchedulerStats {
    /// Account for one executed slice
    pub(super) fn record_dispatch(&mut self, previous: Option<Pid>, pid: Pid, ticks: Ticks) {
        self.dispatches += 1;
        self.busy_ticks += ticks;
        if previous.is_some_and(|prev| prev != pid) {
            self.context_switches += 1;
        }
    }

    #[inline]
    pub(super) fn inc_preemptions(&mut self) {
        self.preemptions += 1;
    }

    #[inline]
    pub(super) fn record_idle(&mut self, ticks: Ticks) {
        self.idle_ticks += ticks;
    }

    /// Total simulated ticks
    pub fn elapsed(&self) -> Ticks {
        self.busy_ticks + self.idle_ticks
    }
}
