/*!
 * Process Types
 * Caller-facing process input and the engine's per-run process record
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt;

/// Process as supplied by a caller
///
/// Times are signed so malformed input survives parsing and can be rejected
/// by validation instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: i64,
    pub burst_time: i64,
}

impl Process {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}(AT:{}, BT:{})",
            self.pid, self.arrival_time, self.burst_time
        )
    }
}

/// Simulation state for one process during one run
///
/// `start_time` and `completion_time` are written exactly once; turnaround
/// and waiting time are derived at completion.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
    pub waiting_time: Option<Ticks>,
}

impl ProcessRecord {
    /// Fresh record with the full burst still outstanding
    #[must_use]
    pub(crate) fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Run for `ticks` starting at `now`, returns true when the burst is done
    pub(crate) fn execute(&mut self, now: Ticks, ticks: Ticks) -> bool {
        debug_assert!(
            ticks <= self.remaining_time,
            "P{} asked to run {} ticks with only {} remaining",
            self.pid,
            ticks,
            self.remaining_time
        );

        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        self.remaining_time -= ticks;
        self.remaining_time == 0
    }

    /// Fix completion time and derive turnaround/waiting time
    pub(crate) fn complete(&mut self, at: Ticks) {
        debug_assert!(!self.is_completed(), "P{} completed twice", self.pid);
        debug_assert_eq!(self.remaining_time, 0);

        let turnaround = at - self.arrival_time;
        debug_assert!(
            turnaround >= self.burst_time,
            "P{} turnaround {} shorter than burst {}",
            self.pid,
            turnaround,
            self.burst_time
        );

        self.completion_time = Some(at);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}
