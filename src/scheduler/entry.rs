/*!
 * Scheduler Entry Types
 * Ready-set entries ordered for shortest-remaining-time selection
 */

use crate::core::types::{Pid, Slot, Ticks};
use crate::process::ProcessRecord;
use std::cmp::Ordering;

/// Snapshot of a waiting process keyed for SRTF
///
/// A waiting process does not run, so its remaining time cannot change while
/// the entry sits in the heap.
#[derive(Debug, Clone, Copy)]
pub(super) struct SrtfEntry {
    pub slot: Slot,
    pub remaining: Ticks,
    pub arrival: Ticks,
    pub pid: Pid,
}

impl SrtfEntry {
    pub fn new(slot: Slot, record: &ProcessRecord) -> Self {
        Self {
            slot,
            remaining: record.remaining_time,
            arrival: record.arrival_time,
            pid: record.pid,
        }
    }

    /// Selection key: smallest remaining, then earliest arrival, then lowest pid
    #[inline]
    pub fn key(&self) -> (Ticks, Ticks, Pid) {
        (self.remaining, self.arrival, self.pid)
    }
}

impl PartialEq for SrtfEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SrtfEntry {}

impl Ord for SrtfEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the smallest key must compare greatest
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for SrtfEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
