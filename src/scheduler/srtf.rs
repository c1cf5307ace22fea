/*!
 * Shortest Remaining Time First
 * Preemptive policy re-evaluated at every tick
 */

use super::entry::SrtfEntry;
use super::traits::DispatchPolicy;
use crate::core::limits::SRTF_SLICE;
use crate::core::types::{Slot, Ticks};
use crate::process::ProcessRecord;
use std::collections::BinaryHeap;
use tracing::debug;

/// SRTF ready set (min-heap by remaining time, arrival, pid)
#[derive(Debug, Default)]
pub struct Srtf {
    ready: BinaryHeap<SrtfEntry>,
}

impl Srtf {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DispatchPolicy for Srtf {
    fn name(&self) -> &'static str {
        "srtf"
    }

    fn admit(&mut self, slot: Slot, processes: &[ProcessRecord]) {
        self.ready.push(SrtfEntry::new(slot, &processes[slot]));
    }

    fn select(&mut self, running: Option<Slot>, processes: &[ProcessRecord]) -> Option<Slot> {
        let Some(current) = running else {
            return self.ready.pop().map(|e| e.slot);
        };

        let current_entry = SrtfEntry::new(current, &processes[current]);
        match self.ready.peek() {
            // Greater in heap order means a smaller key
            Some(best) if *best > current_entry => {
                let best = *best;
                self.ready.pop();
                self.ready.push(current_entry);
                debug!(
                    preempted = current_entry.pid,
                    remaining = current_entry.remaining,
                    by = best.pid,
                    by_remaining = best.remaining,
                    "srtf preemption"
                );
                Some(best.slot)
            }
            _ => Some(current),
        }
    }

    fn slice(&self, _slot: Slot, _processes: &[ProcessRecord]) -> Ticks {
        SRTF_SLICE
    }

    fn ready_len(&self) -> usize {
        self.ready.len()
    }
}
