/*!
 * Round Robin
 * FIFO time slicing with a fixed quantum
 */

use super::traits::DispatchPolicy;
use super::types::TimeQuantum;
use crate::core::types::{Slot, Ticks};
use crate::process::ProcessRecord;
use std::collections::VecDeque;
use tracing::debug;

/// Round robin ready queue
#[derive(Debug)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    ready: VecDeque<Slot>,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            ready: VecDeque::new(),
        }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl DispatchPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "rr"
    }

    fn admit(&mut self, slot: Slot, _processes: &[ProcessRecord]) {
        self.ready.push_back(slot);
    }

    fn select(&mut self, running: Option<Slot>, processes: &[ProcessRecord]) -> Option<Slot> {
        match running {
            // Sole ready process keeps the processor with a fresh quantum
            Some(current) if self.ready.is_empty() => Some(current),
            Some(current) => {
                // Queued behind anything admitted during its slice
                self.ready.push_back(current);
                debug!(
                    pid = processes[current].pid,
                    remaining = processes[current].remaining_time,
                    "quantum expired, requeued"
                );
                self.ready.pop_front()
            }
            None => self.ready.pop_front(),
        }
    }

    fn slice(&self, slot: Slot, processes: &[ProcessRecord]) -> Ticks {
        self.quantum.ticks().min(processes[slot].remaining_time)
    }

    fn ready_len(&self) -> usize {
        self.ready.len()
    }
}
