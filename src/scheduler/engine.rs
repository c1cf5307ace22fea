/*!
 * Scheduling Engine
 * Discrete-event loop shared by every dispatch policy
 */

use super::stats::SchedulerStats;
use super::traits::DispatchPolicy;
use crate::core::errors::ValidationError;
use crate::core::types::{Pid, Slot, Ticks};
use crate::process::{validate_processes, Process, ProcessRecord};
use crate::trace::{TraceInterval, TraceLabel, TraceRecorder};
use tracing::{debug, info, warn};

/// Result of driving an engine to completion
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Completed records sorted by pid
    pub processes: Vec<ProcessRecord>,
    /// Compacted timeline from tick 0 to the last completion
    pub trace: Vec<TraceInterval>,
    pub stats: SchedulerStats,
    pub final_tick: Ticks,
}

/// Single-processor simulation over a private arena of process records
///
/// Each iteration admits every arrival up to the current tick (ordered by
/// arrival, then pid), asks the policy for the next process and runs it for
/// the policy's slice. With nothing to run, time jumps straight to the next
/// arrival and the gap is traced as idle.
#[derive(Debug)]
pub struct Engine<P: DispatchPolicy> {
    processes: Vec<ProcessRecord>,
    arrival_order: Vec<Slot>,
    next_arrival: usize,
    policy: P,
    now: Ticks,
    running: Option<Slot>,
    last_executed: Option<Pid>,
    completed: usize,
    recorder: TraceRecorder,
    stats: SchedulerStats,
}

impl<P: DispatchPolicy> Engine<P> {
    /// Validate `processes` and build an engine over a copy of them
    pub fn new(processes: &[Process], policy: P) -> Result<Self, ValidationError> {
        let processes = validate_processes(processes)?;

        let mut arrival_order: Vec<Slot> = (0..processes.len()).collect();
        arrival_order.sort_by_key(|&slot| (processes[slot].arrival_time, processes[slot].pid));

        Ok(Self {
            processes,
            arrival_order,
            next_arrival: 0,
            policy,
            now: 0,
            running: None,
            last_executed: None,
            completed: 0,
            recorder: TraceRecorder::new(),
            stats: SchedulerStats::default(),
        })
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    #[inline]
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Working records in input order
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// Process that holds the processor between slices, if unfinished
    pub fn running(&self) -> Option<Pid> {
        self.running.map(|slot| self.processes[slot].pid)
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Advance by one dispatch decision or one idle jump
    ///
    /// Returns the raw span that was simulated, or `None` once every process
    /// has completed.
    pub fn step(&mut self) -> Option<TraceInterval> {
        if self.is_finished() {
            return None;
        }

        self.admit_arrivals();

        let previous = self.running;
        let Some(slot) = self.policy.select(previous, &self.processes) else {
            return self.idle_until_next_arrival();
        };

        if previous.is_some_and(|prev| prev != slot) {
            self.stats.inc_preemptions();
        }

        let ticks = self.policy.slice(slot, &self.processes);
        let start = self.now;
        let record = &mut self.processes[slot];
        let pid = record.pid;
        let finished = record.execute(start, ticks);
        self.now += ticks;

        self.stats.record_dispatch(self.last_executed, pid, ticks);
        self.last_executed = Some(pid);

        if finished {
            self.processes[slot].complete(self.now);
            self.completed += 1;
            self.running = None;
            debug!(
                pid,
                completion = self.now,
                remaining_processes = self.processes.len() - self.completed,
                "process completed"
            );
        } else {
            self.running = Some(slot);
        }

        self.recorder.record(TraceLabel::Process(pid), start, self.now)
    }

    /// Step until every process has completed
    pub fn run(mut self) -> SimulationOutcome {
        info!(
            policy = self.policy.name(),
            processes = self.processes.len(),
            "simulation started"
        );

        while !self.is_finished() {
            if self.step().is_none() {
                warn!(
                    now = self.now,
                    completed = self.completed,
                    "engine made no progress, stopping"
                );
                break;
            }
        }

        info!(
            policy = self.policy.name(),
            final_tick = self.now,
            dispatches = self.stats.dispatches,
            preemptions = self.stats.preemptions,
            "simulation finished"
        );

        self.into_outcome()
    }

    fn into_outcome(self) -> SimulationOutcome {
        let mut processes = self.processes;
        processes.sort_by_key(|p| p.pid);

        SimulationOutcome {
            processes,
            trace: self.recorder.into_compacted(),
            stats: self.stats,
            final_tick: self.now,
        }
    }

    fn admit_arrivals(&mut self) {
        while let Some(&slot) = self.arrival_order.get(self.next_arrival) {
            if self.processes[slot].arrival_time > self.now {
                break;
            }
            self.policy.admit(slot, &self.processes);
            self.next_arrival += 1;
        }
    }

    fn idle_until_next_arrival(&mut self) -> Option<TraceInterval> {
        debug_assert!(self.running.is_none(), "policy idled with a running process");

        let slot = *self.arrival_order.get(self.next_arrival)?;
        let start = self.now;
        let until = self.processes[slot].arrival_time;

        self.now = until;
        self.stats.record_idle(until - start);
        debug!(from = start, until, "processor idle");

        self.recorder.record(TraceLabel::Idle, start, until)
    }
}
