/*!
 * Scheduling Simulator Library
 * Deterministic single-processor CPU scheduling simulation
 *
 * A run takes a process list and a dispatch policy (SRTF or Round Robin) and
 * returns completed process records, a compacted Gantt chart and aggregate
 * metrics. Rendering is left to callers.
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scenarios;
pub mod scheduler;
pub mod trace;

// Re-exports
pub use crate::core::{SimConfig, SimError, SimResult, ValidationError};
pub use monitoring::{compute_metrics, init_tracing, MetricsRecord};
pub use process::{validate_processes, Process, ProcessRecord};
pub use scheduler::{
    simulate, DispatchPolicy, Engine, RoundRobin, SchedulerStats, SchedulingPolicy,
    SimulationOutcome, SimulationReport, Srtf, TimeQuantum,
};
pub use trace::{TraceInterval, TraceLabel, TraceRecorder};
