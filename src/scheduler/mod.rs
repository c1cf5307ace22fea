/*!
 * Scheduler Module
 * Simulation engine, dispatch policies and run reports
 */

mod engine;
mod entry;
mod round_robin;
mod srtf;
mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use engine::{Engine, SimulationOutcome};
pub use round_robin::RoundRobin;
pub use srtf::Srtf;
pub use stats::SchedulerStats;
pub use traits::DispatchPolicy;
pub use types::{SchedulingPolicy, TimeQuantum};

use crate::core::types::SimResult;
use crate::monitoring::{compute_metrics, MetricsRecord};
use crate::process::{Process, ProcessRecord};
use crate::trace::TraceInterval;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything one run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub policy: SchedulingPolicy,
    pub metrics: MetricsRecord,
    /// Completed records sorted by pid
    pub processes: Vec<ProcessRecord>,
    /// Compacted Gantt chart
    pub trace: Vec<TraceInterval>,
    pub stats: SchedulerStats,
}

/// Run `processes` under `policy` and collect the report
///
/// The caller's slice is copied, so the same list can be replayed under any
/// number of policies.
#[instrument(skip_all, fields(policy = %policy, processes = processes.len()))]
pub fn simulate(processes: &[Process], policy: SchedulingPolicy) -> SimResult<SimulationReport> {
    let outcome = match policy {
        SchedulingPolicy::Srtf => Engine::new(processes, Srtf::new())?.run(),
        SchedulingPolicy::RoundRobin { quantum } => {
            Engine::new(processes, RoundRobin::new(quantum))?.run()
        }
    };

    let metrics = compute_metrics(&outcome.processes);
    info!(
        awt = metrics.average_waiting_time,
        att = metrics.average_turnaround_time,
        utilization = metrics.cpu_utilization_percent,
        "metrics computed"
    );

    Ok(SimulationReport {
        policy,
        metrics,
        processes: outcome.processes,
        trace: outcome.trace,
        stats: outcome.stats,
    })
}
