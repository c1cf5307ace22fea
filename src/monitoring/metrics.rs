/*!
 * Run Metrics
 * Aggregate statistics over a completed process set
 */

use crate::core::limits::{THROUGHPUT_PRECISION, TIME_PRECISION};
use crate::process::ProcessRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics of one run
///
/// Values are kept at full precision; rounding happens only in `rounded()`
/// and `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsRecord {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub cpu_utilization_percent: f64,
    /// Completed processes per tick
    pub throughput: f64,
}

impl MetricsRecord {
    /// Copy rounded to display precision
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            average_waiting_time: round_to(self.average_waiting_time, TIME_PRECISION),
            average_turnaround_time: round_to(self.average_turnaround_time, TIME_PRECISION),
            cpu_utilization_percent: round_to(self.cpu_utilization_percent, TIME_PRECISION),
            throughput: round_to(self.throughput, THROUGHPUT_PRECISION),
        }
    }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(
            f,
            "AWT: {:.tp$}, ATT: {:.tp$}, CPU Util (%): {:.tp$}, Throughput: {:.qp$}",
            r.average_waiting_time,
            r.average_turnaround_time,
            r.cpu_utilization_percent,
            r.throughput,
            tp = TIME_PRECISION as usize,
            qp = THROUGHPUT_PRECISION as usize,
        )
    }
}

/// Compute metrics over completed processes
///
/// Order independent. Records without a completion time are ignored; an empty
/// set yields all-zero metrics.
pub fn compute_metrics(processes: &[ProcessRecord]) -> MetricsRecord {
    let completed: Vec<&ProcessRecord> = processes.iter().filter(|p| p.is_completed()).collect();
    let n = completed.len();
    if n == 0 {
        return MetricsRecord::default();
    }

    // Per-process times fit in Ticks but their sum over many processes may not
    let total_waiting: f64 = completed
        .iter()
        .filter_map(|p| p.waiting_time)
        .map(|t| t as f64)
        .sum();
    let total_turnaround: f64 = completed
        .iter()
        .filter_map(|p| p.turnaround_time)
        .map(|t| t as f64)
        .sum();
    let total_burst: f64 = completed.iter().map(|p| p.burst_time as f64).sum();

    let first_arrival = completed.iter().map(|p| p.arrival_time).min().unwrap_or(0);
    let last_completion = completed
        .iter()
        .filter_map(|p| p.completion_time)
        .max()
        .unwrap_or(0);

    // Collapsed spans count as one tick
    let elapsed = last_completion.saturating_sub(first_arrival).max(1);

    let throughput = if last_completion > 0 {
        n as f64 / last_completion as f64
    } else {
        0.0
    };

    MetricsRecord {
        average_waiting_time: total_waiting / n as f64,
        average_turnaround_time: total_turnaround / n as f64,
        cpu_utilization_percent: 100.0 * total_burst / elapsed as f64,
        throughput,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
