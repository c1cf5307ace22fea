/*!
 * Process Input Validation
 * Reject malformed process sets before a run starts
 */

use super::types::{Process, ProcessRecord};
use crate::core::errors::ValidationError;
use crate::core::types::Ticks;
use std::collections::HashSet;

/// Validate a caller's process list and build a private working copy
///
/// Checks every rule a run relies on to terminate with sane metrics: positive
/// pid, positive burst, non-negative arrival, unique pid. Input order is kept.
///
/// The latest arrival plus the total burst bounds every tick the engine can
/// reach, so it must fit in `Ticks`.
pub fn validate_processes(processes: &[Process]) -> Result<Vec<ProcessRecord>, ValidationError> {
    let mut seen = HashSet::with_capacity(processes.len());
    let mut records = Vec::with_capacity(processes.len());
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Ticks = 0;

    for process in processes {
        validate_process(process)?;

        if !seen.insert(process.pid) {
            return Err(ValidationError::DuplicatePid(process.pid));
        }

        latest_arrival = latest_arrival.max(process.arrival_time as Ticks);
        total_burst = total_burst
            .checked_add(process.burst_time as Ticks)
            .filter(|burst| latest_arrival.checked_add(*burst).is_some())
            .ok_or(ValidationError::HorizonOverflow { pid: process.pid })?;

        records.push(ProcessRecord::new(
            process.pid,
            process.arrival_time as u64,
            process.burst_time as u64,
        ));
    }

    Ok(records)
}

/// Validate a single process in isolation
fn validate_process(process: &Process) -> Result<(), ValidationError> {
    if process.pid == 0 {
        return Err(ValidationError::InvalidPid(process.pid));
    }

    if process.burst_time <= 0 {
        return Err(ValidationError::NonPositiveBurst {
            pid: process.pid,
            burst: process.burst_time,
        });
    }

    if process.arrival_time < 0 {
        return Err(ValidationError::NegativeArrival {
            pid: process.pid,
            arrival: process.arrival_time,
        });
    }

    Ok(())
}
