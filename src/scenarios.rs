/*!
 * Scenarios
 * Built-in process sets and JSON scenario files
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::process::Process;
use std::path::Path;
use tracing::info;

const SCENARIOS: &[(&str, &[Process])] = &[
    ("small", SMALL),
    ("large", LARGE),
    ("edge1", EDGE_ALL_AT_ZERO),
    ("edge2", EDGE_MIXED),
];

/// Four overlapping processes
const SMALL: &[Process] = &[
    Process::new(1, 0, 8),
    Process::new(2, 1, 4),
    Process::new(3, 2, 9),
    Process::new(4, 3, 5),
];

/// Ten equal bursts with staggered arrivals
const LARGE: &[Process] = &[
    Process::new(1, 0, 5),
    Process::new(2, 2, 5),
    Process::new(3, 4, 5),
    Process::new(4, 5, 5),
    Process::new(5, 6, 5),
    Process::new(6, 8, 5),
    Process::new(7, 9, 5),
    Process::new(8, 11, 5),
    Process::new(9, 12, 5),
    Process::new(10, 15, 5),
];

/// Everything arrives at tick 0 with varying bursts
const EDGE_ALL_AT_ZERO: &[Process] = &[
    Process::new(1, 0, 10),
    Process::new(2, 0, 1),
    Process::new(3, 0, 2),
    Process::new(4, 0, 1),
    Process::new(5, 0, 5),
];

/// Long and short bursts, with a late arrival after an idle gap
const EDGE_MIXED: &[Process] = &[
    Process::new(1, 0, 20),
    Process::new(2, 1, 2),
    Process::new(3, 2, 3),
    Process::new(4, 3, 1),
    Process::new(5, 30, 2),
];

/// Names of the built-in scenarios in display order
pub fn names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in scenario by name
pub fn builtin(name: &str) -> Option<Vec<Process>> {
    SCENARIOS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, processes)| processes.to_vec())
}

/// Look up a built-in scenario, failing with the list of valid names
pub fn require(name: &str) -> SimResult<Vec<Process>> {
    builtin(name).ok_or_else(|| SimError::UnknownScenario {
        name: name.to_string(),
        available: names().join(", "),
    })
}

/// Load a scenario from a JSON array of processes
///
/// Only the file format is checked here; process rules are enforced when the
/// scenario is simulated.
pub fn load_file(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let processes: Vec<Process> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), processes = processes.len(), "scenario file loaded");
    Ok(processes)
}
