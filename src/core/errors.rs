/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input validation errors with serialization support
///
/// Raised before a run starts; the engine itself never sees malformed input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Invalid pid {0}: process ids must be positive")]
    #[diagnostic(
        code(validation::invalid_pid),
        help("Assign every process a unique pid starting at 1.")
    )]
    InvalidPid(Pid),

    #[error("Process {pid} has non-positive burst time {burst}")]
    #[diagnostic(
        code(validation::non_positive_burst),
        help("Every process must require at least one tick of CPU time.")
    )]
    NonPositiveBurst { pid: Pid, burst: i64 },

    #[error("Process {pid} has negative arrival time {arrival}")]
    #[diagnostic(
        code(validation::negative_arrival),
        help("Simulated time starts at tick 0; arrivals must be >= 0.")
    )]
    NegativeArrival { pid: Pid, arrival: i64 },

    #[error("Duplicate pid {0}")]
    #[diagnostic(
        code(validation::duplicate_pid),
        help("Process ids must be unique within one scenario.")
    )]
    DuplicatePid(Pid),

    #[error("Process {pid} pushes the schedule horizon past the tick range")]
    #[diagnostic(
        code(validation::horizon_overflow),
        help("The latest arrival plus the sum of all bursts must fit in a 64-bit tick counter.")
    )]
    HorizonOverflow { pid: Pid },

    #[error("Invalid time quantum {0}")]
    #[diagnostic(
        code(validation::invalid_quantum),
        help("Round robin needs a quantum of at least one tick.")
    )]
    InvalidQuantum(i64),

    #[error("Time quantum '{0}' is not an integer")]
    #[diagnostic(
        code(validation::malformed_quantum),
        help("Pass the quantum as a whole number of ticks, e.g. 4.")
    )]
    MalformedQuantum(String),

    #[error("Invalid scheduling policy '{0}'")]
    #[diagnostic(
        code(validation::invalid_policy),
        help("Valid policies: srtf, rr, rr:<quantum>.")
    )]
    InvalidPolicy(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown scenario '{name}' (available: {available})")]
    #[diagnostic(
        code(sim::unknown_scenario),
        help("Pick one of the built-in scenarios or pass --file <path>.")
    )]
    UnknownScenario { name: String, available: String },

    #[error("Failed to read scenario file: {0}")]
    #[diagnostic(
        code(sim::scenario_io),
        help("Check that the scenario path exists and is readable.")
    )]
    ScenarioIo(#[from] std::io::Error),

    #[error("Malformed scenario file: {0}")]
    #[diagnostic(
        code(sim::scenario_format),
        help("Scenario files are JSON arrays of objects with pid, arrival_time and burst_time.")
    )]
    ScenarioFormat(#[from] serde_json::Error),
}
