/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults and display precisions.
 */

use super::types::Ticks;

// =============================================================================
// SCHEDULING DEFAULTS
// =============================================================================

/// Default round robin time quantum (4 ticks)
/// Used when neither the environment nor the CLI supplies one
pub const DEFAULT_TIME_QUANTUM: Ticks = 4;

/// Granularity of SRTF re-evaluation (1 tick)
/// SRTF reconsiders the shortest job at every tick boundary
pub const SRTF_SLICE: Ticks = 1;

// =============================================================================
// REPORTING PRECISION
// =============================================================================

/// Decimal places for averaged times and CPU utilization
pub const TIME_PRECISION: i32 = 2;

/// Decimal places for throughput (processes per tick)
pub const THROUGHPUT_PRECISION: i32 = 4;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides the round robin quantum
pub const ENV_RR_QUANTUM: &str = "SIM_RR_QUANTUM";

/// Enables JSON report output
pub const ENV_OUTPUT_JSON: &str = "SIM_OUTPUT_JSON";

/// Enables JSON log output
pub const ENV_TRACE_JSON: &str = "SIM_TRACE_JSON";
