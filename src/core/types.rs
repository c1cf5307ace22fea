/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time in whole ticks since the start of a run
pub type Ticks = u64;

/// Index of a process record inside an engine's working arena
pub type Slot = usize;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
