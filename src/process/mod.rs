/*!
 * Process Module
 * Process input, per-run records and validation
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{Process, ProcessRecord};
pub use validation::validate_processes;
