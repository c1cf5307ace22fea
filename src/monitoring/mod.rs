/*!
 * Monitoring
 * Run metrics and structured tracing
 */

mod metrics;
mod tracer;

pub use metrics::{compute_metrics, MetricsRecord};
pub use tracer::init_tracing;
