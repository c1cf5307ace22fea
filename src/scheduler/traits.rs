/*!
 * Scheduler Traits
 * The dispatch capability the engine is parameterized by
 */

use crate::core::types::{Slot, Ticks};
use crate::process::ProcessRecord;

/// Dispatch policy driven by the engine loop
///
/// The engine owns admission, idle handling, completion and tracing; a policy
/// only owns its ready set and decides who runs next and for how long.
pub trait DispatchPolicy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// A process became eligible to run
    fn admit(&mut self, slot: Slot, processes: &[ProcessRecord]);

    /// Pick the process for the next slice
    ///
    /// `running` is the unfinished process whose slice just ended, if any. A
    /// policy either returns it again or hands it back to its ready set and
    /// returns another process. `None` means the processor idles.
    fn select(&mut self, running: Option<Slot>, processes: &[ProcessRecord]) -> Option<Slot>;

    /// Ticks the selected process runs before the next selection
    fn slice(&self, slot: Slot, processes: &[ProcessRecord]) -> Ticks;

    /// Processes waiting in the ready set (excluding the running one)
    fn ready_len(&self) -> usize;
}
