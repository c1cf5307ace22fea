/*!
 * Trace Recorder
 * Raw execution spans and their compaction into a Gantt chart
 */

mod types;

pub use types::{TraceInterval, TraceLabel};

use crate::core::types::Ticks;
use tracing::trace;

/// Accumulates raw spans in the order the engine produces them
#[derive(Debug, Default, Clone)]
pub struct TraceRecorder {
    spans: Vec<TraceInterval>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one executed slice or idle jump, empty spans are dropped
    pub fn record(&mut self, label: TraceLabel, start: Ticks, end: Ticks) -> Option<TraceInterval> {
        debug_assert!(start <= end, "span {} ends before it starts", label);
        if start >= end {
            return None;
        }

        debug_assert!(
            self.spans.last().map_or(true, |last| last.end <= start),
            "span {} at {} overlaps previous span",
            label,
            start
        );

        let span = TraceInterval::new(label, start, end);
        trace!(label = %label, start, end, "span recorded");
        self.spans.push(span);
        Some(span)
    }

    /// Raw spans recorded so far
    pub fn spans(&self) -> &[TraceInterval] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Consume the recorder and return the compacted timeline
    pub fn into_compacted(self) -> Vec<TraceInterval> {
        compact(&self.spans)
    }
}

/// Merge contiguous spans that carry the same label
///
/// A span only extends its predecessor when the labels match and the new
/// span starts exactly where the previous one ended.
pub fn compact(spans: &[TraceInterval]) -> Vec<TraceInterval> {
    let mut merged: Vec<TraceInterval> = Vec::with_capacity(spans.len());

    for span in spans {
        match merged.last_mut() {
            Some(last) if last.label == span.label && last.end == span.start => {
                last.end = span.end;
            }
            _ => merged.push(*span),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(pid: u32, start: Ticks, end: Ticks) -> TraceInterval {
        TraceInterval::new(TraceLabel::Process(pid), start, end)
    }

    #[test]
    fn test_compact_merges_contiguous_same_label() {
        let spans = vec![p(1, 0, 1), p(2, 1, 2), p(2, 2, 3), p(2, 3, 5), p(1, 5, 6)];
        assert_eq!(compact(&spans), vec![p(1, 0, 1), p(2, 1, 5), p(1, 5, 6)]);
    }

    #[test]
    fn test_compact_keeps_gapped_same_label_apart() {
        let spans = vec![p(1, 0, 2), p(1, 4, 6)];
        assert_eq!(compact(&spans), spans);
    }

    #[test]
    fn test_compact_idle_runs() {
        let idle = |s, e| TraceInterval::new(TraceLabel::Idle, s, e);
        let spans = vec![idle(0, 1), idle(1, 3), p(1, 3, 4)];
        assert_eq!(compact(&spans), vec![idle(0, 3), p(1, 3, 4)]);
    }

    #[test]
    fn test_recorder_drops_empty_spans() {
        let mut recorder = TraceRecorder::new();
        assert!(recorder.record(TraceLabel::Idle, 2, 2).is_none());
        assert!(recorder.record(TraceLabel::Process(1), 2, 4).is_some());
        assert!(recorder.record(TraceLabel::Process(1), 4, 6).is_some());
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.spans().to_vec(), vec![p(1, 2, 4), p(1, 4, 6)]);
        assert_eq!(recorder.into_compacted(), vec![p(1, 2, 6)]);
    }

    #[test]
    fn test_empty_trace() {
        assert!(compact(&[]).is_empty());
        assert!(TraceRecorder::new().is_empty());
    }

    #[test]
    fn test_labels_render() {
        assert_eq!(p(3, 0, 2).to_string(), "(P3, 0, 2)");
        assert_eq!(TraceLabel::Idle.to_string(), "Idle");
        assert_eq!(TraceLabel::Process(9).pid(), Some(9));
        assert!(TraceLabel::Idle.is_idle());
    }
}
