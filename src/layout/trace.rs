//! Diagnostic trace of row transitions
//!
//! The engine reports what it does through a [`TraceSink`] so that callers
//! choose where the trace goes: nowhere, stderr, or an in-memory buffer.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use super::engine::RowOutcome;
use super::metrics::RowMetrics;
use super::types::Row;

/// One step of a layout run
#[derive(Debug)]
pub enum TraceEvent<'a> {
    /// Partitioning of row `number` (1-based) begins
    RowStart { number: usize },
    /// Candidate row straight out of the partitioner
    Candidate { row: &'a Row },
    Metrics { metrics: &'a RowMetrics },
    /// Row accepted with the given outcome
    Decision { outcome: RowOutcome, row: &'a Row },
    /// Row has flexibility, but only in the direction badness argues against
    Contrary { metrics: &'a RowMetrics },
    /// No branch applies; the row is emitted unchanged
    Unresolved { row: &'a Row },
    /// Rows as they stand at some point in the run
    Rows { rows: &'a [Row] },
    Finished { elapsed: Duration },
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::RowStart { number } => write!(f, "ROW = {}", number),
            TraceEvent::Candidate { row } => write!(f, "{}", row),
            TraceEvent::Metrics { metrics } => write!(
                f,
                "shrink: {} | stretch: {} | shrink width: {} | stretch width: {} | badness: {}",
                metrics.shrink,
                metrics.stretch,
                metrics.shrink_width,
                metrics.stretch_width,
                metrics.badness
            ),
            TraceEvent::Decision { outcome, row } => write!(f, "{} => {}", outcome, row),
            TraceEvent::Contrary { metrics } => write!(
                f,
                "badness {} contradicts available flexibility (shrink width {}, stretch width {})",
                metrics.badness, metrics.shrink_width, metrics.stretch_width
            ),
            TraceEvent::Unresolved { row } => write!(f, "unresolved row emitted as-is: {}", row),
            TraceEvent::Rows { rows } => {
                write!(f, "----------------")?;
                for row in rows.iter() {
                    write!(f, "\n{}", row)?;
                }
                write!(f, "\n----------------")
            }
            TraceEvent::Finished { elapsed } => write!(
                f,
                "layout finished in {:.3} ms",
                elapsed.as_secs_f64() * 1000.0
            ),
        }
    }
}

/// Destination for trace events
pub trait TraceSink {
    /// Whether events should be produced at all
    fn enabled(&self) -> bool {
        true
    }

    fn record(&self, event: &TraceEvent<'_>);
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn record(&self, event: &TraceEvent<'_>) {
        (**self).record(event)
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&self, _event: &TraceEvent<'_>) {}
}

/// Prints `TRACE:` lines to stderr when enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrTrace {
    pub enabled: bool,
}

impl StderrTrace {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl TraceSink for StderrTrace {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn record(&self, event: &TraceEvent<'_>) {
        if self.enabled {
            for line in event.to_string().lines() {
                eprintln!("TRACE: {}", line);
            }
        }
    }
}

/// Keeps rendered events in memory
#[derive(Debug, Default)]
pub struct RecordingTrace {
    lines: Mutex<Vec<String>>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered events recorded so far, one entry per event
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl TraceSink for RecordingTrace {
    fn record(&self, event: &TraceEvent<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(event.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::LayoutConfig;
    use crate::layout::types::{FlexBox, LayoutItem};

    #[test]
    fn test_recording_trace_collects_lines() {
        let trace = RecordingTrace::new();
        trace.record(&TraceEvent::RowStart { number: 1 });
        trace.record(&TraceEvent::RowStart { number: 2 });
        assert_eq!(trace.lines(), vec!["ROW = 1", "ROW = 2"]);
        trace.clear();
        assert!(trace.lines().is_empty());
    }

    #[test]
    fn test_rows_event_rendering() {
        let config = LayoutConfig::default();
        let row = Row::new(vec![
            FlexBox::new(0, LayoutItem::new(4.0, 3.0), &config),
            FlexBox::new(1, LayoutItem::new(3.0, 4.0), &config),
        ]);
        let rows = [row];
        insta::assert_snapshot!(TraceEvent::Rows { rows: &rows }.to_string(), @r"
        ----------------
        4(-1, +1) | 2(-1, 0) | [6]
        ----------------
        ");
    }

    #[test]
    fn test_no_trace_disabled() {
        assert!(!NoTrace.enabled());
        assert!(!StderrTrace::default().enabled());
        assert!(StderrTrace::new(true).enabled());
        assert!(RecordingTrace::new().enabled());
    }
}
