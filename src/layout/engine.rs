//! Layout computation engine
//!
//! [`LayoutEngine`] turns a sequence of items into rows of a fixed target
//! width and reports one span per item.
//!
//! ## Row Pipeline
//!
//! For each call to [`LayoutEngine::arrange`]:
//!
//! 1. **Fresh boxes**: rebuild the working boxes from the originals so calls
//!    never see each other's adjustments
//! 2. **Partition**: greedily take boxes until the row reaches the target
//! 3. **Metrics**: compute shrink/stretch capacity and badness
//! 4. **Dispatch**: stretch (ejecting the overflow box), shrink, reflow
//!    earlier rows, apply the contrary adjustment, or give up on the row
//! 5. **Consistency**: drop empty rows and force-fit every row to the target
//!
//! ## Key Functions
//!
//! - [`LayoutEngine::layout`]: spans in input order
//! - [`LayoutEngine::arrange`]: final rows plus the outcome of every candidate row

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use super::config::LayoutConfig;
use super::fit::fit_row;
use super::metrics::{RowMetrics, Strategy};
use super::partition::partition;
use super::reflow::reflow;
use super::trace::{StderrTrace, TraceEvent, TraceSink};
use super::types::{FlexBox, LayoutItem, Row};

/// How a row that fits on its own was adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Partitioned row already matched the target
    Exact,
    /// Overflow box ejected, remaining boxes stretched
    Stretch,
    /// Row shrunk in place
    Shrink,
    /// Badness preferred shrinking but only stretching was possible
    ContraryStretch,
    /// Badness preferred stretching but only shrinking was possible
    ContraryShrink,
}

/// Outcome of one candidate row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Fitted(Fit),
    /// Earlier rows were rebalanced; `rows` is the row count afterwards
    Reflowed { rows: usize },
    /// No adjustment applied; the consistency pass forces the row later
    Unresolved,
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOutcome::Fitted(Fit::Exact) => write!(f, "exact"),
            RowOutcome::Fitted(Fit::Stretch) => write!(f, "stretch"),
            RowOutcome::Fitted(Fit::Shrink) => write!(f, "shrink"),
            RowOutcome::Fitted(Fit::ContraryStretch) => write!(f, "contrary stretch"),
            RowOutcome::Fitted(Fit::ContraryShrink) => write!(f, "contrary shrink"),
            RowOutcome::Reflowed { rows } => write!(f, "reflowed into {} rows", rows),
            RowOutcome::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Result of one layout run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrangement {
    /// Final rows; concatenated they reproduce the input order
    pub rows: Vec<Row>,
    /// Outcome of every candidate row, in the order they were produced
    pub outcomes: Vec<RowOutcome>,
}

impl Arrangement {
    /// One span per item, in input order
    pub fn spans(&self) -> Vec<u32> {
        self.rows.iter().flat_map(Row::spans).collect()
    }

    /// Spans grouped by row
    pub fn row_spans(&self) -> Vec<Vec<u32>> {
        self.rows.iter().map(|r| r.spans().collect()).collect()
    }

    /// Number of candidate rows that fell through every branch
    pub fn unresolved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Unresolved))
            .count()
    }
}

/// Justified row layout over a fixed set of items
#[derive(Debug)]
pub struct LayoutEngine<T = StderrTrace> {
    boxes: Vec<FlexBox>,
    config: LayoutConfig,
    trace: T,
}

impl LayoutEngine<StderrTrace> {
    /// Build an engine that traces to stderr when `config.debug` is set
    pub fn new(items: &[LayoutItem], config: LayoutConfig) -> Self {
        let trace = StderrTrace::new(config.debug);
        Self::with_trace(items, config, trace)
    }

    /// Build an engine with the default configuration
    pub fn with_defaults(items: &[LayoutItem]) -> Self {
        Self::new(items, LayoutConfig::default())
    }
}

impl<T: TraceSink> LayoutEngine<T> {
    /// Build an engine that reports to `trace`
    pub fn with_trace(items: &[LayoutItem], config: LayoutConfig, trace: T) -> Self {
        let boxes = items
            .iter()
            .enumerate()
            .map(|(index, &item)| FlexBox::new(index, item, &config))
            .collect();
        Self {
            boxes,
            config,
            trace,
        }
    }

    /// The items in input order
    pub fn items(&self) -> impl Iterator<Item = &LayoutItem> + '_ {
        self.boxes.iter().map(|b| &b.item)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Lay out every item into rows of `width` and return one span per item
    /// in input order
    pub fn layout(&self, width: u32) -> Vec<u32> {
        self.arrange(width).spans()
    }

    /// Lay out every item into rows of `width`
    pub fn arrange(&self, width: u32) -> Arrangement {
        let start = Instant::now();
        let target = i64::from(width);
        let mut pending: VecDeque<FlexBox> = self.boxes.iter().copied().collect();

        let arrangement = if target == 0 {
            self.collapse(pending)
        } else {
            let (rows, outcomes) = self.layout_boxes(&mut pending, target);
            Arrangement { rows, outcomes }
        };

        self.emit(|| TraceEvent::Finished {
            elapsed: start.elapsed(),
        });
        self.emit(|| TraceEvent::Rows {
            rows: &arrangement.rows,
        });
        arrangement
    }

    fn layout_boxes(
        &self,
        pending: &mut VecDeque<FlexBox>,
        target: i64,
    ) -> (Vec<Row>, Vec<RowOutcome>) {
        let mut rows: Vec<Row> = Vec::new();
        let mut outcomes = Vec::new();

        while !pending.is_empty() {
            self.emit(|| TraceEvent::RowStart {
                number: rows.len() + 1,
            });
            let mut row = partition(pending, target);
            self.emit(|| TraceEvent::Candidate { row: &row });

            if row.score() == target {
                self.accept(&mut rows, &mut outcomes, row, RowOutcome::Fitted(Fit::Exact));
                continue;
            }

            let metrics = RowMetrics::calculate(&row, target, &self.config);
            self.emit(|| TraceEvent::Metrics { metrics: &metrics });
            let strategy = metrics.strategy();

            if metrics.stretch_width >= target && strategy == Strategy::Stretch {
                self.eject_last(&mut row, pending);
                fit_row(&mut row, target, &self.config, true);
                self.accept(&mut rows, &mut outcomes, row, RowOutcome::Fitted(Fit::Stretch));
            } else if metrics.shrink_width <= target && strategy == Strategy::Shrink {
                fit_row(&mut row, target, &self.config, true);
                self.accept(&mut rows, &mut outcomes, row, RowOutcome::Fitted(Fit::Shrink));
            } else if strategy == Strategy::Reflow {
                rows.push(row);
                rows = reflow(rows, target, &self.config, &self.trace);
                let outcome = RowOutcome::Reflowed { rows: rows.len() };
                if let Some(last) = rows.last() {
                    self.emit(|| TraceEvent::Decision { outcome, row: last });
                }
                outcomes.push(outcome);
            } else if metrics.stretch_width >= target {
                self.emit(|| TraceEvent::Contrary { metrics: &metrics });
                self.eject_last(&mut row, pending);
                fit_row(&mut row, target, &self.config, true);
                let outcome = RowOutcome::Fitted(Fit::ContraryStretch);
                self.accept(&mut rows, &mut outcomes, row, outcome);
            } else if metrics.shrink_width <= target {
                self.emit(|| TraceEvent::Contrary { metrics: &metrics });
                fit_row(&mut row, target, &self.config, true);
                let outcome = RowOutcome::Fitted(Fit::ContraryShrink);
                self.accept(&mut rows, &mut outcomes, row, outcome);
            } else {
                self.emit(|| TraceEvent::Unresolved { row: &row });
                self.accept(&mut rows, &mut outcomes, row, RowOutcome::Unresolved);
            }
        }

        // rows emptied by reflow carry no items; anything else must fit exactly
        rows.retain(|row| !row.is_empty());
        for row in rows.iter_mut() {
            if row.score() != target {
                fit_row(row, target, &self.config, true);
            }
        }

        (rows, outcomes)
    }

    /// Nothing fits in zero width: every item gets its own row at width 0.
    fn collapse(&self, pending: VecDeque<FlexBox>) -> Arrangement {
        let mut arrangement = Arrangement::default();
        for b in pending {
            let mut row = Row::new(vec![b]);
            fit_row(&mut row, 0, &self.config, true);
            arrangement.rows.push(row);
            arrangement.outcomes.push(RowOutcome::Unresolved);
        }
        arrangement
    }

    fn eject_last(&self, row: &mut Row, pending: &mut VecDeque<FlexBox>) {
        if let Some(last) = row.pop() {
            pending.push_front(last);
        }
    }

    fn accept(
        &self,
        rows: &mut Vec<Row>,
        outcomes: &mut Vec<RowOutcome>,
        row: Row,
        outcome: RowOutcome,
    ) {
        self.emit(|| TraceEvent::Decision { outcome, row: &row });
        rows.push(row);
        outcomes.push(outcome);
    }

    fn emit<'a>(&self, event: impl FnOnce() -> TraceEvent<'a>) {
        if self.trace.enabled() {
            self.trace.record(&event());
        }
    }
}
