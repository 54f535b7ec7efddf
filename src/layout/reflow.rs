//! Backtracking reflow for a trailing row that cannot fill itself
//!
//! Starting from the short row, each step borrows the fewest boxes from the
//! end of the row above that can cover the shortfall, then moves one row up
//! if the row above can no longer reach the target on its own. Rows keep
//! their concatenated order throughout.

use super::config::LayoutConfig;
use super::fit::fit_row;
use super::partition::minimum_boxes;
use super::trace::{TraceEvent, TraceSink};
use super::types::Row;

/// Rebalance `rows` so the last row can reach `target`, then force-fit
/// every row to `target`.
///
/// A single row is returned unchanged. Rows emptied by borrowing stay in the
/// result; callers drop them.
pub fn reflow<T: TraceSink>(
    mut rows: Vec<Row>,
    target: i64,
    config: &LayoutConfig,
    trace: &T,
) -> Vec<Row> {
    if rows.len() <= 1 {
        return rows;
    }

    let mut index = rows.len() - 1;
    loop {
        if trace.enabled() {
            trace.record(&TraceEvent::Rows { rows: &rows });
        }

        if index == 0 {
            // nothing left to borrow from
            fit_row(&mut rows[0], target, config, true);
            break;
        }

        let reach = rows[index].max_width();
        let mut above = std::mem::take(&mut rows[index - 1]);
        above.reverse();
        let (mut borrowed, mut rest) = minimum_boxes(above, target - reach);
        borrowed.reverse();
        rest.reverse();

        let rest_reach = rest.max_width();
        borrowed.boxes.append(&mut rows[index].boxes);
        rows[index] = borrowed;
        fit_row(&mut rows[index], target, config, true);
        rows[index - 1] = rest;

        if rest_reach >= target {
            fit_row(&mut rows[index - 1], target, config, true);
            break;
        }
        index -= 1;
    }

    for row in rows.iter_mut() {
        if row.score() != target {
            fit_row(row, target, config, true);
        }
    }
    rows
}
