//! Greedy row partitioning
//!
//! Both partitioners walk boxes in order and stop as soon as an accumulated
//! width reaches the requested width, so the box that crosses the line is
//! included.

use std::collections::VecDeque;

use super::types::{FlexBox, Row};

/// Take boxes from the front of `pending` until their nominal widths reach
/// `target`. At least one box is taken whenever `pending` is non-empty, and
/// the box that causes the overflow stays in the row.
pub fn partition(pending: &mut VecDeque<FlexBox>, target: i64) -> Row {
    let mut row = Row::default();
    let mut score = 0;
    while let Some(b) = pending.pop_front() {
        score += b.width;
        row.push(b);
        if score >= target {
            break;
        }
    }
    row
}

/// Split `row` into the shortest prefix whose maximum widths
/// (`width + stretch`) cover `deficit`, and the remainder.
///
/// Callers pass the row reversed so that the prefix is the run of boxes
/// nearest the boundary being filled. A non-positive deficit takes nothing.
pub fn minimum_boxes(row: Row, deficit: i64) -> (Row, Row) {
    let mut boxes = row.boxes;
    let mut reach = 0;
    let mut count = 0;
    while count < boxes.len() && reach < deficit {
        reach += boxes[count].max_width();
        count += 1;
    }
    let rest = boxes.split_off(count);
    (Row::new(boxes), Row::new(rest))
}
