//! Row metrics and badness
//!
//! Badness tells the engine which way a candidate row wants to move:
//! negative means drop the overflow box and stretch the rest, positive means
//! shrink the row in place, and zero means the row can never be completed on
//! its own and needs a multi-row reflow.

use std::cmp::Ordering;

use super::config::LayoutConfig;
use super::types::{FlexBox, Row};

/// Which penalty to order boxes by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    Shrink,
    Stretch,
}

/// Indices of `boxes` ordered by ascending penalty. The sort is stable, so
/// equal penalties keep row order.
pub fn penalty_order(boxes: &[FlexBox], config: &LayoutConfig, penalty: Penalty) -> Vec<usize> {
    let weight = |b: &FlexBox| {
        let rules = config.for_orientation(b.orientation);
        match penalty {
            Penalty::Shrink => rules.shrink_penalty,
            Penalty::Stretch => rules.stretch_penalty,
        }
    };
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| weight(&boxes[a]).total_cmp(&weight(&boxes[b])));
    order
}

/// Preferred adjustment for a candidate row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Eject the overflow box and stretch the rest
    Stretch,
    /// Shrink the row in place
    Shrink,
    /// Borrow boxes from earlier rows
    Reflow,
}

/// Aggregate capacities of a candidate row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    /// Total shrink capacity
    pub shrink: i64,
    /// Narrowest width the row can reach
    pub shrink_width: i64,
    /// Total stretch capacity
    pub stretch: i64,
    /// Widest width the row can reach without its last box
    pub stretch_width: i64,
    pub badness: f64,
}

impl RowMetrics {
    /// Compute metrics for `row` against `target`.
    ///
    /// Penalties are accumulated walking boxes in ascending penalty order,
    /// each weighted by `width / target`, and only once the running bound
    /// has crossed the target. The last box of the row is left out of the
    /// stretch totals since stretching means ejecting it.
    pub fn calculate(row: &Row, target: i64, config: &LayoutConfig) -> Self {
        let boxes = &row.boxes;
        let last = boxes.len().checked_sub(1);
        let by_shrink = penalty_order(boxes, config, Penalty::Shrink);
        let by_stretch = penalty_order(boxes, config, Penalty::Stretch);
        let scale = target as f64;

        let mut shrink = 0;
        let mut stretch = 0;
        let mut shrink_width = 0;
        let mut stretch_width = 0;
        let mut shrink_penalty = 0.0;
        let mut stretch_penalty = 0.0;

        for (&si, &ti) in by_shrink.iter().zip(&by_stretch) {
            let shrinking = &boxes[si];
            shrink += shrinking.shrink;
            shrink_width += shrinking.width - shrinking.shrink;
            if shrink_width > target {
                shrink_penalty += config.for_orientation(shrinking.orientation).shrink_penalty
                    * (shrinking.width as f64 / scale);
            }

            let stretching = &boxes[ti];
            stretch += stretching.stretch;
            if Some(ti) != last {
                stretch_width += stretching.width + stretching.stretch;
                if stretch_width < target {
                    stretch_penalty += config.for_orientation(stretching.orientation).stretch_penalty
                        * (stretching.width as f64 / scale);
                }
            }
        }

        let badness = if row.score() < target && stretch_width < target {
            0.0
        } else {
            match stretch_penalty - shrink_penalty {
                // ties prefer shrinking; zero is reserved for reflow
                raw if raw == 0.0 => 1.0,
                raw => raw,
            }
        };

        Self {
            shrink,
            shrink_width,
            stretch,
            stretch_width,
            badness,
        }
    }

    /// Direction indicated by the sign of the badness
    pub fn strategy(&self) -> Strategy {
        match self.badness.partial_cmp(&0.0) {
            Some(Ordering::Less) => Strategy::Stretch,
            Some(Ordering::Greater) => Strategy::Shrink,
            _ => Strategy::Reflow,
        }
    }
}
