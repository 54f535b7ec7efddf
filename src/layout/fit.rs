//! Row fitting: redistribute width across a row until it matches the target

use std::cmp::Ordering;

use super::config::LayoutConfig;
use super::metrics::{penalty_order, Penalty};
use super::types::Row;

/// Passes over a row before an unforced fit gives up
pub const MAX_FIT_PASSES: usize = 5;

/// Stretch or shrink the boxes of `row` toward `target` and return the new
/// score.
///
/// Boxes are visited in ascending order of the penalty for the direction of
/// travel, each absorbing as much of the remaining difference as its
/// capacity allows, for at most [`MAX_FIT_PASSES`] passes or until a pass
/// makes no progress. With `force`, whatever difference remains is then
/// spread over the boxes in one step past their bounds, so a non-empty row
/// always ends exactly at `target`. No box is ever shrunk below zero.
pub fn fit_row(row: &mut Row, target: i64, config: &LayoutConfig, force: bool) -> i64 {
    let mut score = row.score();
    let order = match score.cmp(&target) {
        Ordering::Less => penalty_order(&row.boxes, config, Penalty::Stretch),
        Ordering::Greater => penalty_order(&row.boxes, config, Penalty::Shrink),
        Ordering::Equal => return score,
    };

    for _ in 0..MAX_FIT_PASSES {
        let before = score;
        for &i in &order {
            let b = &mut row.boxes[i];
            match score.cmp(&target) {
                Ordering::Less => score += b.stretch_by(target - score),
                Ordering::Greater => score -= b.shrink_by(score - target),
                Ordering::Equal => break,
            }
        }
        if score == before || score == target {
            break;
        }
    }

    if force && !row.is_empty() {
        match score.cmp(&target) {
            Ordering::Less => score += spread_stretch(row, &order, target - score),
            Ordering::Greater => score -= spread_shrink(row, &order, score - target),
            Ordering::Equal => {}
        }
    }

    score
}

/// Grow boxes past their bounds by `amount` in total: an even share each,
/// with the remainder going to the first boxes in `order`.
fn spread_stretch(row: &mut Row, order: &[usize], amount: i64) -> i64 {
    let count = order.len() as i64;
    let (share, extra) = (amount / count, amount % count);
    for (rank, &i) in order.iter().enumerate() {
        let bonus = i64::from((rank as i64) < extra);
        row.boxes[i].force_stretch(share + bonus);
    }
    amount
}

/// Shrink boxes past their bounds by up to `amount` in total, taking even
/// shares from the boxes that still have width. The number of rounds is
/// bounded by the row length, not by `amount`.
fn spread_shrink(row: &mut Row, order: &[usize], amount: i64) -> i64 {
    let mut remaining = amount;
    while remaining > 0 {
        let open = order.iter().filter(|&&i| row.boxes[i].width > 0).count() as i64;
        if open == 0 {
            break;
        }
        let share = (remaining / open).max(1);
        for &i in order {
            if remaining == 0 {
                break;
            }
            remaining -= row.boxes[i].force_shrink(share.min(remaining));
        }
    }
    amount - remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::BoxConfig;
    use crate::layout::types::{FlexBox, LayoutItem, Orientation};

    fn row(config: &BoxConfig, count: usize) -> Row {
        (0..count)
            .map(|i| {
                FlexBox::with_config(i, LayoutItem::new(4.0, 3.0), Orientation::Landscape, config)
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn widths(row: &Row) -> Vec<i64> {
        row.boxes.iter().map(|b| b.width).collect()
    }

    #[test]
    fn test_exact_row_untouched() {
        let config = LayoutConfig::default();
        let mut r = row(&config.landscape, 2);
        assert_eq!(fit_row(&mut r, 8, &config, true), 8);
        assert_eq!(widths(&r), vec![4, 4]);
    }

    #[test]
    fn test_shrink_in_row_order() {
        let config = LayoutConfig::new().with_landscape(BoxConfig::new(4, 2, 6));
        let mut r = row(&config.landscape, 3);
        assert_eq!(fit_row(&mut r, 9, &config, false), 9);
        assert_eq!(widths(&r), vec![2, 3, 4]);
    }

    #[test]
    fn test_stretch_lowest_penalty_first() {
        let config = LayoutConfig::new()
            .with_landscape(BoxConfig::new(4, 3, 6).with_penalties(0.0, 2.0))
            .with_portrait(BoxConfig::new(2, 1, 4).with_penalties(0.0, 1.0));
        let mut r = Row::new(vec![
            FlexBox::new(0, LayoutItem::new(4.0, 3.0), &config),
            FlexBox::new(1, LayoutItem::new(3.0, 4.0), &config),
        ]);
        assert_eq!(fit_row(&mut r, 8, &config, false), 8);
        // the portrait box stretches fully before the landscape box moves
        assert_eq!(widths(&r), vec![4, 4]);
        assert_eq!(fit_row(&mut r, 9, &config, false), 9);
        assert_eq!(widths(&r), vec![5, 4]);
    }

    #[test]
    fn test_unforced_fit_stops_at_capacity() {
        let config = LayoutConfig::default();
        let mut r = row(&config.landscape, 2);
        assert_eq!(fit_row(&mut r, 12, &config, false), 10);
        assert_eq!(widths(&r), vec![5, 5]);
    }

    #[test]
    fn test_forced_fit_exceeds_capacity() {
        let config = LayoutConfig::default();
        let mut r = row(&config.landscape, 2);
        assert_eq!(fit_row(&mut r, 13, &config, true), 13);
        assert_eq!(r.score(), 13);
        for b in &r.boxes {
            assert_eq!(b.max_width(), 5);
            assert_eq!(b.min_width(), 3);
        }
    }

    #[test]
    fn test_forced_fit_of_rigid_box() {
        let config = LayoutConfig::new().with_landscape(BoxConfig::new(9, 9, 9));
        let mut r = row(&config.landscape, 1);
        assert_eq!(fit_row(&mut r, 2, &config, true), 2);
        assert_eq!(widths(&r), vec![2]);
        assert_eq!(r.boxes[0].shrink, -7);
        assert_eq!(r.boxes[0].stretch, 7);
    }

    #[test]
    fn test_forced_shrink_never_goes_negative() {
        let config = LayoutConfig::new()
            .with_portrait(BoxConfig::new(1, 1, 1))
            .with_landscape(BoxConfig::new(5, 5, 5));
        let mut r = Row::new(vec![
            FlexBox::new(0, LayoutItem::new(3.0, 4.0), &config),
            FlexBox::new(1, LayoutItem::new(4.0, 3.0), &config),
        ]);
        assert_eq!(fit_row(&mut r, 2, &config, true), 2);
        assert_eq!(widths(&r), vec![0, 2]);
        assert_eq!(r.spans().sum::<u32>(), 2);
    }

    #[test]
    fn test_forced_spread_matches_round_robin() {
        let config = LayoutConfig::new().with_landscape(BoxConfig::new(5, 5, 5));
        let mut r = row(&config.landscape, 2);
        assert_eq!(fit_row(&mut r, 5, &config, true), 5);
        assert_eq!(widths(&r), vec![2, 3]);

        let mut r = row(&config.landscape, 3);
        assert_eq!(fit_row(&mut r, 20, &config, true), 20);
        assert_eq!(widths(&r), vec![7, 7, 6]);
    }

    #[test]
    fn test_forced_fit_to_huge_width_is_one_step() {
        let config = LayoutConfig::default();
        let mut r = row(&config.landscape, 3);
        let target = i64::from(u32::MAX);
        assert_eq!(fit_row(&mut r, target, &config, true), target);
        for b in &r.boxes {
            assert_eq!(b.width + b.stretch, 5);
        }
    }

    #[test]
    fn test_empty_row() {
        let config = LayoutConfig::default();
        let mut r = Row::default();
        assert_eq!(fit_row(&mut r, 5, &config, true), 0);
    }
}
