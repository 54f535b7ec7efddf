//! Lint checks for degraded fit quality.
//!
//! Runs after a layout to report what the engine had to tolerate: rows that
//! miss the target, boxes forced outside their nominal bounds, rows that fell
//! through to the unresolved fallback, and any break in input order.

use std::fmt;

use super::config::LayoutConfig;
use super::engine::{Arrangement, RowOutcome};
use super::types::FlexBox;

/// A lint warning about a layout defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Width,
    Bounds,
    Unresolved,
    Order,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Width => write!(f, "width"),
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Unresolved => write!(f, "unresolved"),
            LintCategory::Order => write!(f, "order"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a completed arrangement.
pub fn check(arrangement: &Arrangement, config: &LayoutConfig, width: u32) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_widths(arrangement, width, &mut warnings);
    check_bounds(arrangement, config, &mut warnings);
    check_unresolved(arrangement, &mut warnings);
    check_order(arrangement, &mut warnings);
    warnings
}

fn check_widths(arrangement: &Arrangement, width: u32, warnings: &mut Vec<LintWarning>) {
    for (i, row) in arrangement.rows.iter().enumerate() {
        if row.score() != i64::from(width) {
            warnings.push(LintWarning {
                category: LintCategory::Width,
                message: format!(
                    "row {} sums to {} instead of {}",
                    i + 1,
                    row.score(),
                    width
                ),
            });
        }
    }
}

fn check_bounds(arrangement: &Arrangement, config: &LayoutConfig, warnings: &mut Vec<LintWarning>) {
    for (i, row) in arrangement.rows.iter().enumerate() {
        for b in &row.boxes {
            if let Some(message) = bounds_violation(b, config) {
                warnings.push(LintWarning {
                    category: LintCategory::Bounds,
                    message: format!("row {}: {}", i + 1, message),
                });
            }
        }
    }
}

fn bounds_violation(b: &FlexBox, config: &LayoutConfig) -> Option<String> {
    let rules = config.for_orientation(b.orientation);
    let (min, max) = (i64::from(rules.min_width), i64::from(rules.max_width));
    if b.width < min {
        Some(format!(
            "item {} ({}) forced to {}, below its minimum of {}",
            b.index, b.orientation, b.width, min
        ))
    } else if b.width > max {
        Some(format!(
            "item {} ({}) forced to {}, above its maximum of {}",
            b.index, b.orientation, b.width, max
        ))
    } else {
        None
    }
}

fn check_unresolved(arrangement: &Arrangement, warnings: &mut Vec<LintWarning>) {
    for (i, outcome) in arrangement.outcomes.iter().enumerate() {
        if *outcome == RowOutcome::Unresolved {
            warnings.push(LintWarning {
                category: LintCategory::Unresolved,
                message: format!("candidate row {} matched no fitting strategy", i + 1),
            });
        }
    }
}

fn check_order(arrangement: &Arrangement, warnings: &mut Vec<LintWarning>) {
    let indices = arrangement
        .rows
        .iter()
        .flat_map(|r| r.boxes.iter().map(|b| b.index));
    for (expected, index) in indices.enumerate() {
        if expected != index {
            warnings.push(LintWarning {
                category: LintCategory::Order,
                message: format!("item {} appears at position {}", index, expected),
            });
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::BoxConfig;
    use crate::layout::engine::LayoutEngine;
    use crate::layout::types::{LayoutItem, Row};

    #[test]
    fn test_clean_layout_has_no_warnings() {
        let config = LayoutConfig::new().with_landscape(BoxConfig::new(4, 3, 6));
        let engine = LayoutEngine::new(&[LayoutItem::new(4.0, 3.0); 2], config.clone());
        let arrangement = engine.arrange(6);
        assert!(check(&arrangement, &config, 6).is_empty());
    }

    #[test]
    fn test_forced_box_reported() {
        let config = LayoutConfig::new().with_landscape(BoxConfig::new(5, 5, 5));
        let engine = LayoutEngine::new(&[LayoutItem::new(4.0, 3.0)], config.clone());
        let arrangement = engine.arrange(3);
        let warnings = check(&arrangement, &config, 3);
        let categories: Vec<_> = warnings.iter().map(|w| w.category).collect();
        assert_eq!(categories, vec![LintCategory::Bounds, LintCategory::Unresolved]);
        assert!(warnings[0].to_string().contains("below its minimum of 5"));
    }

    #[test]
    fn test_width_and_order_reported() {
        let config = LayoutConfig::default();
        let b = |i| FlexBox::new(i, LayoutItem::new(4.0, 3.0), &config);
        let arrangement = Arrangement {
            rows: vec![Row::new(vec![b(1), b(0)])],
            outcomes: Vec::new(),
        };
        let warnings = check(&arrangement, &config, 10);
        let categories: Vec<_> = warnings.iter().map(|w| w.category).collect();
        assert_eq!(categories, vec![LintCategory::Width, LintCategory::Order]);
        assert_eq!(warnings[0].to_string(), "[width] row 1 sums to 8 instead of 10");
    }
}
