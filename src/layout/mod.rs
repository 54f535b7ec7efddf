//! Justified row layout
//!
//! This module arranges items into rows of a fixed target width, stretching
//! and shrinking each item within its orientation's bounds so that every row
//! sums exactly to the target.

pub mod config;
pub mod engine;
pub mod error;
pub mod fit;
pub mod lint;
pub mod metrics;
pub mod partition;
pub mod reflow;
pub mod trace;
pub mod types;

pub use config::{BoxConfig, LayoutConfig};
pub use engine::{Arrangement, Fit, LayoutEngine, RowOutcome};
pub use error::LayoutError;
pub use metrics::{RowMetrics, Strategy};
pub use trace::{NoTrace, RecordingTrace, StderrTrace, TraceEvent, TraceSink};
pub use types::*;

/// Validate that every item has finite, positive sides.
pub fn validate_items(items: &[LayoutItem]) -> Result<(), LayoutError> {
    for (index, item) in items.iter().enumerate() {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(item.width) || !valid(item.height) {
            return Err(LayoutError::invalid_item(index, item.width, item.height));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_items_accepts_positive() {
        let items = [LayoutItem::new(4.0, 3.0), LayoutItem::new(1.0, 1.0)];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_validate_items_reports_index() {
        let items = [
            LayoutItem::new(4.0, 3.0),
            LayoutItem::new(4.0, 0.0),
            LayoutItem::new(f64::NAN, 1.0),
        ];
        assert_eq!(
            validate_items(&items),
            Err(LayoutError::invalid_item(1, 4.0, 0.0))
        );
    }
}
