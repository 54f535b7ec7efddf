//! Justified Layout - row-justified grid layout for photo galleries
//!
//! This library arranges items of arbitrary aspect ratio into rows of a fixed
//! width, measured in abstract grid units. Each item is classified as
//! portrait, square or landscape, gets a nominal width with room to shrink and
//! stretch, and the engine distributes each row's slack so that every row sums
//! exactly to the target width.
//!
//! # Example
//!
//! ```rust
//! use justified_layout::{layout_spans, LayoutConfig, LayoutItem};
//!
//! let items = [LayoutItem::new(4000.0, 3000.0), LayoutItem::new(4000.0, 3000.0)];
//! let spans = layout_spans(&items, &LayoutConfig::default(), 8).unwrap();
//! assert_eq!(spans, vec![4, 4]);
//! ```

pub mod error;
pub mod gallery;
pub mod layout;

pub use error::InputError;
pub use gallery::Gallery;
pub use layout::{
    validate_items, Arrangement, BoxConfig, Fit, LayoutConfig, LayoutEngine, LayoutError,
    LayoutItem, Orientation, RowOutcome,
};

/// Validate the inputs and lay out `items` into rows of `width`
///
/// This is the checked entry point: it rejects items without positive
/// finite sides, inconsistent box rules and a zero width, then returns one
/// span per item in input order.
///
/// # Example
///
/// ```rust
/// use justified_layout::{layout_spans, BoxConfig, LayoutConfig, LayoutItem};
///
/// let config = LayoutConfig::new().with_landscape(BoxConfig::new(4, 3, 6));
/// let items = [LayoutItem::new(4.0, 3.0), LayoutItem::new(4.0, 3.0)];
///
/// assert_eq!(layout_spans(&items, &config, 6).unwrap(), vec![3, 3]);
/// assert!(layout_spans(&items, &config, 0).is_err());
/// ```
pub fn layout_spans(
    items: &[LayoutItem],
    config: &LayoutConfig,
    width: u32,
) -> Result<Vec<u32>, LayoutError> {
    if width == 0 {
        return Err(LayoutError::ZeroWidth);
    }
    validate_items(items)?;
    config.validate()?;
    Ok(LayoutEngine::new(items, config.clone()).layout(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_spans_rejects_bad_item() {
        let items = [LayoutItem::new(4.0, 0.0)];
        let result = layout_spans(&items, &LayoutConfig::default(), 4);
        assert!(matches!(result, Err(LayoutError::InvalidItem { .. })));
    }

    #[test]
    fn test_layout_spans_rejects_bad_config() {
        let config = LayoutConfig::new().with_portrait(BoxConfig::new(1, 2, 3));
        let result = layout_spans(&[LayoutItem::new(3.0, 4.0)], &config, 4);
        assert!(matches!(result, Err(LayoutError::InvalidBounds { .. })));
    }

    #[test]
    fn test_layout_spans_rigid_mix_fills_width() {
        let config = LayoutConfig::new()
            .with_portrait(BoxConfig::new(1, 1, 1))
            .with_landscape(BoxConfig::new(5, 5, 5));
        let items = [LayoutItem::new(3.0, 4.0), LayoutItem::new(4.0, 3.0)];
        let spans = layout_spans(&items, &config, 2).unwrap();
        assert_eq!(spans.iter().sum::<u32>(), 2);
    }

    #[test]
    fn test_layout_spans_mixed_orientations() {
        // portrait 2, square 3, landscape 4 => 9 exactly
        let items = [
            LayoutItem::new(3.0, 4.0),
            LayoutItem::new(1.0, 1.0),
            LayoutItem::new(4.0, 3.0),
        ];
        let spans = layout_spans(&items, &LayoutConfig::default(), 9).unwrap();
        assert_eq!(spans, vec![2, 3, 4]);
    }
}
