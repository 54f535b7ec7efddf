//! Core types for the layout engine

use std::fmt;

use serde::Deserialize;

use super::config::{BoxConfig, LayoutConfig};

/// Dimensions of one item to lay out, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutItem {
    pub width: f64,
    pub height: f64,
}

impl LayoutItem {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Classify this item by aspect ratio
    pub fn orientation(&self) -> Orientation {
        Orientation::classify(self)
    }
}

/// Aspect-ratio category of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Square,
    Landscape,
}

impl Orientation {
    /// Items whose `w/h - h/w` lies within this distance of zero are square.
    pub const SQUARE_TOLERANCE: f64 = 0.1;

    /// Classify an item by the signed difference `w/h - h/w`.
    ///
    /// Height must be non-zero.
    pub fn classify(item: &LayoutItem) -> Self {
        let diff = item.width / item.height - item.height / item.width;
        if diff.abs() <= Self::SQUARE_TOLERANCE {
            Orientation::Square
        } else if diff < 0.0 {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn all() -> &'static [Orientation] {
        &[Self::Portrait, Self::Square, Self::Landscape]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Square => write!(f, "square"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Working record for one item: current width plus the room left to shrink
/// and stretch.
///
/// `width + stretch` always equals the category's `max_width` and
/// `width - shrink` always equals its `min_width`. Forced fits may push a
/// box past those bounds, in which case the matching capacity goes negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexBox {
    /// Position of the item in the input sequence
    pub index: usize,
    pub item: LayoutItem,
    pub orientation: Orientation,
    pub width: i64,
    pub shrink: i64,
    pub stretch: i64,
    pub flex: i64,
}

impl FlexBox {
    pub fn new(index: usize, item: LayoutItem, config: &LayoutConfig) -> Self {
        let orientation = item.orientation();
        Self::with_config(index, item, orientation, config.for_orientation(orientation))
    }

    pub fn with_config(
        index: usize,
        item: LayoutItem,
        orientation: Orientation,
        config: &BoxConfig,
    ) -> Self {
        let width = i64::from(config.width);
        let min = i64::from(config.min_width);
        let max = i64::from(config.max_width);
        Self {
            index,
            item,
            orientation,
            width,
            flex: (max - min).abs(),
            shrink: (min - width).abs(),
            stretch: (max - width).abs(),
        }
    }

    /// Narrowest width reachable without forcing
    pub fn min_width(&self) -> i64 {
        self.width - self.shrink
    }

    /// Widest width reachable without forcing
    pub fn max_width(&self) -> i64 {
        self.width + self.stretch
    }

    /// Grow by up to `wanted` units of remaining stretch and return the
    /// amount applied.
    pub fn stretch_by(&mut self, wanted: i64) -> i64 {
        let delta = wanted.min(self.stretch.max(0));
        self.resize(delta);
        delta
    }

    /// Shrink by up to `wanted` units of remaining shrink and return the
    /// amount applied.
    pub fn shrink_by(&mut self, wanted: i64) -> i64 {
        let delta = wanted.min(self.shrink.max(0));
        self.resize(-delta);
        delta
    }

    /// Grow by `amount` regardless of `max_width`
    pub fn force_stretch(&mut self, amount: i64) {
        self.resize(amount.max(0));
    }

    /// Shrink by up to `wanted` regardless of `min_width`, stopping at zero.
    /// Returns the amount applied.
    pub fn force_shrink(&mut self, wanted: i64) -> i64 {
        let delta = wanted.min(self.width).max(0);
        self.resize(-delta);
        delta
    }

    fn resize(&mut self, delta: i64) {
        self.width += delta;
        self.shrink += delta;
        self.stretch -= delta;
    }

    /// Final span for this box
    pub fn span(&self) -> u32 {
        debug_assert!(self.width >= 0, "box {} has negative width", self.index);
        u32::try_from(self.width).unwrap_or(0)
    }
}

/// An ordered group of boxes whose widths should sum to the target width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub boxes: Vec<FlexBox>,
}

impl Row {
    pub fn new(boxes: Vec<FlexBox>) -> Self {
        Self { boxes }
    }

    /// Current total width of the row
    pub fn score(&self) -> i64 {
        self.boxes.iter().map(|b| b.width).sum()
    }

    /// Sum of `width + stretch` over every box
    pub fn max_width(&self) -> i64 {
        self.boxes.iter().map(FlexBox::max_width).sum()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn push(&mut self, b: FlexBox) {
        self.boxes.push(b);
    }

    pub fn pop(&mut self) -> Option<FlexBox> {
        self.boxes.pop()
    }

    pub fn reverse(&mut self) {
        self.boxes.reverse();
    }

    pub fn spans(&self) -> impl Iterator<Item = u32> + '_ {
        self.boxes.iter().map(FlexBox::span)
    }
}

impl From<Vec<FlexBox>> for Row {
    fn from(boxes: Vec<FlexBox>) -> Self {
        Self::new(boxes)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.boxes {
            let minus = if b.shrink != 0 {
                format!("-{}", b.shrink)
            } else {
                "0".to_string()
            };
            let plus = if b.stretch != 0 {
                format!("+{}", b.stretch)
            } else {
                "0".to_string()
            };
            write!(f, "{}({}, {}) | ", b.width, minus, plus)?;
        }
        write!(f, "[{}]", self.score())
    }
}
