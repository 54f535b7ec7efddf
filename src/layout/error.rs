//! Error types for the layout engine
//!
//! The engine itself never fails; these errors come from the optional
//! validation layer that checks caller contracts before a layout runs.

use thiserror::Error;

use super::config::BoxConfig;
use super::types::Orientation;

/// Contract violations detected before layout computation
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Item with a zero, negative or non-finite side
    #[error("item {index} has invalid dimensions {width}x{height}")]
    InvalidItem {
        index: usize,
        width: f64,
        height: f64,
    },

    /// Box rules where `min_width <= width <= max_width` does not hold
    #[error(
        "invalid {orientation} bounds: expected min_width <= width <= max_width, got {min_width} / {width} / {max_width}"
    )]
    InvalidBounds {
        orientation: Orientation,
        width: u32,
        min_width: u32,
        max_width: u32,
    },

    /// Negative or non-finite penalty
    #[error("invalid {orientation} {name}: {value}")]
    InvalidPenalty {
        orientation: Orientation,
        name: &'static str,
        value: f64,
    },

    /// Rows cannot be laid out into zero width
    #[error("target width must be greater than zero")]
    ZeroWidth,
}

impl LayoutError {
    /// Create an invalid item error
    pub fn invalid_item(index: usize, width: f64, height: f64) -> Self {
        Self::InvalidItem {
            index,
            width,
            height,
        }
    }

    /// Create an invalid bounds error from the offending rules
    pub fn invalid_bounds(orientation: Orientation, config: &BoxConfig) -> Self {
        Self::InvalidBounds {
            orientation,
            width: config.width,
            min_width: config.min_width,
            max_width: config.max_width,
        }
    }

    /// Create an invalid penalty error
    pub fn invalid_penalty(orientation: Orientation, name: &'static str, value: f64) -> Self {
        Self::InvalidPenalty {
            orientation,
            name,
            value,
        }
    }
}
