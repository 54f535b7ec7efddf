//! Configuration for the layout engine

use std::path::Path;

use serde::Deserialize;

use super::error::LayoutError;
use super::types::Orientation;
use crate::error::InputError;

/// Sizing rules for one orientation category
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoxConfig {
    /// Nominal width in grid units
    pub width: u32,

    /// Narrowest width a box may shrink to without forcing
    pub min_width: u32,

    /// Widest width a box may stretch to without forcing
    pub max_width: u32,

    /// Cost weight for shrinking; lower-penalty boxes absorb shrink first
    #[serde(default)]
    pub shrink_penalty: f64,

    /// Cost weight for stretching; lower-penalty boxes absorb stretch first
    #[serde(default)]
    pub stretch_penalty: f64,
}

impl BoxConfig {
    /// Create a box configuration with zero penalties
    pub fn new(width: u32, min_width: u32, max_width: u32) -> Self {
        Self {
            width,
            min_width,
            max_width,
            shrink_penalty: 0.0,
            stretch_penalty: 0.0,
        }
    }

    /// Set the shrink and stretch penalties
    pub fn with_penalties(mut self, shrink: f64, stretch: f64) -> Self {
        self.shrink_penalty = shrink;
        self.stretch_penalty = stretch;
        self
    }

    /// Check `min_width <= width <= max_width` and that penalties are
    /// finite and non-negative
    pub fn validate(&self, orientation: Orientation) -> Result<(), LayoutError> {
        if self.min_width > self.width || self.width > self.max_width {
            return Err(LayoutError::invalid_bounds(orientation, self));
        }
        for (name, value) in [
            ("shrink_penalty", self.shrink_penalty),
            ("stretch_penalty", self.stretch_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::invalid_penalty(orientation, name, value));
            }
        }
        Ok(())
    }
}

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rules for items taller than they are wide
    pub portrait: BoxConfig,

    /// Rules for items with roughly equal sides
    pub square: BoxConfig,

    /// Rules for items wider than they are tall
    pub landscape: BoxConfig,

    /// Trace every row transition to stderr
    pub debug: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            portrait: BoxConfig::new(2, 1, 2),
            square: BoxConfig::new(3, 2, 3),
            landscape: BoxConfig::new(4, 3, 5),
            debug: false,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string. Missing orientation tables
    /// keep their defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, InputError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rules for the given orientation
    pub fn for_orientation(&self, orientation: Orientation) -> &BoxConfig {
        match orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Square => &self.square,
            Orientation::Landscape => &self.landscape,
        }
    }

    /// Set the portrait rules
    pub fn with_portrait(mut self, config: BoxConfig) -> Self {
        self.portrait = config;
        self
    }

    /// Set the square rules
    pub fn with_square(mut self, config: BoxConfig) -> Self {
        self.square = config;
        self
    }

    /// Set the landscape rules
    pub fn with_landscape(mut self, config: BoxConfig) -> Self {
        self.landscape = config;
        self
    }

    /// Enable or disable the stderr trace
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate every orientation's rules
    pub fn validate(&self) -> Result<(), LayoutError> {
        for &orientation in Orientation::all() {
            self.for_orientation(orientation).validate(orientation)?;
        }
        Ok(())
    }
}
