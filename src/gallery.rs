//! Gallery documents: the items to lay out plus optional layout settings
//!
//! A gallery is a TOML document:
//!
//! ```toml
//! width = 12
//!
//! [layout.landscape]
//! width = 4
//! min_width = 3
//! max_width = 6
//!
//! [[items]]
//! width = 4000
//! height = 3000
//! ```
//!
//! `width` and `[layout]` are optional; missing layout tables keep their
//! defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::InputError;
use crate::layout::{validate_items, LayoutConfig, LayoutEngine, LayoutItem};

/// Items plus the settings to lay them out with
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Gallery {
    /// Target row width, if the document names one
    pub width: Option<u32>,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
}

impl Gallery {
    /// Load a gallery from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a gallery from a TOML string and validate it
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, InputError> {
        let gallery: Gallery = toml::from_str(content)?;
        gallery.validate()?;
        Ok(gallery)
    }

    /// Check items and layout rules
    pub fn validate(&self) -> Result<(), InputError> {
        validate_items(&self.items)?;
        self.layout.validate()?;
        Ok(())
    }

    /// Replace the layout rules
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Build an engine over this gallery's items
    pub fn engine(&self) -> LayoutEngine {
        LayoutEngine::new(&self.items, self.layout.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BoxConfig, LayoutError};

    #[test]
    fn test_parse_gallery() {
        let gallery = Gallery::from_str(
            r#"
width = 12

[layout.landscape]
width = 4
min_width = 3
max_width = 6

[[items]]
width = 4000
height = 3000

[[items]]
width = 3000
height = 4000
"#,
        )
        .expect("Should parse");
        assert_eq!(gallery.width, Some(12));
        assert_eq!(gallery.items.len(), 2);
        assert_eq!(gallery.items[1], LayoutItem::new(3000.0, 4000.0));
        assert_eq!(gallery.layout.landscape, BoxConfig::new(4, 3, 6));
        assert_eq!(gallery.layout.square, BoxConfig::new(3, 2, 3));
    }

    #[test]
    fn test_parse_without_width_or_layout() {
        let gallery = Gallery::from_str("[[items]]\nwidth = 1\nheight = 1\n").expect("Should parse");
        assert_eq!(gallery.width, None);
        assert_eq!(gallery.layout, LayoutConfig::default());
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = Gallery::from_str("[[items]]\nwidth = 10\nheight = 0\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::Invalid(LayoutError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_engine_uses_gallery_layout() {
        let gallery = Gallery::from_str(
            "[[items]]\nwidth = 4\nheight = 3\n[[items]]\nwidth = 4\nheight = 3\n",
        )
        .expect("Should parse");
        assert_eq!(gallery.engine().layout(8), vec![4, 4]);
    }
}
