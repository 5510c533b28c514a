//! Board configuration.

use crate::tools::Tool;
use serde::{Deserialize, Serialize};

/// Content a freshly placed text shape opens with.
pub const DEFAULT_PLACEHOLDER: &str = "Type words here";

/// Tunables for a board instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Tool active when the board is created.
    pub default_tool: Tool,
    /// Initial content of new text shapes.
    pub placeholder_text: String,
    /// Rects and ellipses must exceed this extent to survive a gesture.
    pub min_extent: f64,
    /// Extra distance around strokes that still counts as a click on a shape.
    pub hit_tolerance: f64,
    /// Padding between a selected shape and its selection box.
    pub selection_margin: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            placeholder_text: DEFAULT_PLACEHOLDER.to_string(),
            min_extent: crate::shapes::MIN_EXTENT,
            hit_tolerance: 4.0,
            selection_margin: 6.0,
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.placeholder_text, "Type words here");
        assert!((config.min_extent - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.default_tool.kind, ShapeKind::Line);
    }

    #[test]
    fn test_partial_json() {
        let config = BoardConfig::from_json(r#"{ "hit_tolerance": 10.0 }"#).unwrap();
        assert!((config.hit_tolerance - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.placeholder_text, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_tool_override() {
        let config = BoardConfig::from_json(
            r#"{ "default_tool": { "kind": "rect", "stroke_width": 2.0,
                 "stroke_color": { "r": 255, "g": 0, "b": 0, "a": 255 } } }"#,
        )
        .unwrap();
        assert_eq!(config.default_tool.kind, ShapeKind::Rect);
    }
}
