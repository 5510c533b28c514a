//! Text shape.

use super::{new_shape_id, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A text label placed at a fixed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Baseline-left anchor of the label.
    pub position: Point,
    /// The text content.
    pub words: String,
    /// True while the text editor owns this shape.
    pub editing: bool,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

fn default_font_size() -> f64 {
    Text::DEFAULT_FONT_SIZE
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Create a text shape that opens in the editor.
    pub fn new(position: Point, words: String) -> Self {
        Self {
            id: new_shape_id(),
            position,
            words,
            editing: true,
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Store edited words and close the editor.
    pub fn commit(&mut self, words: String) {
        self.words = words;
        self.editing = false;
    }

    /// Approximate width based on the longest line; the real width depends on the font.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .words
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * 0.55
    }

    fn approximate_height(&self) -> f64 {
        let lines = self.words.lines().count().max(1);
        lines as f64 * self.font_size * 1.2
    }
}

impl ShapeTrait for Text {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.approximate_width(),
            self.position.y + self.approximate_height(),
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn is_degenerate(&self, _min_extent: f64) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_editing() {
        let text = Text::new(Point::new(5.0, 5.0), "Type words here".to_string());
        assert!(text.editing);
        assert!(!text.is_degenerate(1.0));
    }

    #[test]
    fn test_commit_closes_editor() {
        let mut text = Text::new(Point::ZERO, "draft".to_string());
        text.commit("hello".to_string());
        assert!(!text.editing);
        assert_eq!(text.words, "hello");
    }

    #[test]
    fn test_bounds_grow_with_content() {
        let short = Text::new(Point::ZERO, "ab".to_string());
        let long = Text::new(Point::ZERO, "abcdef".to_string());
        assert!(long.bounds().width() > short.bounds().width());

        let two_lines = Text::new(Point::ZERO, "ab\ncd".to_string());
        assert!(two_lines.bounds().height() > short.bounds().height());
    }

    #[test]
    fn test_hit_test_inside_box() {
        let text = Text::new(Point::new(10.0, 10.0), "hello".to_string());
        assert!(text.hit_test(Point::new(12.0, 15.0), 0.0));
        assert!(!text.hit_test(Point::new(0.0, 0.0), 0.0));
    }

    #[test]
    fn test_missing_font_size_defaults() {
        let json = serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "position": { "x": 1.0, "y": 2.0 },
            "words": "hi",
            "editing": false,
            "style": { "stroke_color": { "r": 0, "g": 0, "b": 0, "a": 255 }, "stroke_width": 4.0 }
        });
        let text: Text = serde_json::from_value(json).unwrap();
        assert!((text.font_size - Text::DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    }
}
