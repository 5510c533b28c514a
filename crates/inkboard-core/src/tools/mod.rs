//! Drawing tools and the draw/select mode toggle.

use crate::shapes::{
    Ellipse, Polyline, Rectangle, SerializableColor, Shape, ShapeKind, ShapeStyle, Text,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Global interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Pointer gestures create shapes.
    #[default]
    Draw,
    /// Pointer clicks select, move and delete existing shapes.
    Select,
}

/// What the next draw gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Shape kind to create.
    pub kind: ShapeKind,
    /// Stroke width of created shapes.
    pub stroke_width: f64,
    /// Stroke color of created shapes.
    pub stroke_color: SerializableColor,
}

impl Default for Tool {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Line,
            stroke_width: 4.0,
            stroke_color: SerializableColor::black(),
        }
    }
}

impl Tool {
    pub fn new(kind: ShapeKind, stroke_width: f64, stroke_color: SerializableColor) -> Self {
        Self {
            kind,
            stroke_width,
            stroke_color,
        }
    }

    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.stroke_color, self.stroke_width)
    }

    /// Build the provisional shape a gesture starting at `point` begins with.
    ///
    /// Lines start with one point, rects and ellipses at 1x1, text opens in
    /// the editor with `placeholder` as its content.
    pub fn create_shape(&self, point: Point, placeholder: &str) -> Shape {
        let style = self.style();
        match self.kind {
            ShapeKind::Line => Shape::Line(Polyline::new(point).with_style(style)),
            ShapeKind::ArrowLine => Shape::ArrowLine(Polyline::new(point).with_style(style)),
            ShapeKind::Rect => Shape::Rect(Rectangle::new(point, 1.0, 1.0).with_style(style)),
            ShapeKind::Circle => Shape::Ellipse(Ellipse::new(point, 1.0, 1.0).with_style(style)),
            ShapeKind::Text => {
                Shape::Text(Text::new(point, placeholder.to_string()).with_style(style))
            }
        }
    }
}

/// Extend a provisional shape towards `point`.
///
/// Returns the updated shape, or `None` when the move must be ignored: a rect
/// or ellipse whose new extent would drop below `min_extent` keeps its prior
/// geometry, and text never changes on move.
pub fn extend_shape(shape: &Shape, point: Point, min_extent: f64) -> Option<Shape> {
    match shape {
        Shape::Line(line) => {
            let mut line = line.clone();
            line.push(point);
            Some(Shape::Line(line))
        }
        Shape::ArrowLine(line) => {
            let mut line = line.clone();
            line.push(point);
            Some(Shape::ArrowLine(line))
        }
        Shape::Rect(rect) => rect.resized_to(point, min_extent).map(Shape::Rect),
        Shape::Ellipse(ellipse) => ellipse.resized_to(point, min_extent).map(Shape::Ellipse),
        Shape::Text(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Palette, ShapeTrait};

    fn tool(kind: ShapeKind) -> Tool {
        Tool::new(kind, 2.0, Palette::Red.color())
    }

    #[test]
    fn test_default_tool() {
        let tool = Tool::default();
        assert_eq!(tool.kind, ShapeKind::Line);
        assert!((tool.stroke_width - 4.0).abs() < f64::EPSILON);
        assert_eq!(tool.stroke_color, SerializableColor::black());
    }

    #[test]
    fn test_create_shapes_carry_style() {
        for &kind in ShapeKind::all() {
            let shape = tool(kind).create_shape(Point::new(10.0, 10.0), "placeholder");
            assert_eq!(shape.kind(), kind);
            assert_eq!(shape.style().stroke_color, Palette::Red.color());
            assert!((shape.style().stroke_width - 2.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_create_text_is_editing() {
        let shape = tool(ShapeKind::Text).create_shape(Point::new(3.0, 4.0), "Type words here");
        let text = shape.as_text().unwrap();
        assert!(text.editing);
        assert_eq!(text.words, "Type words here");
        assert_eq!(text.position, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_create_rect_is_unit_sized() {
        let shape = tool(ShapeKind::Rect).create_shape(Point::new(10.0, 10.0), "");
        let Shape::Rect(rect) = shape else {
            panic!("expected rect");
        };
        assert!((rect.width - 1.0).abs() < f64::EPSILON);
        assert!((rect.height - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extend_line_appends_point() {
        let shape = tool(ShapeKind::ArrowLine).create_shape(Point::new(0.0, 0.0), "");
        let extended = extend_shape(&shape, Point::new(5.0, 5.0), 1.0).unwrap();
        let Shape::ArrowLine(line) = &extended else {
            panic!("expected arrow line");
        };
        assert_eq!(line.points.len(), 2);
        assert_eq!(extended.id(), shape.id());
    }

    #[test]
    fn test_extend_rect() {
        let shape = tool(ShapeKind::Rect).create_shape(Point::new(10.0, 10.0), "");
        let Some(Shape::Rect(rect)) = extend_shape(&shape, Point::new(50.0, 80.0), 1.0) else {
            panic!("expected rect");
        };
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.height - 70.0).abs() < f64::EPSILON);
        assert!(extend_shape(&shape, Point::new(10.5, 80.0), 1.0).is_none());
    }

    #[test]
    fn test_extend_ellipse_rejects_negative() {
        let shape = tool(ShapeKind::Circle).create_shape(Point::new(10.0, 10.0), "");
        assert!(extend_shape(&shape, Point::new(5.0, 5.0), 1.0).is_none());
        let Some(Shape::Ellipse(ellipse)) = extend_shape(&shape, Point::new(30.0, 20.0), 1.0)
        else {
            panic!("expected ellipse");
        };
        assert!((ellipse.radius_x - 20.0).abs() < f64::EPSILON);
        assert!(!ellipse.is_degenerate(1.0));
    }

    #[test]
    fn test_extend_text_ignored() {
        let shape = tool(ShapeKind::Text).create_shape(Point::ZERO, "x");
        assert!(extend_shape(&shape, Point::new(50.0, 50.0), 1.0).is_none());
    }
}
