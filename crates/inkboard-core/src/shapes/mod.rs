//! Shape definitions for the board.

mod color;
mod ellipse;
mod line;
mod rectangle;
mod text;

pub use color::{ColorParseError, Palette, SerializableColor};
pub use ellipse::Ellipse;
pub use line::Polyline;
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Smallest width/height/radius a rect or ellipse may keep after a gesture.
pub const MIN_EXTENT: f64 = 1.0;

/// Stroke properties shared by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
}

impl ShapeStyle {
    pub fn new(stroke_color: SerializableColor, stroke_width: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 4.0,
        }
    }
}

/// The kind of shape a draw gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    #[default]
    Line,
    ArrowLine,
    Rect,
    Circle,
    Text,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Line,
            ShapeKind::ArrowLine,
            ShapeKind::Rect,
            ShapeKind::Circle,
            ShapeKind::Text,
        ]
    }
}

/// Distance from a point to a line segment (a to b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    (point - proj).hypot()
}

/// Minimum distance from a point to a polyline.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => (point - *only).hypot(),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point hits the rendered stroke of this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    fn style(&self) -> &ShapeStyle;

    /// Move the geometry by `delta` without changing its size.
    fn translate(&mut self, delta: Vec2);

    /// Whether the geometry is too small to keep once a gesture ends.
    fn is_degenerate(&self, min_extent: f64) -> bool;
}

/// Every shape the board can hold.
///
/// Serialized with a `type` tag (`line`, `arrow-line`, `rect`, `circle`, `text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Shape {
    Line(Polyline),
    ArrowLine(Polyline),
    Rect(Rectangle),
    #[serde(rename = "circle")]
    Ellipse(Ellipse),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::ArrowLine(s) => s.id(),
            Shape::Rect(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::ArrowLine(_) => ShapeKind::ArrowLine,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Ellipse(_) => ShapeKind::Circle,
            Shape::Text(_) => ShapeKind::Text,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::ArrowLine(s) => s.bounds(),
            Shape::Rect(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(point, tolerance),
            Shape::ArrowLine(s) => s.hit_test(point, tolerance),
            Shape::Rect(s) => s.hit_test(point, tolerance),
            Shape::Ellipse(s) => s.hit_test(point, tolerance),
            Shape::Text(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::ArrowLine(s) => s.style(),
            Shape::Rect(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::ArrowLine(s) => s.translate(delta),
            Shape::Rect(s) => s.translate(delta),
            Shape::Ellipse(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
        }
    }

    /// Copy of this shape moved by `delta`, keeping the same id.
    pub fn translated(&self, delta: Vec2) -> Shape {
        let mut shape = self.clone();
        shape.translate(delta);
        shape
    }

    pub fn is_degenerate(&self, min_extent: f64) -> bool {
        match self {
            Shape::Line(s) => s.is_degenerate(min_extent),
            Shape::ArrowLine(s) => s.is_degenerate(min_extent),
            Shape::Rect(s) => s.is_degenerate(min_extent),
            Shape::Ellipse(s) => s.is_degenerate(min_extent),
            Shape::Text(s) => s.is_degenerate(min_extent),
        }
    }

    /// Get the text if this shape is a text.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Whether this is a text shape currently open in the text editor.
    pub fn is_editing_text(&self) -> bool {
        self.as_text().is_some_and(|t| t.editing)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Shape::Text(text)
    }
}

pub(crate) fn new_shape_id() -> ShapeId {
    Uuid::new_v4()
}
