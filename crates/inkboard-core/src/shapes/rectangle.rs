//! Rectangle shape.

use super::{new_shape_id, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: new_shape_id(),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Size spanned from the anchor to `corner`, or `None` if either side
    /// would fall below `min_extent`.
    pub fn resized_to(&self, corner: Point, min_extent: f64) -> Option<Self> {
        let width = corner.x - self.position.x;
        let height = corner.y - self.position.y;
        if width < min_extent || height < min_extent {
            return None;
        }
        Some(Self {
            width,
            height,
            ..self.clone()
        })
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Outline only: hit on the border
        let rect = self.as_rect();
        let band = tolerance + self.style.stroke_width / 2.0;
        let outer = rect.inflate(band, band);
        let inner = rect.inflate(-band, -band);
        outer.contains(point) && !inner.contains(point)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn is_degenerate(&self, min_extent: f64) -> bool {
        self.width <= min_extent || self.height <= min_extent
    }
}
