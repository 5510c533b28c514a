//! Ellipse shape.

use super::{new_shape_id, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse described by its center and radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: new_shape_id(),
            center,
            radius_x,
            radius_y,
            style: ShapeStyle::default(),
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Radii reaching from the center to `point`, or `None` if either radius
    /// would fall below `min_extent`.
    pub fn resized_to(&self, point: Point, min_extent: f64) -> Option<Self> {
        let radius_x = point.x - self.center.x;
        let radius_y = point.y - self.center.y;
        if radius_x < min_extent || radius_y < min_extent {
            return None;
        }
        Some(Self {
            radius_x,
            radius_y,
            ..self.clone()
        })
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let band = tolerance + self.style.stroke_width / 2.0;
        let dx_outer = (point.x - self.center.x) / (self.radius_x + band);
        let dy_outer = (point.y - self.center.y) / (self.radius_y + band);
        if dx_outer * dx_outer + dy_outer * dy_outer > 1.0 {
            return false;
        }
        // Outline only: reject if inside inner ellipse
        let inner_rx = (self.radius_x - band).max(0.0);
        let inner_ry = (self.radius_y - band).max(0.0);
        if inner_rx < f64::EPSILON || inner_ry < f64::EPSILON {
            return true;
        }
        let dx_inner = (point.x - self.center.x) / inner_rx;
        let dy_inner = (point.y - self.center.y) / inner_ry;
        dx_inner * dx_inner + dy_inner * dy_inner > 1.0
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    fn is_degenerate(&self, min_extent: f64) -> bool {
        self.radius_x <= min_extent || self.radius_y <= min_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_creation() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        assert!((ellipse.center.x - 50.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_x - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resized_to() {
        let ellipse = Ellipse::circle(Point::new(10.0, 10.0), 1.0);
        let resized = ellipse.resized_to(Point::new(40.0, 30.0), 1.0).unwrap();
        assert!((resized.radius_x - 30.0).abs() < f64::EPSILON);
        assert!((resized.radius_y - 20.0).abs() < f64::EPSILON);
        assert!(ellipse.resized_to(Point::new(0.0, 30.0), 1.0).is_none());
    }

    #[test]
    fn test_hit_test_outline() {
        let circle = Ellipse::circle(Point::new(0.0, 0.0), 10.0);
        assert!(circle.hit_test(Point::new(10.0, 0.0), 0.0));
        assert!(!circle.hit_test(Point::new(15.0, 0.0), 0.0));
        assert!(!circle.hit_test(Point::new(0.0, 0.0), 0.0));
    }

    #[test]
    fn test_degenerate() {
        assert!(Ellipse::new(Point::ZERO, 1.0, 10.0).is_degenerate(1.0));
        assert!(!Ellipse::new(Point::ZERO, 2.0, 10.0).is_degenerate(1.0));
    }

    #[test]
    fn test_bounds() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
