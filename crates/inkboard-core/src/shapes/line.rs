//! Polyline geometry shared by lines and arrow lines.

use super::{new_shape_id, point_to_polyline_dist, ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// An ordered run of points, extended one point per pointer move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub(crate) id: ShapeId,
    /// Points in drawing order. Never empty.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polyline {
    /// Create a single-point polyline at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            id: new_shape_id(),
            points: vec![start],
            style: ShapeStyle::default(),
        }
    }

    /// Create a polyline from existing points; falls back to the origin when empty.
    pub fn from_points(points: Vec<Point>) -> Self {
        let points = if points.is_empty() {
            vec![Point::ZERO]
        } else {
            points
        };
        Self {
            id: new_shape_id(),
            points,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a point to the end of the run.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn end(&self) -> Point {
        self.points.last().copied().unwrap_or(Point::ZERO)
    }

    /// Total length along all segments.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).hypot()).sum()
    }

    /// Direction of the final segment, used to orient an arrow head.
    pub fn end_direction(&self) -> Option<Vec2> {
        let [.., a, b] = self.points.as_slice() else {
            return None;
        };
        let dir = *b - *a;
        if dir.hypot2() < f64::EPSILON {
            None
        } else {
            Some(dir.normalize())
        }
    }
}

impl ShapeTrait for Polyline {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(*first, *first), |acc, p| {
                acc.union_pt(*p)
            })
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_polyline_dist(point, &self.points) <= tolerance + self.style.stroke_width / 2.0
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    fn is_degenerate(&self, _min_extent: f64) -> bool {
        self.points.len() < 2
    }
}
