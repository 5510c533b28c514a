//! Selection box geometry and drag-to-move state.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect, Vec2};

/// Handle size in surface pixels.
pub const HANDLE_SIZE: f64 = 8.0;
/// Handle hit tolerance in surface pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 6.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Type of selection box handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Corner marker of the frame.
    Corner(Corner),
    /// Delete button just outside the top-right corner.
    Close,
}

/// A selection box handle with its position and type.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in surface coordinates.
    pub position: Point,
    /// Handle type.
    pub kind: HandleKind,
}

impl Handle {
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point - self.position).hypot2() <= tolerance * tolerance
    }
}

/// Frame and handles drawn around the selected shape.
#[derive(Debug, Clone)]
pub struct SelectionBox {
    /// Shape the box belongs to.
    pub shape_id: ShapeId,
    /// Frame in surface coordinates, clamped to the surface.
    pub frame: Rect,
    handles: Vec<Handle>,
}

impl SelectionBox {
    /// Lay out the box for `shape` on a surface whose client-space bounds are `surface`.
    ///
    /// The frame pads the shape's bounds by half its stroke plus `margin`.
    pub fn for_shape(shape: &Shape, surface: Rect, margin: f64) -> Self {
        let pad = shape.style().stroke_width / 2.0 + margin;
        let padded = shape.bounds().inflate(pad, pad);
        let limits = Rect::from_origin_size(Point::ZERO, surface.size());
        let frame = Rect::new(
            padded.x0.max(limits.x0),
            padded.y0.max(limits.y0),
            padded.x1.min(limits.x1),
            padded.y1.min(limits.y1),
        );

        let handles = vec![
            Handle::new(Point::new(frame.x0, frame.y0), HandleKind::Corner(Corner::TopLeft)),
            Handle::new(Point::new(frame.x1, frame.y0), HandleKind::Corner(Corner::TopRight)),
            Handle::new(Point::new(frame.x0, frame.y1), HandleKind::Corner(Corner::BottomLeft)),
            Handle::new(Point::new(frame.x1, frame.y1), HandleKind::Corner(Corner::BottomRight)),
            Handle::new(
                Point::new(frame.x1 + HANDLE_SIZE, frame.y0 - HANDLE_SIZE),
                HandleKind::Close,
            ),
        ];

        Self {
            shape_id: shape.id(),
            frame,
            handles,
        }
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Position of the delete button.
    pub fn close_anchor(&self) -> Point {
        Point::new(self.frame.x1 + HANDLE_SIZE, self.frame.y0 - HANDLE_SIZE)
    }

    /// Which handle `point` hits; the close button wins over corners.
    pub fn hit_handle(&self, point: Point) -> Option<HandleKind> {
        let mut hits = self
            .handles
            .iter()
            .filter(|h| h.hit_test(point, HANDLE_HIT_TOLERANCE))
            .map(|h| h.kind);
        let first = hits.next()?;
        if first == HandleKind::Close {
            return Some(first);
        }
        Some(hits.find(|k| *k == HandleKind::Close).unwrap_or(first))
    }

    /// Whether `point` lies inside the frame (a drag start).
    pub fn contains(&self, point: Point) -> bool {
        self.frame.contains(point)
    }
}

/// State of an in-progress drag of the selected shape.
#[derive(Debug, Clone)]
pub struct MoveState {
    /// Starting point of the drag.
    pub start_point: Point,
    /// Current point of the drag.
    pub current_point: Point,
    /// Shape as it was when the drag started.
    pub original_shape: Shape,
}

impl MoveState {
    pub fn new(start_point: Point, original_shape: Shape) -> Self {
        Self {
            start_point,
            current_point: start_point,
            original_shape,
        }
    }

    pub fn shape_id(&self) -> ShapeId {
        self.original_shape.id()
    }

    /// Get the drag delta.
    pub fn delta(&self) -> Vec2 {
        self.current_point - self.start_point
    }

    /// Advance the drag to `point` and return the moved shape.
    pub fn apply(&mut self, point: Point) -> Shape {
        self.current_point = point;
        self.original_shape.translated(self.delta())
    }
}
