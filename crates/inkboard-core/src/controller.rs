//! Pointer interaction: turns raw pointer events into shape edits.
//!
//! In draw mode a press creates a provisional shape from the active tool,
//! moves extend it and the release keeps or discards it. In select mode
//! clicks pick shapes and the selection box drags or deletes them.

use crate::board::Board;
use crate::input::{EventSource, PointerEvent};
use crate::selection::{MoveState, SelectionBox};
use crate::shapes::{Shape, ShapeId};
use crate::tools::{extend_shape, DrawMode};
use kurbo::{Point, Rect, Vec2};

/// Drives a [`Board`] from pointer events on one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct PointerController {
    /// Client-space bounds of the drawing surface; `None` until mounted.
    surface: Option<Rect>,
    /// Shape created by the current draw gesture.
    provisional: Option<ShapeId>,
    /// In-progress drag of the selected shape.
    drag: Option<MoveState>,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to a drawing surface with the given client-space bounds.
    /// Also used when the surface is resized or scrolled.
    pub fn mount(&mut self, surface: Rect) {
        log::debug!("surface mounted at {:?}", surface);
        self.surface = Some(surface);
    }

    /// Detach from the surface; every pointer event is ignored until remounted.
    pub fn unmount(&mut self) {
        self.surface = None;
        self.provisional = None;
        self.drag = None;
    }

    pub fn surface(&self) -> Option<Rect> {
        self.surface
    }

    /// Convert a client position into surface coordinates.
    ///
    /// Returns `None` when the surface is not mounted or the position falls
    /// outside it.
    pub fn relative_position(&self, client: Point) -> Option<Point> {
        let surface = self.surface?;
        let point = Point::new(client.x - surface.x0, client.y - surface.y0);
        let inside = point.x >= 0.0
            && point.y >= 0.0
            && point.x <= surface.width()
            && point.y <= surface.height();
        inside.then_some(point)
    }

    /// Handle a press on the drawing surface.
    ///
    /// Returns true if a provisional shape was created.
    pub fn pointer_down(&mut self, board: &mut Board, event: &PointerEvent) -> bool {
        if !event.is_primary_only() {
            log::trace!("ignoring press of {:?} ({:#b})", event.button, event.buttons);
            return false;
        }
        let Some(point) = self.relative_position(event.position) else {
            return false;
        };
        if board.mode() != DrawMode::Draw {
            return false;
        }

        board.set_drawing(true);
        self.provisional = None;

        if let Some(text) = board.store().editing_text() {
            log::debug!("draw suppressed while text {} is being edited", text.id());
            return false;
        }
        let Some(tool) = board.tool().copied() else {
            return false;
        };

        let shape = tool.create_shape(point, &board.config().placeholder_text);
        log::debug!("begin {:?} at ({}, {})", tool.kind, point.x, point.y);
        self.provisional = Some(shape.id());
        board.store_mut().push_provisional(shape);
        true
    }

    /// Handle pointer motion over the drawing surface.
    ///
    /// Returns true if the provisional shape changed.
    pub fn pointer_move(&mut self, board: &mut Board, event: &PointerEvent) -> bool {
        let Some(point) = self.relative_position(event.position) else {
            return false;
        };
        if board.mode() != DrawMode::Draw || !board.is_drawing() {
            return false;
        }
        let Some(id) = self.provisional else {
            return false;
        };
        // The provisional shape must still be the topmost one.
        let Some(last) = board.store().last().filter(|s| s.id() == id) else {
            return false;
        };
        let Some(extended) = extend_shape(last, point, board.config().min_extent) else {
            return false;
        };
        board.store_mut().update(id, extended)
    }

    /// Handle a release anywhere on the page.
    ///
    /// Ends a draw gesture (discarding degenerate results) and drops into
    /// select mode; in select mode it resolves the click into a selection.
    pub fn pointer_up(&mut self, board: &mut Board, event: &PointerEvent) {
        self.drag = None;
        if event.source.is_ignored_on_release() {
            return;
        }

        let mode = board.mode();
        if mode == DrawMode::Draw {
            board.set_drawing(false);
            let provisional = self.provisional.take();
            self.finish_gesture(board, provisional);
        }

        if mode != DrawMode::Select {
            board.enter_select_mode();
        } else {
            self.resolve_click(board, event);
        }
    }

    /// Cleanup pass run once a draw gesture ends.
    ///
    /// Checks the shape the gesture created, or the last committed shape when
    /// the press created none. A degenerate shape is removed outright;
    /// otherwise the completed edit invalidates redo history. Returns the
    /// removed shape's id.
    pub fn finish_gesture(
        &mut self,
        board: &mut Board,
        provisional: Option<ShapeId>,
    ) -> Option<ShapeId> {
        let min_extent = board.config().min_extent;
        let shape = match provisional {
            Some(id) => board.store().get(id)?,
            None => board.store().last()?,
        };
        if shape.is_degenerate(min_extent) {
            let id = shape.id();
            log::debug!("discarding degenerate {:?} {}", shape.kind(), id);
            board.store_mut().remove(id);
            Some(id)
        } else {
            board.store_mut().clear_redo();
            None
        }
    }

    fn resolve_click(&mut self, board: &mut Board, event: &PointerEvent) {
        match event.source {
            EventSource::Shape(id) => {
                self.select_shape(board, id);
            }
            _ => {
                let tolerance = board.config().hit_tolerance;
                let hit = self
                    .relative_position(event.position)
                    .and_then(|p| board.store().shape_at(p, tolerance));
                match hit {
                    Some(id) => {
                        self.select_shape(board, id);
                    }
                    None => {
                        board.store_mut().clear_selection();
                    }
                }
            }
        }
    }

    /// Click on a rendered shape. Clicking the already selected shape is a no-op.
    pub fn select_shape(&mut self, board: &mut Board, id: ShapeId) -> bool {
        let selected = board.store_mut().select(id);
        if selected {
            log::debug!("selected {}", id);
        }
        selected
    }

    /// Selection box is the only UI while a shape is selected.
    pub fn selection_box(&self, board: &Board) -> Option<SelectionBox> {
        let surface = self.surface?;
        let shape = board.store().selected_shape()?;
        Some(SelectionBox::for_shape(
            shape,
            surface,
            board.config().selection_margin,
        ))
    }

    /// Replace the selected shape's geometry with `shape`.
    ///
    /// `shape` must carry the selected shape's id.
    pub fn moving(&mut self, board: &mut Board, shape: Shape) -> bool {
        let Some(id) = board.store().selected() else {
            return false;
        };
        board.store_mut().update(id, shape)
    }

    /// Translate the selected shape by `delta`.
    pub fn move_selected_by(&mut self, board: &mut Board, delta: Vec2) -> bool {
        let Some(moved) = board.store().selected_shape().map(|s| s.translated(delta)) else {
            return false;
        };
        self.moving(board, moved)
    }

    /// Selection box delete button.
    pub fn close_selection(&mut self, board: &mut Board) -> Option<Shape> {
        self.drag = None;
        board.delete_selected()
    }

    /// Start dragging the selected shape if `event` presses inside its selection box.
    pub fn begin_move(&mut self, board: &mut Board, event: &PointerEvent) -> bool {
        if board.mode() != DrawMode::Select || !event.is_primary_only() {
            return false;
        }
        let Some(point) = self.relative_position(event.position) else {
            return false;
        };
        let Some(sbox) = self.selection_box(board) else {
            return false;
        };
        if !sbox.contains(point) {
            return false;
        }
        let Some(shape) = board.store().selected_shape().cloned() else {
            return false;
        };
        self.drag = Some(MoveState::new(point, shape));
        true
    }

    /// Continue a drag started by [`begin_move`](Self::begin_move).
    pub fn drag_move(&mut self, board: &mut Board, event: &PointerEvent) -> bool {
        let Some(point) = self.relative_position(event.position) else {
            return false;
        };
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let moved = drag.apply(point);
        self.moving(board, moved)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Text editor commit: store `words` and close the editor.
    pub fn commit_text(&mut self, board: &mut Board, id: ShapeId, words: String) -> bool {
        let Some(Shape::Text(text)) = board.store().get(id) else {
            return false;
        };
        let mut text = text.clone();
        text.commit(words);
        board.store_mut().update(id, Shape::Text(text))
    }

    /// Double-click on a static text reopens it in the editor.
    pub fn begin_text_edit(&mut self, board: &mut Board, id: ShapeId) -> bool {
        let Some(Shape::Text(text)) = board.store().get(id) else {
            return false;
        };
        if text.editing {
            return false;
        }
        let mut text = text.clone();
        text.editing = true;
        board.store_mut().update(id, Shape::Text(text))
    }
}
