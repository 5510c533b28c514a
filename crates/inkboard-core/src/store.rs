//! Committed shapes, redo history and the current selection.

use crate::shapes::{Shape, ShapeId};
use crate::tools::DrawMode;
use kurbo::Point;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Change notifications delivered to subscribers after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    ShapeAdded(ShapeId),
    ShapeUpdated(ShapeId),
    ShapeRemoved(ShapeId),
    /// The shape was moved from the committed sequence to the redo stack.
    Undone(ShapeId),
    /// The shape was moved from the redo stack back to the committed sequence.
    Redone(ShapeId),
    RedoCleared,
    BoardCleared,
    /// A document replaced the committed sequence.
    DocumentLoaded,
    SelectionChanged(Option<ShapeId>),
    ModeChanged(DrawMode),
}

/// Ordered shape list (append order is z-order) plus redo stack and selection.
///
/// All mutation goes through methods here so subscribers see every change.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    redo_stack: Vec<Shape>,
    selected: Option<ShapeId>,
    revision: u64,
    subscribers: Vec<Sender<BoardEvent>>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register for change notifications.
    ///
    /// Dropping the receiver unsubscribes; it is pruned on the next event.
    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: BoardEvent) {
        self.revision += 1;
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Counter bumped on every change; renderers can skip redraws when it is unchanged.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a shape as a fresh edit. Invalidates redo history.
    pub fn add(&mut self, shape: Shape) {
        self.clear_redo();
        self.push_provisional(shape);
    }

    /// Append a shape without touching redo history.
    ///
    /// Used for the shape a gesture starts with; whether it invalidates redo
    /// is decided once the gesture ends.
    pub(crate) fn push_provisional(&mut self, shape: Shape) {
        let id = shape.id();
        self.shapes.push(shape);
        log::debug!("shape added: {}", id);
        self.emit(BoardEvent::ShapeAdded(id));
    }

    /// Replace the shape with identifier `id`, keeping its position.
    ///
    /// Returns false if no shape matches or the replacement carries a
    /// different id; both leave the store unchanged.
    pub fn update(&mut self, id: ShapeId, shape: Shape) -> bool {
        if shape.id() != id {
            log::warn!("rejected update of {} with shape {}", id, shape.id());
            return false;
        }
        let Some(slot) = self.shapes.iter_mut().find(|s| s.id() == id) else {
            log::debug!("update ignored, no shape {}", id);
            return false;
        };
        *slot = shape;
        log::trace!("shape updated: {}", id);
        self.emit(BoardEvent::ShapeUpdated(id));
        true
    }

    /// Delete the shape with identifier `id`. Always clears the selection.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self
            .shapes
            .iter()
            .position(|s| s.id() == id)
            .map(|pos| self.shapes.remove(pos));
        if removed.is_some() {
            log::debug!("shape removed: {}", id);
            self.emit(BoardEvent::ShapeRemoved(id));
        }
        self.clear_selection();
        removed
    }

    /// Move the last committed shape onto the redo stack.
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(shape) = self.shapes.pop() else {
            return false;
        };
        let id = shape.id();
        self.redo_stack.push(shape);
        if self.selected == Some(id) {
            self.clear_selection();
        }
        log::debug!("undo: {}", id);
        self.emit(BoardEvent::Undone(id));
        true
    }

    /// Move the last undone shape back onto the committed sequence.
    /// Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(shape) = self.redo_stack.pop() else {
            return false;
        };
        let id = shape.id();
        self.shapes.push(shape);
        log::debug!("redo: {}", id);
        self.emit(BoardEvent::Redone(id));
        true
    }

    /// Drop redo history without touching committed shapes.
    pub fn clear_redo(&mut self) {
        if self.redo_stack.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.emit(BoardEvent::RedoCleared);
    }

    /// Remove every committed shape and all redo history.
    pub fn clear_board(&mut self) {
        self.shapes.clear();
        self.redo_stack.clear();
        self.selected = None;
        log::debug!("board cleared");
        self.emit(BoardEvent::BoardCleared);
    }

    /// Replace the committed sequence wholesale, dropping redo history and selection.
    pub(crate) fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.redo_stack.clear();
        self.selected = None;
        self.emit(BoardEvent::DocumentLoaded);
    }

    /// Select a committed shape.
    /// Returns false if the shape is unknown or already selected.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.selected == Some(id) || self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        self.emit(BoardEvent::SelectionChanged(Some(id)));
        true
    }

    /// Returns false if nothing was selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.emit(BoardEvent::SelectionChanged(None));
        true
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// The selected shape with its current geometry.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Remove the selected shape, if any.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selected?;
        self.remove(id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// The most recently appended shape.
    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Committed shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Undone shapes; the last entry is restored first.
    pub fn redo_shapes(&self) -> &[Shape] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Topmost shape whose stroke is within `tolerance` of `point`.
    pub fn shape_at(&self, point: Point, tolerance: f64) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, tolerance))
            .map(Shape::id)
    }

    /// The text shape currently open in the editor, if any.
    pub fn editing_text(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.is_editing_text())
    }
}
