//! Board state: the shape store plus mode, active tool and gesture flag.

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::render::RenderLayers;
use crate::shapes::Shape;
use crate::store::{BoardEvent, ShapeStore};
use crate::tools::{DrawMode, Tool};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::mpsc::Receiver;
use uuid::Uuid;

/// Serializable snapshot of the committed shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Committed shapes in z-order.
    pub shapes: Vec<Shape>,
}

impl Default for BoardDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            shapes: Vec::new(),
        }
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One drawing surface's worth of state.
///
/// Owned by the host and passed to the controller by reference; boards never
/// share state with each other.
#[derive(Debug)]
pub struct Board {
    store: ShapeStore,
    mode: DrawMode,
    tool: Option<Tool>,
    drawing: bool,
    config: BoardConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board in draw mode with the default tool.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            mode: DrawMode::Draw,
            tool: Some(config.default_tool),
            drawing: false,
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ShapeStore {
        &mut self.store
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// The tool the next draw gesture uses, if one is armed.
    pub fn tool(&self) -> Option<&Tool> {
        self.tool.as_ref()
    }

    /// True between a draw pointer-down and its pointer-up.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub(crate) fn set_drawing(&mut self, drawing: bool) {
        self.drawing = drawing;
    }

    fn set_mode(&mut self, mode: DrawMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        log::debug!("mode changed: {:?}", mode);
        self.store.emit(BoardEvent::ModeChanged(mode));
    }

    /// Arm a tool and switch to draw mode (toolbar pick).
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = Some(tool);
        self.set_mode(DrawMode::Draw);
    }

    /// Switch to select mode and disarm the tool.
    pub fn enter_select_mode(&mut self) {
        self.tool = None;
        self.set_mode(DrawMode::Select);
    }

    /// Register for change notifications.
    pub fn subscribe(&mut self) -> Receiver<BoardEvent> {
        self.store.subscribe()
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    pub fn clear_board(&mut self) {
        self.store.clear_board();
    }

    /// Toolbar delete: remove the selected shape.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        self.store.delete_selected()
    }

    /// Committed shapes split into the layers the renderer draws.
    pub fn render_layers(&self) -> RenderLayers<'_> {
        RenderLayers::partition(self.store.shapes())
    }

    /// Snapshot the committed shapes.
    pub fn to_document(&self) -> BoardDocument {
        BoardDocument {
            shapes: self.store.shapes().to_vec(),
            ..BoardDocument::new()
        }
    }

    /// Replace the committed shapes with a document's.
    ///
    /// Redo history and selection are dropped. Fails without changing the
    /// board if the document repeats a shape id.
    pub fn load_document(&mut self, document: BoardDocument) -> BoardResult<()> {
        let mut seen = HashSet::new();
        for shape in &document.shapes {
            if !seen.insert(shape.id()) {
                return Err(BoardError::DuplicateShape(shape.id()));
            }
        }
        log::debug!(
            "loading document {} with {} shapes",
            document.id,
            document.shapes.len()
        );
        self.store.replace_all(document.shapes);
        self.drawing = false;
        Ok(())
    }

    /// Parse and load a JSON document.
    pub fn load_json(&mut self, json: &str) -> BoardResult<()> {
        let document = BoardDocument::from_json(json)?;
        self.load_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Palette, Rectangle, ShapeKind};
    use kurbo::Point;

    #[test]
    fn test_new_board_draws_with_default_tool() {
        let board = Board::new();
        assert_eq!(board.mode(), DrawMode::Draw);
        assert_eq!(board.tool().map(|t| t.kind), Some(ShapeKind::Line));
        assert!(!board.is_drawing());
        assert!(board.store().is_empty());
    }

    #[test]
    fn test_select_tool_enters_draw_mode() {
        let mut board = Board::new();
        board.enter_select_mode();
        assert_eq!(board.mode(), DrawMode::Select);
        assert!(board.tool().is_none());

        board.select_tool(Tool::new(ShapeKind::Rect, 2.0, Palette::Green.color()));
        assert_eq!(board.mode(), DrawMode::Draw);
        assert_eq!(board.tool().map(|t| t.kind), Some(ShapeKind::Rect));
    }

    #[test]
    fn test_mode_change_notifies_once() {
        let mut board = Board::new();
        let rx = board.subscribe();
        board.enter_select_mode();
        board.enter_select_mode();
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events, vec![BoardEvent::ModeChanged(DrawMode::Select)]);
    }

    #[test]
    fn test_document_roundtrip() {
        let mut board = Board::new();
        board
            .store_mut()
            .add(Rectangle::new(Point::new(1.0, 2.0), 30.0, 40.0).into());
        let json = board.to_document().to_json().unwrap();

        let mut other = Board::new();
        other.load_json(&json).unwrap();
        assert_eq!(other.store().shapes(), board.store().shapes());
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let rect: Shape = Rectangle::new(Point::ZERO, 10.0, 10.0).into();
        let document = BoardDocument {
            shapes: vec![rect.clone(), rect],
            ..BoardDocument::new()
        };
        let mut board = Board::new();
        let existing: Shape = Rectangle::new(Point::ZERO, 5.0, 5.0).into();
        board.store_mut().add(existing);

        let err = board.load_document(document).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateShape(_)));
        assert_eq!(board.store().len(), 1);
    }

    #[test]
    fn test_load_drops_history() {
        let mut board = Board::new();
        let a: Shape = Rectangle::new(Point::ZERO, 10.0, 10.0).into();
        let ida = a.id();
        board.store_mut().add(a);
        board.store_mut().add(Rectangle::new(Point::ZERO, 20.0, 20.0).into());
        board.store_mut().select(ida);
        board.undo();

        board.load_document(BoardDocument::new()).unwrap();
        assert!(board.store().is_empty());
        assert!(!board.store().can_redo());
        assert_eq!(board.store().selected(), None);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut board = Board::new();
        let err = board.load_json("{ not json").unwrap_err();
        assert!(matches!(err, BoardError::Serialization(_)));
    }
}
