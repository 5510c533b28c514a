//! Headless gesture replay.
//!
//! Reads a JSON script of toolbar, pointer, text and selection steps, drives
//! a board through the pointer controller and prints the resulting document.
//!
//! ```json
//! {
//!   "surface": { "x0": 0, "y0": 0, "x1": 800, "y1": 600 },
//!   "steps": [
//!     { "action": "tool", "kind": "rect", "color": "#f55a6c" },
//!     { "action": "down", "x": 10, "y": 10 },
//!     { "action": "move", "x": 50, "y": 80 },
//!     { "action": "up", "x": 50, "y": 80 }
//!   ]
//! }
//! ```

use inkboard_core::{
    Board, BoardConfig, BoardDocument, BoardError, EventSource, PointerButton, PointerController,
    PointerEvent, SerializableColor, ShapeId, ShapeKind, Tool,
};
use kurbo::{Point, Rect, Vec2};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
enum ReplayError {
    #[error("usage: inkboard-replay <script.json>")]
    Usage,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("Step {step}: no shape at index {index}")]
    NoShape { step: usize, index: usize },
}

type ReplayResult<T> = Result<T, ReplayError>;

fn default_surface() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

fn default_width() -> f64 {
    4.0
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    config: BoardConfig,
    /// Client-space bounds of the drawing surface.
    #[serde(default = "default_surface")]
    surface: Rect,
    /// Document loaded before the first step.
    #[serde(default)]
    document: Option<BoardDocument>,
    steps: Vec<Step>,
}

impl Script {
    fn load(path: &Path) -> ReplayResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// One scripted interaction. Shapes are addressed by z-order index.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
enum Step {
    Tool {
        kind: ShapeKind,
        #[serde(default = "default_width")]
        width: f64,
        #[serde(default)]
        color: Option<String>,
    },
    SelectMode,
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        source: EventSource,
    },
    Select {
        index: usize,
    },
    MoveBy {
        dx: f64,
        dy: f64,
    },
    CloseSelection,
    Delete,
    CommitText {
        index: usize,
        words: String,
    },
    EditText {
        index: usize,
    },
    Undo,
    Redo,
    Clear,
}

fn shape_id(board: &Board, step: usize, index: usize) -> ReplayResult<ShapeId> {
    board
        .store()
        .shapes()
        .get(index)
        .map(|s| s.id())
        .ok_or(ReplayError::NoShape { step, index })
}

fn replay(script: Script) -> ReplayResult<Board> {
    let mut board = Board::with_config(script.config);
    if let Some(document) = script.document {
        board.load_document(document)?;
    }
    let mut controller = PointerController::new();
    controller.mount(script.surface);

    for (n, step) in script.steps.into_iter().enumerate() {
        log::debug!("step {}: {:?}", n, step);
        match step {
            Step::Tool { kind, width, color } => {
                let color = match color {
                    Some(hex) => SerializableColor::from_hex(&hex).map_err(BoardError::from)?,
                    None => SerializableColor::black(),
                };
                board.select_tool(Tool::new(kind, width, color));
            }
            Step::SelectMode => board.enter_select_mode(),
            Step::Down { x, y, button } => {
                let event =
                    PointerEvent::down(Point::new(x, y)).with_button(button, button.mask());
                let handled = controller.pointer_down(&mut board, &event)
                    || controller.begin_move(&mut board, &event);
                if !handled {
                    log::trace!("step {}: press ignored", n);
                }
            }
            Step::Move { x, y } => {
                let event = PointerEvent::drag(Point::new(x, y));
                if controller.is_dragging() {
                    controller.drag_move(&mut board, &event);
                } else {
                    controller.pointer_move(&mut board, &event);
                }
            }
            Step::Up { x, y, source } => {
                let event = PointerEvent::up(Point::new(x, y)).with_source(source);
                controller.pointer_up(&mut board, &event);
            }
            Step::Select { index } => {
                let id = shape_id(&board, n, index)?;
                controller.select_shape(&mut board, id);
            }
            Step::MoveBy { dx, dy } => {
                controller.move_selected_by(&mut board, Vec2::new(dx, dy));
            }
            Step::CloseSelection => {
                controller.close_selection(&mut board);
            }
            Step::Delete => {
                board.delete_selected();
            }
            Step::CommitText { index, words } => {
                let id = shape_id(&board, n, index)?;
                controller.commit_text(&mut board, id, words);
            }
            Step::EditText { index } => {
                let id = shape_id(&board, n, index)?;
                controller.begin_text_edit(&mut board, id);
            }
            Step::Undo => {
                board.undo();
            }
            Step::Redo => {
                board.redo();
            }
            Step::Clear => board.clear_board(),
        }
    }
    Ok(board)
}

fn run() -> ReplayResult<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(ReplayError::Usage)?;
    let script = Script::load(&path)?;
    let board = replay(script)?;
    log::info!("replayed {} into {} shapes", path.display(), board.store().len());
    let json = board.to_document().to_json().map_err(BoardError::from)?;
    println!("{}", json);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
