//! Inkboard Core Library
//!
//! Platform-agnostic shape store and pointer interaction for the inkboard
//! drawing widget. Hosts render the shapes and feed pointer events in.

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod render;
pub mod selection;
pub mod shapes;
pub mod store;
pub mod tools;

pub use board::{Board, BoardDocument};
pub use config::BoardConfig;
pub use controller::PointerController;
pub use error::{BoardError, BoardResult};
pub use input::{EventSource, PointerButton, PointerEvent};
pub use render::RenderLayers;
pub use selection::{Corner, Handle, HandleKind, MoveState, SelectionBox};
pub use shapes::{Palette, SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle};
pub use store::{BoardEvent, ShapeStore};
pub use tools::{DrawMode, Tool};
