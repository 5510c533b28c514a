//! Error types for the fallible edges of the board.
//!
//! Pointer interaction never fails; rejected gestures are silent no-ops.
//! Errors only arise when data crosses into or out of the board.

use crate::shapes::{ColorParseError, ShapeId};
use thiserror::Error;

/// Board errors.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate shape id in document: {0}")]
    DuplicateShape(ShapeId),
    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
