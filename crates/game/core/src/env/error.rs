//! Maze layout errors.

use crate::error::{CoreError, ErrorSeverity};
use crate::state::TilePosition;

/// Errors raised while building or querying a maze layout.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MazeError {
    #[error("maze layout has no tiles")]
    EmptyLayout,

    #[error("layout row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: TilePosition },

    #[error("tile {position} is outside the maze")]
    OutOfBounds { position: TilePosition },

    #[error("tile size must be positive and finite, got {tile_size}")]
    InvalidTileSize { tile_size: f32 },
}

impl CoreError for MazeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MazeError::OutOfBounds { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MazeError::EmptyLayout => "MAZE_EMPTY_LAYOUT",
            MazeError::RaggedRow { .. } => "MAZE_RAGGED_ROW",
            MazeError::UnknownGlyph { .. } => "MAZE_UNKNOWN_GLYPH",
            MazeError::OutOfBounds { .. } => "MAZE_OUT_OF_BOUNDS",
            MazeError::InvalidTileSize { .. } => "MAZE_INVALID_TILE_SIZE",
        }
    }
}
