//! Error infrastructure for duel-core.
//!
//! Turn resolution never fails: malformed commands are normalized and illegal
//! moves become no-ops. The only fallible operations are the ones that build a
//! state from external input (board generation, scenario setup), and they all
//! report [`SetupError`].

use crate::state::Position;

/// Structural problems detected while building a match state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("board size {size} must be odd and at least {min}")]
    InvalidBoardSize { size: u32, min: u32 },

    #[error("soft wall ratio {ratio} must be within [0, 1]")]
    InvalidSoftWallRatio { ratio: f64 },

    #[error("spawn {position:?} lies outside the playable area of a {size}x{size} board")]
    SpawnOutOfBounds { position: Position, size: u32 },

    #[error("both players spawn at {position:?}")]
    SharedSpawn { position: Position },

    #[error("{piece} at {position:?} is off the board")]
    PieceOutOfBounds {
        piece: &'static str,
        position: Position,
    },

    #[error("{piece} at {position:?} sits on a blocking cell")]
    PieceOnBlockedCell {
        piece: &'static str,
        position: Position,
    },

    #[error("tile grid has {actual} cells, expected {expected}")]
    TileCountMismatch { expected: usize, actual: usize },
}

impl SetupError {
    /// Static identifier for the variant, used in logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBoardSize { .. } => "invalid_board_size",
            Self::InvalidSoftWallRatio { .. } => "invalid_soft_wall_ratio",
            Self::SpawnOutOfBounds { .. } => "spawn_out_of_bounds",
            Self::SharedSpawn { .. } => "shared_spawn",
            Self::PieceOutOfBounds { .. } => "piece_out_of_bounds",
            Self::PieceOnBlockedCell { .. } => "piece_on_blocked_cell",
            Self::TileCountMismatch { .. } => "tile_count_mismatch",
        }
    }
}
