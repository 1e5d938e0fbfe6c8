use crate::types::TileId;

/// Errors raised by settings, card and session operations.
///
/// Win detection itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BingoError {
    #[display("invalid grid size {_0:?} (expected 3x3, 5x5 or 7x7)")]
    InvalidGridSize(String),

    #[display("invalid tile id {_0:?} (expected \"<row>-<col>\")")]
    InvalidTileId(String),

    #[display("tile {tile} is not on a {grid_size}x{grid_size} card")]
    TileOutOfRange { tile: TileId, grid_size: usize },

    #[display(
        "not enough unique items for a {grid_size}x{grid_size} card: need {needed}, got {available}"
    )]
    NotEnoughItems {
        grid_size: usize,
        needed: usize,
        available: usize,
    },

    #[display("invalid settings: {_0}")]
    InvalidSettings(String),
}

impl std::error::Error for BingoError {}
