//! Tile and piece errors.

use crate::coord::Coordinate;
use crate::error::{ErrorSeverity, GridError};

use super::piece::{CharacteristicKind, PieceHandle};

/// Errors raised while placing, moving, or decorating pieces.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileError {
    /// Coordinate is outside the grid.
    #[error("Coordinate {coordinate} is out of bounds (grid size: {width}x{height})")]
    OutOfBounds {
        coordinate: Coordinate,
        width: u32,
        height: u32,
    },

    /// Tile already holds the maximum number of pieces.
    #[error("Tile {coordinate} is full (max: {max})")]
    TileFull { coordinate: Coordinate, max: usize },

    /// No tile holds a piece with this handle.
    #[error("Piece {0} not found on the grid")]
    PieceNotFound(PieceHandle),

    /// Piece already carries a characteristic of this kind.
    #[error("Piece {piece} already has a {kind} characteristic")]
    DuplicateCharacteristic {
        piece: PieceHandle,
        kind: CharacteristicKind,
    },

    /// Piece has no room for another characteristic.
    #[error("Piece {piece} cannot hold more characteristics (max: {max})")]
    CharacteristicsFull { piece: PieceHandle, max: usize },
}

impl GridError for TileError {
    fn severity(&self) -> ErrorSeverity {
        use TileError::*;
        match self {
            TileFull { .. } => ErrorSeverity::Recoverable,
            OutOfBounds { .. }
            | PieceNotFound(_)
            | DuplicateCharacteristic { .. }
            | CharacteristicsFull { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use TileError::*;
        match self {
            OutOfBounds { .. } => "TILE_OUT_OF_BOUNDS",
            TileFull { .. } => "TILE_FULL",
            PieceNotFound(_) => "TILE_PIECE_NOT_FOUND",
            DuplicateCharacteristic { .. } => "TILE_DUPLICATE_CHARACTERISTIC",
            CharacteristicsFull { .. } => "TILE_CHARACTERISTICS_FULL",
        }
    }
}
