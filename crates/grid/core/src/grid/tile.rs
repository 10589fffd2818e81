use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::GridConfig;
use crate::coord::Coordinate;

use super::TileError;
use super::piece::{Characteristic, CharacteristicKind, Piece, PieceHandle, PieceType};

bitflags! {
    /// Selection state of a tile. Flags combine freely.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileState: u8 {
        const GENERIC    = 1 << 0;
        const SELECTABLE = 1 << 1;
        const VALID      = 1 << 2;
        const INVALID    = 1 << 3;
    }
}

impl Default for TileState {
    fn default() -> Self {
        TileState::GENERIC
    }
}

pub(crate) type PieceSlots = ArrayVec<Piece, { GridConfig::MAX_PIECES_PER_TILE }>;

/// One addressable grid cell: the pieces stacked on it and its selection state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Tile {
    pieces: PieceSlots,
    state: TileState,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitwise OR of every placed piece's id on top of `GENERIC`, or `NONE`
    /// when the tile is empty.
    pub fn piece_id(&self) -> PieceType {
        if self.pieces.is_empty() {
            return PieceType::NONE;
        }

        self.pieces
            .iter()
            .fold(PieceType::GENERIC, |id, piece| id | piece.id())
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// True when the tile carries nothing a sparse store needs to remember.
    pub fn is_blank(&self) -> bool {
        self.pieces.is_empty() && self.state == TileState::GENERIC
    }

    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn first_piece(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    pub fn find_piece(&self, handle: PieceHandle) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.handle() == handle)
    }

    /// Places `piece` here. Placing a piece that is already on the tile is a no-op.
    pub fn place_piece(
        &mut self,
        coordinate: Coordinate,
        mut piece: Piece,
    ) -> Result<(), TileError> {
        if self.find_piece(piece.handle()).is_some() {
            return Ok(());
        }

        piece.set_coordinate(coordinate);
        self.pieces.try_push(piece).map_err(|_| TileError::TileFull {
            coordinate,
            max: GridConfig::MAX_PIECES_PER_TILE,
        })
    }

    /// Removes and returns the piece with the given handle.
    pub fn remove_piece(&mut self, handle: PieceHandle) -> Option<Piece> {
        let index = self.pieces.iter().position(|piece| piece.handle() == handle)?;
        Some(self.pieces.remove(index))
    }

    /// Characteristic of the given kind on the first piece that carries one.
    pub fn first_with(&self, kind: CharacteristicKind) -> Option<&Characteristic> {
        self.pieces.iter().find_map(|piece| piece.characteristic(kind))
    }

    /// Characteristic of the given kind on the last piece that carries one.
    pub fn last_with(&self, kind: CharacteristicKind) -> Option<&Characteristic> {
        self.pieces
            .iter()
            .rev()
            .find_map(|piece| piece.characteristic(kind))
    }

    /// Every characteristic of the given kind, in placement order.
    pub fn pieces_with(&self, kind: CharacteristicKind) -> Vec<&Characteristic> {
        self.pieces
            .iter()
            .filter_map(|piece| piece.characteristic(kind))
            .collect()
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    pub fn add_state(&mut self, state: TileState) {
        self.state |= state;
    }

    pub fn remove_state(&mut self, state: TileState) {
        self.state &= !state;
    }

    pub fn toggle_state(&mut self, state: TileState) {
        self.state ^= state;
    }
}
