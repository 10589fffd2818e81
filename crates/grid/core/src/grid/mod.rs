//! Tiles, pieces, and the storage abstraction behind them.
//!
//! [`Grid`] is the seam between targeting logic and tile storage. Callers
//! hand a grid to whatever needs one; nothing in this crate reaches for a
//! shared instance. Two back-ends are provided: [`DenseGrid`] keeps one tile
//! per cell, [`SparseGrid`] only materialises tiles that carry pieces or a
//! non-default state.
mod dense;
mod error;
pub mod piece;
mod sparse;
mod tile;

pub use dense::DenseGrid;
pub use error::TileError;
pub use piece::{Characteristic, CharacteristicKind, Piece, PieceHandle, PieceType};
pub use sparse::SparseGrid;
pub use tile::{Tile, TileState};

use crate::coord::Coordinate;

/// Width and height of a grid. Tiles are addressed row-major:
/// `index = y * width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && coordinate.x < self.width as i32
            && coordinate.y < self.height as i32
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        self.contains(coordinate)
            .then(|| coordinate.y as usize * self.width as usize + coordinate.x as usize)
    }

    pub fn coordinate_of(&self, index: usize) -> Option<Coordinate> {
        if index >= self.tile_count() {
            return None;
        }
        let width = self.width as usize;
        Some(Coordinate::new((index % width) as i32, (index / width) as i32))
    }

    /// Every in-bounds coordinate in index order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    fn out_of_bounds(&self, coordinate: Coordinate) -> TileError {
        TileError::OutOfBounds {
            coordinate,
            width: self.width,
            height: self.height,
        }
    }
}

/// Tile storage consulted by targeting and sessions.
///
/// Implementors supply dimensions and tile access; placement, lookup, and
/// state bookkeeping come from the provided methods.
pub trait Grid {
    fn dimensions(&self) -> GridDimensions;

    /// Tile at `coordinate`, or `None` when it is outside the grid.
    fn tile(&self, coordinate: Coordinate) -> Option<&Tile>;

    fn tile_mut(&mut self, coordinate: Coordinate) -> Option<&mut Tile>;

    fn width(&self) -> u32 {
        self.dimensions().width
    }

    fn height(&self) -> u32 {
        self.dimensions().height
    }

    fn tile_count(&self) -> usize {
        self.dimensions().tile_count()
    }

    fn contains(&self, coordinate: Coordinate) -> bool {
        self.dimensions().contains(coordinate)
    }

    /// Tile at a linear index.
    fn tile_at(&self, index: usize) -> Option<&Tile> {
        let coordinate = self.dimensions().coordinate_of(index)?;
        self.tile(coordinate)
    }

    /// Places `piece` on the tile at `coordinate` and records its location.
    fn place_piece(&mut self, coordinate: Coordinate, piece: Piece) -> Result<(), TileError> {
        let dimensions = self.dimensions();
        let handle = piece.handle();
        let tile = self
            .tile_mut(coordinate)
            .ok_or_else(|| dimensions.out_of_bounds(coordinate))?;
        tile.place_piece(coordinate, piece)?;

        tracing::debug!(piece = %handle, %coordinate, "placed piece");
        Ok(())
    }

    /// Coordinate of the tile holding the piece, if any.
    fn locate(&self, handle: PieceHandle) -> Option<Coordinate> {
        self.dimensions().coordinates().find(|coordinate| {
            self.tile(*coordinate)
                .is_some_and(|tile| tile.find_piece(handle).is_some())
        })
    }

    fn piece(&self, handle: PieceHandle) -> Option<&Piece> {
        let coordinate = self.locate(handle)?;
        self.tile(coordinate)?.find_piece(handle)
    }

    /// Takes the piece off the grid.
    fn remove_piece(&mut self, handle: PieceHandle) -> Result<Piece, TileError> {
        let coordinate = self.locate(handle).ok_or(TileError::PieceNotFound(handle))?;
        self.tile_mut(coordinate)
            .and_then(|tile| tile.remove_piece(handle))
            .ok_or(TileError::PieceNotFound(handle))
    }

    /// Moves a piece directly to `to`, skipping any path between.
    ///
    /// On failure the piece stays where it was.
    fn warp_piece(&mut self, handle: PieceHandle, to: Coordinate) -> Result<Coordinate, TileError> {
        let dimensions = self.dimensions();
        if !dimensions.contains(to) {
            return Err(dimensions.out_of_bounds(to));
        }

        let from = self.locate(handle).ok_or(TileError::PieceNotFound(handle))?;
        if from == to {
            return Ok(from);
        }

        let piece = self.remove_piece(handle)?;
        if let Err(err) = self.place_piece(to, piece.clone()) {
            self.place_piece(from, piece)?;
            return Err(err);
        }

        tracing::debug!(piece = %handle, %from, %to, "warped piece");
        Ok(from)
    }

    /// Overwrites the state of every tile.
    fn reset_states(&mut self, state: TileState) {
        for coordinate in self.dimensions().coordinates() {
            if let Some(tile) = self.tile_mut(coordinate) {
                tile.set_state(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_is_row_major() {
        let dims = GridDimensions::new(5, 3);
        assert_eq!(dims.index_of(Coordinate::new(2, 1)), Some(7));
        assert_eq!(dims.coordinate_of(7), Some(Coordinate::new(2, 1)));
        assert_eq!(dims.index_of(Coordinate::new(5, 0)), None);
        assert_eq!(dims.coordinate_of(15), None);
    }

    #[test]
    fn coordinates_cover_every_tile_once() {
        let dims = GridDimensions::new(4, 2);
        let all: Vec<_> = dims.coordinates().collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Coordinate::ORIGIN);
        assert_eq!(all[5], Coordinate::new(1, 1));
    }

    #[test]
    fn tile_at_walks_tiles_in_index_order() {
        let mut dense = DenseGrid::with_size(3, 2);
        let mut sparse = SparseGrid::with_size(3, 2);
        for grid in [&mut dense as &mut dyn Grid, &mut sparse] {
            let barrel = Piece::new(PieceHandle(4), "barrel");
            grid.place_piece(Coordinate::new(2, 1), barrel).unwrap();

            let holding: Vec<_> = (0..grid.tile_count())
                .filter(|index| grid.tile_at(*index).is_some_and(|tile| !tile.is_empty()))
                .collect();
            assert_eq!(holding, vec![5]);
            assert!(grid.tile_at(grid.tile_count()).is_none());
        }
    }

    #[test]
    fn negative_coordinates_are_outside() {
        let dims = GridDimensions::new(4, 4);
        assert!(!dims.contains(Coordinate::new(-1, 0)));
        assert!(!dims.contains(Coordinate::new(0, 4)));
        assert!(dims.contains(Coordinate::new(3, 3)));
    }
}
