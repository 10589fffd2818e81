use std::collections::BTreeMap;

use crate::config::GridConfig;
use crate::coord::Coordinate;

use super::{Grid, GridDimensions, PieceHandle, Tile, TileState};

/// Grid that only stores tiles that differ from a blank one.
///
/// Reads of an untouched in-bounds cell return a shared blank tile. Mutable
/// access materialises the tile; [`SparseGrid::compact`] drops the ones that
/// went back to blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseGrid {
    dimensions: GridDimensions,
    tiles: BTreeMap<Coordinate, Tile>,
    blank: Tile,
}

impl SparseGrid {
    pub fn new(config: &GridConfig) -> Self {
        Self::with_size(config.width, config.height)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            dimensions: GridDimensions::new(width, height),
            tiles: BTreeMap::new(),
            blank: Tile::default(),
        }
    }

    /// Number of tiles currently stored.
    pub fn materialized(&self) -> usize {
        self.tiles.len()
    }

    /// Drops stored tiles that are blank again.
    pub fn compact(&mut self) {
        let before = self.tiles.len();
        self.tiles.retain(|_, tile| !tile.is_blank());
        tracing::trace!(dropped = before - self.tiles.len(), "compacted sparse grid");
    }
}

impl From<&GridConfig> for SparseGrid {
    fn from(config: &GridConfig) -> Self {
        Self::new(config)
    }
}

impl Grid for SparseGrid {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn tile(&self, coordinate: Coordinate) -> Option<&Tile> {
        if !self.dimensions.contains(coordinate) {
            return None;
        }
        Some(self.tiles.get(&coordinate).unwrap_or(&self.blank))
    }

    fn tile_mut(&mut self, coordinate: Coordinate) -> Option<&mut Tile> {
        if !self.dimensions.contains(coordinate) {
            return None;
        }
        Some(self.tiles.entry(coordinate).or_default())
    }

    fn locate(&self, handle: PieceHandle) -> Option<Coordinate> {
        self.tiles
            .iter()
            .find(|(_, tile)| tile.find_piece(handle).is_some())
            .map(|(coordinate, _)| *coordinate)
    }

    fn reset_states(&mut self, state: TileState) {
        if state != TileState::default() {
            for coordinate in self.dimensions.coordinates() {
                self.tiles.entry(coordinate).or_default().set_state(state);
            }
            return;
        }

        for tile in self.tiles.values_mut() {
            tile.set_state(state);
        }
        self.compact();
    }
}
