use crate::config::GridConfig;
use crate::coord::Coordinate;

use super::{Grid, GridDimensions, Tile, TileState};

/// Grid that stores one tile per cell in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl DenseGrid {
    pub fn new(config: &GridConfig) -> Self {
        Self::with_size(config.width, config.height)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        let dimensions = GridDimensions::new(width, height);
        Self {
            dimensions,
            tiles: vec![Tile::default(); dimensions.tile_count()],
        }
    }

    /// All tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl From<&GridConfig> for DenseGrid {
    fn from(config: &GridConfig) -> Self {
        Self::new(config)
    }
}

impl Grid for DenseGrid {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn tile(&self, coordinate: Coordinate) -> Option<&Tile> {
        let index = self.dimensions.index_of(coordinate)?;
        self.tiles.get(index)
    }

    fn tile_mut(&mut self, coordinate: Coordinate) -> Option<&mut Tile> {
        let index = self.dimensions.index_of(coordinate)?;
        self.tiles.get_mut(index)
    }

    fn reset_states(&mut self, state: TileState) {
        for tile in &mut self.tiles {
            tile.set_state(state);
        }
    }
}
