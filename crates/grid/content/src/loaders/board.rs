//! Board layout loader.
//!
//! Loads grid dimensions plus the pieces placed on it from RON files.

use std::path::Path;

use grid_core::{Characteristic, Grid, GridConfig, Piece, PieceHandle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Board data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardRon {
    dimensions: (u32, u32),
    #[serde(default)]
    pieces: Vec<PieceRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PieceRon {
    handle: u32,
    name: String,
    position: (i32, i32),
    #[serde(default)]
    characteristics: Vec<Characteristic>,
}

/// Loader for board layouts from RON files.
pub struct BoardLoader;

impl BoardLoader {
    /// Load a board into any grid back-end built from a [`GridConfig`].
    pub fn load<G>(path: &Path) -> LoadResult<G>
    where
        G: Grid + for<'a> From<&'a GridConfig>,
    {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse<G>(content: &str) -> LoadResult<G>
    where
        G: Grid + for<'a> From<&'a GridConfig>,
    {
        let data: BoardRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse board RON: {}", e))?;

        let config = GridConfig::with_size(data.dimensions.0, data.dimensions.1);
        let mut grid = G::from(&config);

        for spec in data.pieces {
            let mut piece = Piece::new(PieceHandle(spec.handle), spec.name);
            for characteristic in spec.characteristics {
                piece
                    .add_characteristic(characteristic)
                    .map_err(|e| anyhow::anyhow!("Invalid piece {}: {}", piece.name(), e))?;
            }

            if grid.locate(piece.handle()).is_some() {
                anyhow::bail!("Duplicate piece handle: {}", piece.handle());
            }
            grid.place_piece(spec.position.into(), piece)
                .map_err(|e| anyhow::anyhow!("Failed to place piece {}: {}", spec.handle, e))?;
        }

        tracing::debug!(
            width = config.width,
            height = config.height,
            "loaded board layout"
        );
        Ok(grid)
    }
}
