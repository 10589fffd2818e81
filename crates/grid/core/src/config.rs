/// Grid configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of tile columns.
    pub width: u32,
    /// Number of tile rows.
    pub height: u32,
}

impl GridConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of pieces stacked on a single tile.
    pub const MAX_PIECES_PER_TILE: usize = 8;
    /// Maximum number of characteristics attached to a single piece.
    pub const MAX_CHARACTERISTICS: usize = 8;
    /// Cells scanned along one half-axis of an area, origin included.
    /// Larger parameters are truncated to this reach.
    pub const MAX_AREA_EXTENT: i32 = 256;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: u32 = 8;
    pub const DEFAULT_HEIGHT: u32 = 8;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
