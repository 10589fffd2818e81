//! Area-of-effect shapes and tile targeting for tactical grids.
//!
//! `grid-core` turns a handful of shape parameters into a footprint of
//! relative offsets ([`area`]), stores tiles and pieces behind the [`Grid`]
//! trait ([`grid`]), and anchors footprints on a grid to preview and commit
//! selections ([`targeting`]). Everything is synchronous and free of I/O;
//! callers own the grid and pass it to whatever needs it.
pub mod area;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod targeting;

pub use area::{Area, AreaParams, ShapeSpec, compute_footprint};
pub use config::GridConfig;
pub use coord::{AxisFlags, Coordinate};
pub use error::{ErrorSeverity, GridError};
pub use grid::{
    Characteristic, CharacteristicKind, DenseGrid, Grid, GridDimensions, Piece, PieceHandle,
    PieceType, SparseGrid, Tile, TileError, TileState,
};
pub use targeting::{
    AreaFilter, AreaPickData, Board, PickEvent, PickSession, PointerEvent,
    SessionError, SessionPhase, query_coordinates, query_tiles, resolve_absolute,
};
