//! Grid Targeting: anchoring shapes on a grid and driving pick sessions.
//!
//! The free functions here are stateless queries over any [`Grid`]. A
//! [`PickSession`] adds the hover-preview / click-commit workflow, and
//! [`Board`] wires a grid, a session and pointer listeners together with a
//! fixed dispatch order.
mod board;
mod filter;
mod session;

pub use board::{Board, PointerEvent};
pub use filter::AreaFilter;
pub use session::{AreaPickData, PickEvent, PickSession, SessionError, SessionPhase};

use crate::area::Area;
use crate::coord::Coordinate;
use crate::grid::{Grid, Tile};

/// Translates every footprint offset by `origin`. Out-of-grid results are kept.
pub fn resolve_absolute(origin: Coordinate, area: &Area) -> Vec<Coordinate> {
    area.resolve_absolute(origin)
}

/// Tiles under `area` anchored at `origin` whose piece id passes `filter`.
///
/// Coordinates outside the grid are skipped.
pub fn query_tiles<'a, G>(
    grid: &'a G,
    origin: Coordinate,
    area: &'a Area,
    filter: AreaFilter,
) -> impl Iterator<Item = (Coordinate, &'a Tile)> + 'a
where
    G: Grid + ?Sized,
{
    area.coordinates().iter().filter_map(move |offset| {
        let coordinate = origin + *offset;
        grid.tile(coordinate)
            .filter(|tile| filter.matches(tile.piece_id()))
            .map(|tile| (coordinate, tile))
    })
}

/// Coordinates yielded by [`query_tiles`].
pub fn query_coordinates<G>(
    grid: &G,
    origin: Coordinate,
    area: &Area,
    filter: AreaFilter,
) -> Vec<Coordinate>
where
    G: Grid + ?Sized,
{
    query_tiles(grid, origin, area, filter)
        .map(|(coordinate, _)| coordinate)
        .collect()
}
