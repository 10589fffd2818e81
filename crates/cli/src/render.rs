//! ASCII rendering of footprints and boards.
use std::fmt::Write;

use grid_core::{Area, Coordinate, Grid, TileState};

/// Draws a footprint with `+y` pointing up. `O` marks the origin when it is
/// covered, `o` when it is not.
pub fn render_area(area: &Area) -> String {
    let coordinates = area.coordinates();
    let (mut min, mut max) = (Coordinate::ORIGIN, Coordinate::ORIGIN);
    for c in coordinates {
        min = Coordinate::new(min.x.min(c.x), min.y.min(c.y));
        max = Coordinate::new(max.x.max(c.x), max.y.max(c.y));
    }

    let mut out = String::new();
    for y in (min.y..=max.y).rev() {
        for x in min.x..=max.x {
            let cell = Coordinate::new(x, y);
            out.push(match (cell == Coordinate::ORIGIN, coordinates.contains(&cell)) {
                (true, true) => 'O',
                (true, false) => 'o',
                (false, true) => '#',
                (false, false) => '.',
            });
        }
        out.push('\n');
    }
    out
}

/// Draws a grid, row `height - 1` first. Occupied tiles show the initial of
/// their first piece; otherwise the tile state decides the glyph.
pub fn render_board<G: Grid + ?Sized>(grid: &G) -> String {
    let mut out = String::new();
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let Some(tile) = grid.tile(Coordinate::new(x, y)) else {
                continue;
            };
            let state = tile.state();
            let glyph = if state.contains(TileState::VALID) {
                '*'
            } else if state.contains(TileState::INVALID) {
                'x'
            } else if let Some(piece) = tile.first_piece() {
                piece.name().chars().next().unwrap_or('?')
            } else if state.contains(TileState::SELECTABLE) {
                '+'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    let _ = write!(out, "{}x{}", grid.width(), grid.height());
    out
}
