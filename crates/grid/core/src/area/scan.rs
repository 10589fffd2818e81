//! Per-quadrant footprint scan.
//!
//! The plane around the origin is split into four quadrants by the sign of
//! `x` and `y`. Each quadrant is scanned row by row in mirrored (non-negative)
//! space and the results are flipped back into place. A row receives two
//! column bands:
//!
//! - the **row band**, whose envelope follows the quadrant's vertical
//!   half-axis (`axis` on that slot decides rectangular vs. sheared growth),
//! - the **column band**, whose envelope follows the horizontal half-axis.
//!
//! Both bands land in the same quadrant and are unioned. Envelopes use
//! saturating arithmetic and every band stops at
//! [`GridConfig::MAX_AREA_EXTENT`], so any parameter combination yields some
//! (possibly empty) footprint.
use std::collections::BTreeSet;
use std::ops::Range;

use crate::config::GridConfig;
use crate::coord::{Coordinate, Slot};

use super::AreaParams;

/// One quadrant of the scan: which slots drive it and how to flip it back.
#[derive(Clone, Copy, Debug)]
struct Quadrant {
    horizontal: Slot,
    vertical: Slot,
    sign_x: i32,
    sign_y: i32,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [
        Quadrant::new(Slot::PlusX, Slot::PlusY, 1, 1),
        Quadrant::new(Slot::MinusX, Slot::PlusY, -1, 1),
        Quadrant::new(Slot::PlusX, Slot::MinusY, 1, -1),
        Quadrant::new(Slot::MinusX, Slot::MinusY, -1, -1),
    ];

    const fn new(horizontal: Slot, vertical: Slot, sign_x: i32, sign_y: i32) -> Self {
        Self {
            horizontal,
            vertical,
            sign_x,
            sign_y,
        }
    }

    fn place(&self, column: i32, row: i32) -> Coordinate {
        Coordinate::new(self.sign_x * column, self.sign_y * row)
    }
}

/// Computes the deduplicated footprint described by `params`.
pub fn compute_footprint(params: &AreaParams) -> BTreeSet<Coordinate> {
    let mut footprint = BTreeSet::new();
    for quadrant in Quadrant::ALL {
        scan_quadrant(params, quadrant, &mut footprint);
    }

    if params.inner_cut > 0 {
        let hollow = compute_footprint(&params.hollow());
        footprint.retain(|coordinate| !hollow.contains(coordinate));
    }

    footprint
}

fn scan_quadrant(params: &AreaParams, quadrant: Quadrant, footprint: &mut BTreeSet<Coordinate>) {
    let width = params.extent(quadrant.horizontal);
    let height = params.extent(quadrant.vertical);
    if width <= 0 {
        return;
    }

    for row in 0..height {
        let bands = row_band(params, quadrant, row, width, height)
            .chain(column_band(params, quadrant, row, width));
        for column in bands {
            footprint.insert(quadrant.place(column, row));
        }
    }
}

/// Columns contributed by the vertical half-axis at `row`.
///
/// With `axis = 1` the envelope grows with the row (the band reaches up to
/// `row` columns out); with `axis = -1` it shrinks as `width - row`.
fn row_band(
    params: &AreaParams,
    quadrant: Quadrant,
    row: i32,
    width: i32,
    height: i32,
) -> Range<i32> {
    let axis = params.axis.slot(quadrant.vertical);
    let cut = params.axis_cut.slot(quadrant.vertical);
    let offset = params.direction_offset.slot(quadrant.vertical);
    let reach = params.direction.slot(quadrant.horizontal);

    let shifted = clamp(row.saturating_sub(offset), 0, height);
    let mut envelope = shifted.saturating_mul(axis).saturating_mul(axis);
    let sheared_width = width * gate(axis.saturating_neg());
    envelope = invert(envelope, sheared_width).saturating_add(gate(axis));

    let start = clamp(envelope.saturating_sub(cut), 0, envelope) * gate(axis) * gate(cut);
    let end = clamp(envelope, 0, width).saturating_mul(reach);
    bounded(start..end)
}

/// Columns contributed by the horizontal half-axis at `row`.
///
/// With `axis = 1` the band hugs the outer edge, keeping the full width on
/// every row; with `axis = -1` it starts at the centre column and narrows
/// with distance; with `axis = 0` it is empty.
fn column_band(params: &AreaParams, quadrant: Quadrant, row: i32, width: i32) -> Range<i32> {
    let axis = params.axis.slot(quadrant.horizontal);
    let cut = params.axis_cut.slot(quadrant.horizontal);
    let offset = params.direction_offset.slot(quadrant.horizontal);
    let enabled = params.direction.slot(quadrant.vertical);

    let distance = row.saturating_mul(axis).saturating_mul(axis);
    let mut envelope = invert(distance, width).saturating_mul(axis.saturating_abs());
    if row > 0 {
        envelope = envelope.saturating_sub(offset);
    }
    let trim = clamp(envelope.saturating_sub(cut), 0, envelope) * gate(axis) * gate(cut);

    if axis > 0 {
        let start = clamp(width.saturating_sub(envelope), 0, width);
        let end = clamp(envelope.saturating_add(start), 0, width).saturating_mul(enabled);
        bounded(start..end.saturating_sub(trim))
    } else {
        bounded(0..clamp(envelope, 0, width).saturating_mul(enabled))
    }
}

/// Keeps a band within the scan reach.
fn bounded(band: Range<i32>) -> Range<i32> {
    band.start..band.end.min(GridConfig::MAX_AREA_EXTENT)
}

/// Saturating clamp that tolerates `max < min` (lower bound checked first).
fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// 1 for positive values, 0 otherwise.
fn gate(value: i32) -> i32 {
    clamp(value, 0, 1)
}

/// Distance of `value` from `max`.
fn invert(value: i32, max: i32) -> i32 {
    max.saturating_sub(value).saturating_abs()
}
