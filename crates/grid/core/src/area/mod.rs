//! Area Shape Engine.
//!
//! An [`Area`] is a small parameter set ([`AreaParams`]) plus the footprint it
//! derives: the deduplicated set of offsets the shape covers around its
//! origin. Footprints are computed by [`compute_footprint`] and rebuilt only
//! when the owner asks for it (construction, [`Area::set_range`],
//! [`Area::recalculate`]); reads never recompute.
//!
//! Named presets (square, diamond, cone, ...) live in [`presets`] and are plain
//! parameter combinations over the same scan.
pub mod presets;
mod scan;

use std::collections::BTreeSet;

use crate::config::GridConfig;
use crate::coord::{AxisFlags, Coordinate, Slot};

pub use presets::ShapeSpec;
pub use scan::compute_footprint;

/// Parameters driving the footprint scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaParams {
    /// Reach of the shape. Negative values are not validated.
    pub range: i32,
    /// Which half-axes are populated at all.
    pub direction: AxisFlags,
    /// Per half-axis growth: `1` rectangular, `-1` sheared (diagonal), `0` none.
    pub axis: AxisFlags,
    /// Border band removed from each half-axis.
    pub axis_cut: AxisFlags,
    /// Amount clipped from the outer range of each half-axis.
    pub range_cut: AxisFlags,
    /// Per-row skew used for circles and plus-sign arms.
    pub direction_offset: AxisFlags,
    /// When positive, the footprint of radius `inner_cut - 1` is removed.
    pub inner_cut: i32,
}

impl AreaParams {
    pub const fn new(range: i32, direction: AxisFlags, axis: AxisFlags) -> Self {
        Self {
            range,
            direction,
            axis,
            axis_cut: AxisFlags::ZERO,
            range_cut: AxisFlags::ZERO,
            direction_offset: AxisFlags::ZERO,
            inner_cut: 0,
        }
    }

    #[must_use]
    pub const fn with_axis_cut(mut self, axis_cut: AxisFlags) -> Self {
        self.axis_cut = axis_cut;
        self
    }

    #[must_use]
    pub const fn with_range_cut(mut self, range_cut: AxisFlags) -> Self {
        self.range_cut = range_cut;
        self
    }

    #[must_use]
    pub const fn with_direction_offset(mut self, direction_offset: AxisFlags) -> Self {
        self.direction_offset = direction_offset;
        self
    }

    #[must_use]
    pub const fn with_inner_cut(mut self, inner_cut: i32) -> Self {
        self.inner_cut = inner_cut;
        self
    }

    /// Parameters of the shape removed by hollowing.
    pub(crate) fn hollow(&self) -> Self {
        Self {
            range: self.inner_cut.saturating_sub(1),
            inner_cut: 0,
            ..*self
        }
    }

    /// Number of cells scanned along a half-axis, origin included.
    pub(crate) fn extent(&self, slot: Slot) -> i32 {
        self.range
            .saturating_mul(self.direction.slot(slot))
            .saturating_add(1)
            .saturating_sub(self.range_cut.slot(slot))
            .min(GridConfig::MAX_AREA_EXTENT)
    }
}

/// Shape descriptor together with its derived footprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Area {
    params: AreaParams,
    footprint: BTreeSet<Coordinate>,
}

impl Area {
    /// Builds the area and computes its footprint.
    pub fn new(params: AreaParams) -> Self {
        let footprint = compute_footprint(&params);
        Self { params, footprint }
    }

    pub fn params(&self) -> &AreaParams {
        &self.params
    }

    pub fn range(&self) -> i32 {
        self.params.range
    }

    /// Reassigns the range and rebuilds the footprint.
    ///
    /// Coordinates injected through [`Area::add_coordinate`] or
    /// [`Area::copy_form`] are discarded.
    pub fn set_range(&mut self, range: i32) {
        self.params.range = range;
        self.recalculate();
    }

    /// Rebuilds the footprint from the current parameters.
    pub fn recalculate(&mut self) {
        self.footprint = compute_footprint(&self.params);
        tracing::trace!(
            range = self.params.range,
            cells = self.footprint.len(),
            "rebuilt area footprint"
        );
    }

    /// Relative offsets covered by the shape.
    pub fn coordinates(&self) -> &BTreeSet<Coordinate> {
        &self.footprint
    }

    pub fn contains(&self, offset: Coordinate) -> bool {
        self.footprint.contains(&offset)
    }

    pub fn len(&self) -> usize {
        self.footprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprint.is_empty()
    }

    /// Adds an explicit offset; duplicates are ignored.
    pub fn add_coordinate(&mut self, offset: Coordinate) -> bool {
        self.footprint.insert(offset)
    }

    /// Replaces the footprint with an explicit list of offsets.
    pub fn copy_form<I>(&mut self, offsets: I)
    where
        I: IntoIterator<Item = Coordinate>,
    {
        self.footprint = offsets.into_iter().collect();
    }

    /// Translates every offset by `origin`. No bounds filtering is applied.
    pub fn resolve_absolute(&self, origin: Coordinate) -> Vec<Coordinate> {
        self.footprint.iter().map(|offset| origin + *offset).collect()
    }

    /// Like [`Area::resolve_absolute`] with the origin given as a linear tile
    /// index on a grid of `width` columns (`index = y * width + x`).
    pub fn resolve_index(&self, origin_index: usize, width: u32) -> Vec<Coordinate> {
        let width = width.max(1) as usize;
        let origin = Coordinate::new((origin_index % width) as i32, (origin_index / width) as i32);
        self.resolve_absolute(origin)
    }
}

impl From<AreaParams> for Area {
    fn from(params: AreaParams) -> Self {
        Self::new(params)
    }
}
