//! Named shape presets.
//!
//! Each preset is a parameter combination over the shared scan; none of them
//! is a separate algorithm. Directional presets accept any vector and only
//! look at the sign of each component.
use crate::coord::{AxisFlags, Coordinate};

use super::{Area, AreaParams};

impl Area {
    /// Origin only.
    pub fn point() -> Self {
        Self::new(AreaParams::new(0, AxisFlags::ONE, AxisFlags::ONE))
    }

    /// Filled square of side `2 * range + 1`.
    pub fn square(range: i32, inner_cut: i32) -> Self {
        Self::new(
            AreaParams::new(range, AxisFlags::ONE, AxisFlags::ONE).with_inner_cut(inner_cut),
        )
    }

    /// Manhattan diamond: every offset with `|x| + |y| <= range`.
    pub fn diamond(range: i32, inner_cut: i32) -> Self {
        Self::new(
            AreaParams::new(range, AxisFlags::ONE, AxisFlags::uniform(-1))
                .with_inner_cut(inner_cut),
        )
    }

    /// Square restricted to the half plane (or quadrant, for diagonals) facing
    /// `direction`.
    pub fn half_square(range: i32, direction: Coordinate, inner_cut: i32) -> Self {
        let facing = AxisFlags::from_vector(direction.signum());
        Self::new(AreaParams::new(range, facing, facing).with_inner_cut(inner_cut))
    }

    /// Triangular wedge widening along `direction`.
    pub fn cone(range: i32, direction: Coordinate, inner_cut: i32) -> Self {
        let direction = direction.signum();
        let facing = AxisFlags::from_vector(direction);
        let axis = if direction.is_diagonal() {
            -facing
        } else {
            AxisFlags::clamped(direction)
        };
        Self::new(AreaParams::new(range, facing, axis).with_inner_cut(inner_cut))
    }

    /// Wedge that narrows along `direction` (widest across the origin).
    pub fn drill(range: i32, direction: Coordinate, inner_cut: i32) -> Self {
        let direction = direction.signum();
        let facing = AxisFlags::from_vector(direction);
        let axis = if direction.is_diagonal() {
            AxisFlags::clamped(direction)
        } else {
            -facing
        };
        Self::new(AreaParams::new(range, facing, axis).with_inner_cut(inner_cut))
    }

    /// Diagonal cross. A non-positive `thickness` yields an empty footprint.
    pub fn x(range: i32, thickness: i32, inner_cut: i32) -> Self {
        if thickness <= 0 {
            return Self::new(AreaParams::new(range, AxisFlags::ONE, AxisFlags::ZERO));
        }

        Self::new(
            AreaParams::new(range, AxisFlags::ONE, AxisFlags::ONE)
                .with_axis_cut(AxisFlags::uniform(thickness))
                .with_inner_cut(inner_cut),
        )
    }

    /// Band running from the origin along `direction`.
    ///
    /// Orthogonal lines are `2 * (thickness - 1) + 1` cells wide up to the full
    /// half-square at `thickness = range + 1`; past that the perpendicular
    /// clip grows back and the band narrows again. Diagonal lines trim each
    /// quadrant's border band by `thickness`.
    pub fn line(range: i32, direction: Coordinate, thickness: i32, inner_cut: i32) -> Self {
        let direction = direction.signum();
        let facing = AxisFlags::from_vector(direction);

        if direction.is_diagonal() {
            return Self::new(
                AreaParams::new(range, facing, facing)
                    .with_axis_cut(facing.scaled(thickness))
                    .with_inner_cut(inner_cut),
            );
        }

        // Clip the half-axes perpendicular to the line.
        let widened = thickness.saturating_sub(1);
        let clip = range.saturating_sub(widened).saturating_abs();
        let perpendicular = |component: i32| i32::from(component == 0);
        let range_cut = AxisFlags::new(
            facing.plus_x * clip * perpendicular(direction.x),
            facing.plus_y * clip * perpendicular(direction.y),
            facing.minus_x * clip * perpendicular(direction.x),
            facing.minus_y * clip * perpendicular(direction.y),
        );
        Self::new(
            AreaParams::new(range, facing, facing)
                .with_range_cut(range_cut)
                .with_inner_cut(inner_cut),
        )
    }

    /// Stepped disc: a diamond whose rows are skewed by `range / 2`.
    pub fn circle(range: i32, inner_cut: i32) -> Self {
        let offset = range.div_euclid(2);
        Self::new(
            AreaParams::new(range, AxisFlags::ONE, AxisFlags::uniform(-1))
                .with_direction_offset(AxisFlags::uniform(offset))
                .with_inner_cut(inner_cut),
        )
    }

    /// Orthogonal cross whose arms are `2 * (thickness - 1) + 1` cells wide.
    pub fn plus_sign(range: i32, thickness: i32, inner_cut: i32) -> Self {
        let mut area = Self::new(
            AreaParams::new(range, AxisFlags::ONE, AxisFlags::ONE)
                .with_direction_offset(AxisFlags::uniform(range))
                .with_inner_cut(inner_cut),
        );

        for reach in inner_cut.saturating_add(1)..=range {
            for width in 1..thickness {
                for (x, y) in [(width, reach), (reach, width)] {
                    area.add_coordinate(Coordinate::new(x, y));
                    area.add_coordinate(Coordinate::new(x, -y));
                    area.add_coordinate(Coordinate::new(-x, y));
                    area.add_coordinate(Coordinate::new(-x, -y));
                }
            }
        }

        area
    }
}

#[cfg(feature = "serde")]
fn default_thickness() -> i32 {
    1
}

/// Serialisable description of a shape, used to author areas in data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ShapeSpec {
    Point,
    Square {
        range: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    Diamond {
        range: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    HalfSquare {
        range: i32,
        direction: Coordinate,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    Cone {
        range: i32,
        direction: Coordinate,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    Drill {
        range: i32,
        direction: Coordinate,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    X {
        range: i32,
        #[cfg_attr(feature = "serde", serde(default = "default_thickness"))]
        thickness: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    Line {
        range: i32,
        direction: Coordinate,
        #[cfg_attr(feature = "serde", serde(default = "default_thickness"))]
        thickness: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    Circle {
        range: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    PlusSign {
        range: i32,
        #[cfg_attr(feature = "serde", serde(default = "default_thickness"))]
        thickness: i32,
        #[cfg_attr(feature = "serde", serde(default))]
        inner_cut: i32,
    },
    /// Raw parameter set for shapes no preset covers.
    Custom(AreaParams),
}

impl ShapeSpec {
    /// Builds the area described by this spec.
    pub fn build(&self) -> Area {
        match *self {
            ShapeSpec::Point => Area::point(),
            ShapeSpec::Square { range, inner_cut } => Area::square(range, inner_cut),
            ShapeSpec::Diamond { range, inner_cut } => Area::diamond(range, inner_cut),
            ShapeSpec::HalfSquare {
                range,
                direction,
                inner_cut,
            } => Area::half_square(range, direction, inner_cut),
            ShapeSpec::Cone {
                range,
                direction,
                inner_cut,
            } => Area::cone(range, direction, inner_cut),
            ShapeSpec::Drill {
                range,
                direction,
                inner_cut,
            } => Area::drill(range, direction, inner_cut),
            ShapeSpec::X {
                range,
                thickness,
                inner_cut,
            } => Area::x(range, thickness, inner_cut),
            ShapeSpec::Line {
                range,
                direction,
                thickness,
                inner_cut,
            } => Area::line(range, direction, thickness, inner_cut),
            ShapeSpec::Circle { range, inner_cut } => Area::circle(range, inner_cut),
            ShapeSpec::PlusSign {
                range,
                thickness,
                inner_cut,
            } => Area::plus_sign(range, thickness, inner_cut),
            ShapeSpec::Custom(params) => Area::new(params),
        }
    }
}

impl From<ShapeSpec> for Area {
    fn from(spec: ShapeSpec) -> Self {
        spec.build()
    }
}
