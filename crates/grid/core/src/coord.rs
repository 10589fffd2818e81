//! Primitive value types shared by the shape engine and the grid.
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Integer grid coordinate.
///
/// Used both as a relative offset inside a shape footprint and as an absolute
/// tile location once a footprint has been anchored at an origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (king moves) between two coordinates.
    pub fn distance(self, other: Coordinate) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Component-wise sign, mapping zero to zero.
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// True when both components are non-zero.
    pub fn is_diagonal(self) -> bool {
        self.x != 0 && self.y != 0
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        Coordinate::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One integer per half-axis: `+x`, `+y`, `-x`, `-y`.
///
/// Conventionally each slot is 0 or 1 and enables growth along that half-axis.
/// The shape engine reuses the same layout for small per-slot magnitudes
/// (cut depth, skew offset) and for `-1` markers on the axis descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisFlags {
    pub plus_x: i32,
    pub plus_y: i32,
    pub minus_x: i32,
    pub minus_y: i32,
}

impl AxisFlags {
    pub const ONE: Self = Self::new(1, 1, 1, 1);
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const HALF_UP: Self = Self::new(1, 1, 1, 0);
    pub const HALF_DOWN: Self = Self::new(1, 0, 1, 1);
    pub const HALF_RIGHT: Self = Self::new(1, 1, 0, 1);
    pub const HALF_LEFT: Self = Self::new(0, 1, 1, 1);
    pub const HORIZONTAL: Self = Self::new(1, 0, 1, 0);
    pub const VERTICAL: Self = Self::new(0, 1, 0, 1);
    pub const UP: Self = Self::new(0, 1, 0, 0);
    pub const DOWN: Self = Self::new(0, 0, 0, 1);
    pub const RIGHT: Self = Self::new(1, 0, 0, 0);
    pub const LEFT: Self = Self::new(0, 0, 1, 0);

    pub const fn new(plus_x: i32, plus_y: i32, minus_x: i32, minus_y: i32) -> Self {
        Self {
            plus_x,
            plus_y,
            minus_x,
            minus_y,
        }
    }

    /// Same value in all four slots.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Converts a direction vector into half-axis enables.
    ///
    /// Each slot takes the sign of the matching component (negated for the
    /// minus slots) clamped to `{0, 1}`. A zero component counts as positive,
    /// so `(1, 0)` enables `+x`, `+y` and `-y` (a right-facing half plane).
    pub fn from_vector(direction: Coordinate) -> Self {
        let enable = |component: i32| i32::from(component >= 0);
        Self::new(
            enable(direction.x),
            enable(direction.y),
            enable(-direction.x),
            enable(-direction.y),
        )
    }

    /// Half-axis enables for the strictly positive parts of a direction:
    /// `(1, 0)` enables only `+x`.
    pub fn clamped(direction: Coordinate) -> Self {
        Self::new(
            direction.x.clamp(0, 1),
            direction.y.clamp(0, 1),
            (-direction.x).clamp(0, 1),
            (-direction.y).clamp(0, 1),
        )
    }

    /// Multiplies every slot by `factor`.
    pub const fn scaled(self, factor: i32) -> Self {
        Self::new(
            self.plus_x * factor,
            self.plus_y * factor,
            self.minus_x * factor,
            self.minus_y * factor,
        )
    }

    /// Slot value by index in `+x, +y, -x, -y` order.
    pub(crate) const fn slot(&self, slot: Slot) -> i32 {
        match slot {
            Slot::PlusX => self.plus_x,
            Slot::PlusY => self.plus_y,
            Slot::MinusX => self.minus_x,
            Slot::MinusY => self.minus_y,
        }
    }
}

impl Neg for AxisFlags {
    type Output = AxisFlags;

    fn neg(self) -> AxisFlags {
        self.scaled(-1)
    }
}

/// Names one of the four half-axis slots of [`AxisFlags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Slot {
    PlusX,
    PlusY,
    MinusX,
    MinusY,
}
