//! Integer grid coordinates.
//!
//! The grid uses screen orientation: `x` grows towards [`Direction::East`],
//! `y` grows towards [`Direction::South`].  `Coordinates(0, 0)` is the
//! north-west corner.

use std::fmt;

use crate::Direction;

/// A cell address on the grid.  May lie outside any particular grid; the
/// grid decides what an out-of-range address means.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const ORIGIN: Coordinates = Coordinates { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinates one step away in `direction`.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Coordinates {
        let (dx, dy) = direction.offset();
        Coordinates::new(self.x + dx, self.y + dy)
    }

    /// The coordinates offset by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Coordinates {
        Coordinates::new(self.x + dx, self.y + dy)
    }

    /// `|Δx| + |Δy|`.
    #[inline]
    pub fn manhattan(self, other: Coordinates) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `max(|Δx|, |Δy|)`.
    #[inline]
    pub fn chebyshev(self, other: Coordinates) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Every address within Chebyshev `radius` of `self`, excluding `self`,
    /// in column-major order (`x` outer, `y` inner).
    ///
    /// Radius 1 yields the 8-neighborhood, radius 2 the 5×5 block minus the
    /// centre.  Out-of-range addresses are included; callers resolve them
    /// through the grid.
    pub fn ring(self, radius: i32) -> impl Iterator<Item = Coordinates> {
        (-radius..=radius).flat_map(move |dx| {
            (-radius..=radius)
                .filter(move |&dy| dx != 0 || dy != 0)
                .map(move |dy| self.offset(dx, dy))
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
