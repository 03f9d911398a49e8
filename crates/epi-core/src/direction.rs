//! The four compass headings an agent can face or move in.

/// A compass heading.  Declaration order is clockwise starting at north,
/// which is what [`Direction::next_clockwise`] walks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    #[default]
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One-step `(dx, dy)` offset.  North is `-y`.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East  => (1, 0),
            Direction::South => (0, 1),
            Direction::West  => (-1, 0),
        }
    }

    /// The heading 90° clockwise from this one.
    #[inline]
    pub fn next_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East  => Direction::South,
            Direction::South => Direction::West,
            Direction::West  => Direction::North,
        }
    }

    /// Rotation in degrees for a renderer, clockwise from north.
    pub fn angle_degrees(self) -> f32 {
        match self {
            Direction::North => 0.0,
            Direction::East  => 90.0,
            Direction::South => 180.0,
            Direction::West  => 270.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
