//! One grid slot.

use epi_core::AgentId;

/// What a grid cell holds.
///
/// A `Wall` only ever comes from `Empty` and is permanent.  `Occupied` names
/// the agent whose location is this cell; the grid keeps the two in sync.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Occupied(AgentId),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    /// The occupying agent, if any.
    #[inline]
    pub fn agent(self) -> Option<AgentId> {
        match self {
            Cell::Occupied(id) => Some(id),
            _                  => None,
        }
    }
}
