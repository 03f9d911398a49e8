//! Round counter.
//!
//! A round is one full pass of the turn scheduler over every registered
//! agent.

use std::fmt;

/// How many full rounds have completed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
