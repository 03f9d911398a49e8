//! `BehaviorKind`: select a strategy by name at construction time.

use std::fmt;
use std::str::FromStr;

use epi_world::Behavior;

use crate::{Avoider, Baseline, BehaviorError, Curer, Immunizer, Partitioner};

/// The five built-in strategies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BehaviorKind {
    Baseline,
    Avoider,
    Curer,
    Immunizer,
    Partitioner,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 5] = [
        BehaviorKind::Baseline,
        BehaviorKind::Avoider,
        BehaviorKind::Curer,
        BehaviorKind::Immunizer,
        BehaviorKind::Partitioner,
    ];

    /// Matches [`Behavior::label`] of the built strategy.
    pub fn label(self) -> &'static str {
        match self {
            BehaviorKind::Baseline    => "baseline",
            BehaviorKind::Avoider     => "avoider",
            BehaviorKind::Curer       => "curer",
            BehaviorKind::Immunizer   => "immunizer",
            BehaviorKind::Partitioner => "partitioner",
        }
    }

    /// A fresh boxed strategy.  `width` and `partition_row` are only read
    /// by the partitioner.
    pub fn build(self, width: u32, partition_row: u32) -> Box<dyn Behavior> {
        match self {
            BehaviorKind::Baseline    => Box::new(Baseline::new()),
            BehaviorKind::Avoider     => Box::new(Avoider::new()),
            BehaviorKind::Curer       => Box::new(Curer::new()),
            BehaviorKind::Immunizer   => Box::new(Immunizer::new()),
            BehaviorKind::Partitioner => Box::new(Partitioner::new(width, partition_row)),
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BehaviorKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BehaviorKind::ALL
            .into_iter()
            .find(|k| k.label() == s)
            .ok_or_else(|| BehaviorError::UnknownKind(s.to_owned()))
    }
}
