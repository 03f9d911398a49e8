//! `epi-behavior`: the built-in agent strategies.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`baseline`]    | `Baseline`: seek healthy company, quarantine at `(0, 0)`    |
//! | [`avoider`]     | `Avoider`: flee the nearest agent, drift towards the centre |
//! | [`curer`]       | `Curer`: reach the nearest sick agent, cure around it       |
//! | [`immunizer`]   | `Immunizer`: reach the nearest unprotected agent, vaccinate |
//! | [`partitioner`] | `Partitioner`: build a wall across one row                  |
//! | [`kind`]        | `BehaviorKind`: label and factory                           |
//! | [`util`]        | distance targeting, greedy step, random move                |
//! | [`error`]       | `BehaviorError`                                             |
//!
//! # Step thresholds
//!
//! All targeted strategies use [`util::greedy_step`].  Baseline (while
//! healthy), curer and immunizer pass threshold 1, so they stop one cell
//! short.  The partitioner and the sick baseline pass threshold 0.

pub mod avoider;
pub mod baseline;
pub mod curer;
pub mod error;
pub mod immunizer;
pub mod kind;
pub mod partitioner;
pub mod util;

#[cfg(test)]
mod tests;

pub use avoider::Avoider;
pub use baseline::Baseline;
pub use curer::Curer;
pub use error::BehaviorError;
pub use immunizer::Immunizer;
pub use kind::BehaviorKind;
pub use partitioner::Partitioner;
