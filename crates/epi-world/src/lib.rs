//! `epi-world`: the grid world, its agents, and the per-turn rules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`agent`]    | `Agent`, `RiskProfile`, `Compartment`, susceptibility factors   |
//! | [`cell`]     | `Cell` (`Empty` / `Wall` / `Occupied`)                          |
//! | [`grid`]     | `Grid`: cells, roster, placement, walls, turn scheduler         |
//! | [`body`]     | `Body<'a>`: the acting agent's handle passed to strategies      |
//! | [`behavior`] | `Behavior` trait                                                |
//! | [`disease`]  | `Grid::update_disease`, the compartment state machine           |
//! | [`stats`]    | `RunStats` tallies and histograms, `Census`                     |
//!
//! # Turn structure
//!
//! ```text
//! advance_full_round:
//!   for each registered agent, in registration order:
//!     ① if not stuck → Behavior::decide_and_act(&mut Body)
//!     ② update_disease (always)
//! ```
//!
//! Everything is single-threaded and sequential: one agent's whole turn runs
//! before the next one starts.

pub mod agent;
pub mod behavior;
pub mod body;
pub mod cell;
pub mod disease;
pub mod grid;
pub mod stats;


pub use agent::{Agent, Compartment, Gender, Lifestyle, RiskProfile};
pub use behavior::Behavior;
pub use body::Body;
pub use cell::Cell;
pub use grid::{DisplayStatus, Grid, RejectReason, Rejected};
pub use stats::{Census, RunStats};
