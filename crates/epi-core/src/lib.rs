//! `epi-core`: foundational types for the `epi` grid epidemic engine.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and only `rand` and `thiserror` externally (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`coords`]      | `Coordinates`, Manhattan distance, neighborhoods      |
//! | [`direction`]   | `Direction` (four compass headings)                   |
//! | [`round`]       | `Round` counter                                       |
//! | [`disease`]     | `TransmissionMode`, `DiseaseParams`                   |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod coords;
pub mod direction;
pub mod disease;
pub mod error;
pub mod ids;
pub mod rng;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coords::Coordinates;
pub use direction::Direction;
pub use disease::{DiseaseParams, TransmissionMode};
pub use error::{EpiError, EpiResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use round::Round;
