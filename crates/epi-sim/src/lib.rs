//! `epi-sim`: configuration, population placement, and the round loop.
//!
//! # Round loop
//!
//! ```text
//! run:
//!   while someone is infected or sick and round < max_rounds:
//!     on_round_start(round)
//!     Grid::advance_full_round       one turn per registered agent
//!     on_agent_removed(round, id)    for each death this round
//!     round += 1
//!     on_round_end(round, &grid)
//!   on_sim_end(round, &grid)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let config = SimConfig::from_path("outbreak.toml")?;
//! let mut sim = SimBuilder::new(config).build()?;
//! let rounds = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::{Group, SimBuilder};
pub use config::{DiseaseConfig, OutputConfig, PopulationConfig, SimConfig, WorldConfig};
pub use error::{ConfigError, ConfigResult, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
