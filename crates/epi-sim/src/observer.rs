//! Simulation observer trait for rendering, progress reporting and data
//! collection.

use epi_core::{AgentId, Round};
use epi_world::Grid;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_rounds`][crate::Sim::run_rounds].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every hook gets read-only access; no
/// observer can change the world.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_round_end(&mut self, round: Round, grid: &Grid) {
///         let c = grid.census();
///         println!("{round}: {} sick, {} dead", c.sick, c.dead);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the first turn of a round.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called once for every agent that died during the round, in order of
    /// death, before `on_round_end`.  Renderers drop the agent's visual here.
    fn on_agent_removed(&mut self, _round: Round, _agent: AgentId) {}

    /// Called after every agent has had its turn.
    fn on_round_end(&mut self, _round: Round, _grid: &Grid) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops.  `rounds` is the
    /// number of completed rounds.
    fn on_sim_end(&mut self, _rounds: Round, _grid: &Grid) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
