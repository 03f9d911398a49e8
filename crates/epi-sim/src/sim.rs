//! The `Sim` struct and its round loop.

use epi_core::Round;
use epi_world::Grid;
use tracing::{debug, info};

use crate::{SimConfig, SimObserver};

/// The round driver.
///
/// Holds the world and the round counter.  Each round gives every registered
/// agent one turn in registration order, then reports deaths and the end of
/// the round to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    grid:       Grid,
    round:      Round,
    max_rounds: u64,
    config:     SimConfig,
}

impl Sim {
    pub(crate) fn new(grid: Grid, config: SimConfig) -> Self {
        Self { grid, round: Round::ZERO, max_rounds: config.world.max_rounds, config }
    }

    /// Run rounds until no agent is infected or sick, or `max_rounds` rounds
    /// have completed.  Returns the number of completed rounds.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Round {
        info!(agents = self.grid.agent_count(), max_rounds = self.max_rounds, "simulation starting");
        while !self.is_settled() && self.round.0 < self.max_rounds {
            self.step(observer);
        }
        let census = self.grid.census();
        info!(
            rounds = self.round.0,
            dead = census.dead,
            recovered = census.recovered,
            susceptible = census.susceptible,
            settled = census.is_settled(),
            "simulation finished"
        );
        observer.on_sim_end(self.round, &self.grid);
        self.round
    }

    /// Run exactly `n` rounds from the current position (ignores settling and
    /// `max_rounds`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.round;
        observer.on_round_start(now);
        self.grid.advance_full_round();
        for id in self.grid.take_removed() {
            observer.on_agent_removed(now, id);
        }
        self.round = now.next();
        debug!(round = self.round.0, census = ?self.grid.census(), "round complete");
        observer.on_round_end(self.round, &self.grid);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable world access between rounds.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Completed rounds.
    pub fn round(&self) -> Round {
        self.round
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_settled(&self) -> bool {
        self.grid.census().is_settled()
    }
}
