//! Per-turn disease update: incubation, recovery or death, and contact
//! transmission.

use epi_core::AgentId;
use tracing::debug;

use crate::{Compartment, Grid};

impl Grid {
    /// Advance one agent's disease clock and evaluate its contacts.
    ///
    /// Steps run in a fixed order within the same call:
    ///
    /// 1. Infected: bump the incubation counter; past the threshold the agent
    ///    turns Sick.
    /// 2. Sick: bump the recovery counter; past the threshold roll once
    ///    against the death probability (Dead on a hit, Recovered on a miss)
    ///    and reset the counter.
    /// 3. Recovered: nothing further.
    /// 4. Susceptible: every Sick agent in the contact neighborhood gets its
    ///    own roll.  Rolling continues after the first hit; only the
    ///    Susceptible → Infected change is counted.
    pub fn update_disease(&mut self, id: AgentId) {
        let Some(agent) = self.agents.get_mut(id.index()) else {
            return;
        };
        let params = *agent.disease();

        if agent.compartment == Compartment::Infected {
            agent.incubation += 1;
            if agent.incubation > params.incubation_turns {
                agent.compartment = Compartment::Sick;
                debug!(%id, "onset");
            }
        }

        if agent.compartment == Compartment::Sick {
            agent.recovery += 1;
            if agent.recovery > params.recovery_turns {
                agent.recovery = 0;
                if self.rngs[id.index()].roll(params.death_probability) {
                    self.kill(id);
                } else {
                    self.agents[id.index()].compartment = Compartment::Recovered;
                    self.stats.recovered += 1;
                    debug!(%id, "recovered");
                }
            }
        }

        let agent = &self.agents[id.index()];
        if agent.compartment != Compartment::Susceptible {
            return;
        }
        let Some(here) = agent.location() else {
            return;
        };
        let p = agent.contact_probability();
        let contagious = here
            .ring(params.mode.radius())
            .filter(|&c| self.agent_at(c).is_some_and(|n| n.is_sick()))
            .count();

        for _ in 0..contagious {
            if !self.rngs[id.index()].roll(p) {
                continue;
            }
            let agent = &mut self.agents[id.index()];
            if agent.compartment == Compartment::Susceptible {
                agent.compartment = Compartment::Infected;
                agent.incubation = 0;
                agent.recovery = 0;
                self.stats.infected += 1;
                debug!(%id, "infected");
            }
        }
    }
}
