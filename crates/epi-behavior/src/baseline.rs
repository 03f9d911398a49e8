//! Baseline strategy: seek healthy company, quarantine when sick.

use epi_core::{AgentId, Coordinates};
use epi_world::{Agent, Behavior, Body};

use crate::util::{greedy_step, random_move};

/// While healthy, walks towards a randomly chosen healthy agent (not sick,
/// not infected, not vaccinated) and picks a new one once it is adjacent.
/// While sick, heads for the `(0, 0)` corner.
#[derive(Debug, Default)]
pub struct Baseline {
    target: Option<AgentId>,
}

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The agent currently being sought.
    pub fn target(&self) -> Option<AgentId> {
        self.target
    }

    fn is_company(agent: &Agent) -> bool {
        !agent.is_sick() && !agent.is_infected() && !agent.is_vaccinated()
    }

    /// A target is kept while it is still on the grid and not yet in the
    /// 8-neighborhood.
    fn target_location(&self, body: &Body<'_>, here: Coordinates) -> Option<Coordinates> {
        let at = body.grid().agent(self.target?)?.location()?;
        (here.chebyshev(at) > 1).then_some(at)
    }

    fn pick_target(body: &mut Body<'_>) -> Option<AgentId> {
        let me = body.id();
        let candidates: Vec<AgentId> = body
            .grid()
            .agents()
            .filter(|&(id, a)| id != me && a.location().is_some() && Self::is_company(a))
            .map(|(id, _)| id)
            .collect();
        body.rng().choose(&candidates).copied()
    }
}

impl Behavior for Baseline {
    fn decide_and_act(&mut self, body: &mut Body<'_>) {
        let Some(here) = body.location() else { return };

        if body.agent().is_sick() {
            if let Some(direction) = greedy_step(here, Coordinates::ORIGIN, 0) {
                body.move_in(direction);
            }
            return;
        }

        let mut destination = self.target_location(body, here);
        if destination.is_none() {
            self.target = Self::pick_target(body);
            destination = self
                .target
                .and_then(|id| body.grid().agent(id))
                .and_then(Agent::location);
        }

        match destination {
            Some(at) => {
                if let Some(direction) = greedy_step(here, at, 1) {
                    body.move_in(direction);
                }
            }
            None => {
                random_move(body);
            }
        }
    }

    fn label(&self) -> &'static str {
        "baseline"
    }
}
