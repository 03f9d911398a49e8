//! Immunizer strategy: walk to the nearest unprotected agent and vaccinate
//! the neighborhood.

use epi_world::{Agent, Behavior, Body};

use crate::util::{closest_agent, greedy_step, neighbors_where, random_move};

/// Not sick, not infected, not yet vaccinated.
fn qualifies(agent: &Agent) -> bool {
    !agent.is_sick() && !agent.is_vaccinated() && !agent.is_infected()
}

/// Heads for the nearest qualifying agent.  After every successful step,
/// and on a turn that starts next to the target, vaccinates every
/// qualifying agent in the 8-neighborhood.  With nobody left to
/// protect it wanders.
#[derive(Debug, Default)]
pub struct Immunizer;

impl Immunizer {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for Immunizer {
    fn decide_and_act(&mut self, body: &mut Body<'_>) {
        let Some(here) = body.location() else { return };
        let Some((_, at)) = closest_agent(body, qualifies) else {
            random_move(body);
            return;
        };

        // No step means the target is already within reach.
        let arrived = match greedy_step(here, at, 1) {
            Some(direction) => body.move_in(direction),
            None            => true,
        };
        if arrived {
            for id in neighbors_where(body, qualifies) {
                body.vaccinate(id);
            }
        }
    }

    fn label(&self) -> &'static str {
        "immunizer"
    }
}
