//! Curer strategy: walk to the nearest sick agent and cure the neighborhood.

use epi_world::{Agent, Behavior, Body};
use tracing::trace;

use crate::util::{closest_agent, greedy_step, neighbors_where, random_move};

/// Heads for the nearest Sick agent.  After every successful step, and on a
/// turn that starts next to the patient, cures every Sick agent in the
/// 8-neighborhood.  With nobody sick it wanders.
#[derive(Debug, Default)]
pub struct Curer;

impl Curer {
    pub fn new() -> Self {
        Self
    }

    fn cure_nearby(body: &mut Body<'_>) -> usize {
        let patients = neighbors_where(body, Agent::is_sick);
        patients.into_iter().filter(|&id| body.cure(id)).count()
    }
}

impl Behavior for Curer {
    fn decide_and_act(&mut self, body: &mut Body<'_>) {
        let Some(here) = body.location() else { return };
        let Some((patient, at)) = closest_agent(body, Agent::is_sick) else {
            random_move(body);
            return;
        };

        // No step means the target is already within reach.
        let arrived = match greedy_step(here, at, 1) {
            Some(direction) => body.move_in(direction),
            None            => true,
        };
        if arrived {
            let cured = Self::cure_nearby(body);
            trace!(curer = %body.id(), %patient, cured, "treated neighborhood");
        }
    }

    fn label(&self) -> &'static str {
        "curer"
    }
}
