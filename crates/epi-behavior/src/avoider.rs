//! Avoider strategy: keep away from everyone.

use epi_core::{Coordinates, Direction};
use epi_world::{Behavior, Body};

use crate::util::{closest_agent, random_move};

/// Beyond this Manhattan distance the nearest agent is ignored.
pub const AVOID_RANGE: u32 = 10;

/// Steps directly away from the nearest agent of any status.  When two
/// escape axes are open, prefers the ones that lead towards the grid's
/// centre so it does not pin itself against an edge.
#[derive(Debug, Default)]
pub struct Avoider;

impl Avoider {
    pub fn new() -> Self {
        Self
    }

    /// Escape headings away from `threat`, restricted to centre-ward ones
    /// when more than one axis is available.
    pub fn escape_directions(here: Coordinates, threat: Coordinates, width: u32, height: u32) -> Vec<Direction> {
        let dx = threat.x - here.x;
        let dy = threat.y - here.y;

        let mut possible = Vec::with_capacity(2);
        if dx > 0 {
            possible.push(Direction::West);
        } else if dx < 0 {
            possible.push(Direction::East);
        }
        if dy > 0 {
            possible.push(Direction::North);
        } else if dy < 0 {
            possible.push(Direction::South);
        }

        if possible.len() > 1 {
            let preferred_x = if here.x < (width / 2) as i32 { Direction::East } else { Direction::West };
            let preferred_y = if here.y < (height / 2) as i32 { Direction::South } else { Direction::North };
            let preferred: Vec<Direction> = possible
                .iter()
                .copied()
                .filter(|&d| d == preferred_x || d == preferred_y)
                .collect();
            if !preferred.is_empty() {
                return preferred;
            }
        }
        possible
    }
}

impl Behavior for Avoider {
    fn decide_and_act(&mut self, body: &mut Body<'_>) {
        let Some(here) = body.location() else { return };

        let threat = closest_agent(body, |_| true)
            .map(|(_, at)| at)
            .filter(|&at| here.manhattan(at) <= AVOID_RANGE);
        let Some(threat) = threat else {
            random_move(body);
            return;
        };

        let options = Self::escape_directions(here, threat, body.grid().width(), body.grid().height());
        if let Some(&direction) = body.rng().choose(&options) {
            body.move_in(direction);
        }
    }

    fn label(&self) -> &'static str {
        "avoider"
    }
}
