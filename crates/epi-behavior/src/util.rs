//! Movement and targeting primitives shared by every strategy.

use epi_core::{AgentId, Coordinates, Direction};
use epi_world::{Agent, Body};

/// The closest other on-grid agent satisfying `pred`, by Manhattan distance.
///
/// Ties go to the earliest-registered agent.
pub fn closest_agent<P>(body: &Body<'_>, mut pred: P) -> Option<(AgentId, Coordinates)>
where
    P: FnMut(&Agent) -> bool,
{
    let here = body.location()?;
    let mut best: Option<(AgentId, Coordinates, u32)> = None;
    for (id, agent) in body.grid().agents() {
        if id == body.id() {
            continue;
        }
        let Some(at) = agent.location() else { continue };
        if !pred(agent) {
            continue;
        }
        let d = here.manhattan(at);
        if best.is_none_or(|(_, _, best_d)| d < best_d) {
            best = Some((id, at, d));
        }
    }
    best.map(|(id, at, _)| (id, at))
}

/// Axis-dominant step from `from` towards `to`.
///
/// The axis with the larger offset wins, `x` on a tie.  The step is taken
/// only if that offset exceeds `threshold`, so threshold 1 treats an offset
/// of ±1 as already adjacent and threshold 0 moves on any nonzero offset.
pub fn greedy_step(from: Coordinates, to: Coordinates, threshold: u32) -> Option<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let t = threshold as i32;
    if dx.abs() >= dy.abs() {
        if dx > t {
            Some(Direction::East)
        } else if dx < -t {
            Some(Direction::West)
        } else {
            None
        }
    } else if dy > t {
        Some(Direction::South)
    } else if dy < -t {
        Some(Direction::North)
    } else {
        None
    }
}

/// Try a uniformly random direction; after a successful step, face one
/// quarter-turn clockwise of the heading held before the move.
pub fn random_move(body: &mut Body<'_>) -> bool {
    let before = body.facing();
    let Some(&direction) = body.rng().choose(&Direction::ALL) else {
        return false;
    };
    let moved = body.move_in(direction);
    if moved {
        body.spin(before.next_clockwise());
    }
    moved
}

/// IDs of agents in the 8-neighborhood of the acting agent that satisfy
/// `pred`, in column-major scan order.
pub fn neighbors_where<P>(body: &Body<'_>, mut pred: P) -> Vec<AgentId>
where
    P: FnMut(&Agent) -> bool,
{
    let Some(here) = body.location() else {
        return Vec::new();
    };
    let grid = body.grid();
    here.ring(1)
        .filter_map(|c| grid.occupant(c))
        .filter(|&id| grid.agent(id).is_some_and(&mut pred))
        .collect()
}
