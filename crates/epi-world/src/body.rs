//! `Body`: the acting agent's handle onto the world during its turn.

use epi_core::{AgentId, AgentRng, Coordinates, Direction};

use crate::{Agent, Grid};

/// Handle passed to [`Behavior::decide_and_act`][crate::Behavior::decide_and_act].
///
/// Holds the acting agent's ID and an exclusive borrow of the grid.  The
/// agent's own state is mutated only through the movement methods below;
/// other agents can be read through [`grid`][Self::grid] and affected only
/// through [`cure`][Self::cure] and [`vaccinate`][Self::vaccinate].
pub struct Body<'a> {
    id:   AgentId,
    grid: &'a mut Grid,
}

impl<'a> Body<'a> {
    pub(crate) fn new(id: AgentId, grid: &'a mut Grid) -> Self {
        Self { id, grid }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// The acting agent.
    #[inline]
    pub fn agent(&self) -> &Agent {
        &self.grid.agents[self.id.index()]
    }

    #[inline]
    pub fn location(&self) -> Option<Coordinates> {
        self.agent().location()
    }

    #[inline]
    pub fn facing(&self) -> Direction {
        self.agent().facing()
    }

    /// Read-only view of the whole world.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// The acting agent's RNG stream.
    #[inline]
    pub fn rng(&mut self) -> &mut AgentRng {
        &mut self.grid.rngs[self.id.index()]
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Face `direction`, then step into the neighboring cell if it is empty.
    pub fn move_in(&mut self, direction: Direction) -> bool {
        self.grid.move_agent(self.id, direction)
    }

    pub fn move_forward(&mut self) -> bool {
        let facing = self.facing();
        self.move_in(facing)
    }

    pub fn spin(&mut self, facing: Direction) {
        self.grid.spin(self.id, facing);
    }

    pub fn is_stuck(&self) -> bool {
        self.grid.is_stuck(self.id)
    }

    // ── World-level actions ───────────────────────────────────────────────

    pub fn add_wall(&mut self, location: Coordinates) -> bool {
        self.grid.add_wall(location)
    }

    pub fn cure(&mut self, target: AgentId) -> bool {
        self.grid.cure(target)
    }

    pub fn vaccinate(&mut self, target: AgentId) -> bool {
        self.grid.vaccinate(target)
    }
}
