//! The world: cell array, agent roster, and round-robin turn scheduler.
//!
//! # Storage
//!
//! The grid is the sole owner of all simulation state.  Per-agent data lives
//! in three parallel `Vec`s indexed by [`AgentId`]:
//!
//! | Vec       | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | `agents`  | [`Agent`] bodies (position, compartment, attributes) |
//! | `rngs`    | per-agent [`AgentRng`] streams                       |
//! | `brains`  | boxed [`Behavior`] strategies                        |
//!
//! Cells refer to agents by ID and agents record their own coordinates; both
//! sides are only written by grid methods.  During a turn the acting agent's
//! brain is taken out of its slot, so the grid can lend itself mutably to
//! the [`Body`] handle without aliasing the strategy.

use std::fmt;

use epi_core::{AgentId, AgentRng, Coordinates, Direction, EpiError, EpiResult};
use tracing::{debug, trace};

use crate::{Agent, Behavior, Body, Cell, Census, Compartment, RunStats};

// ── Placement rejection ───────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RejectReason {
    /// The target cell is a wall, out of range, or holds another agent.
    CellNotEmpty(Cell),
    /// The agent already has a location.
    AlreadyPlaced,
    /// No agent IDs left.
    RosterFull,
}

/// A failed [`Grid::place`].  Hands the agent and its brain back.
pub struct Rejected {
    pub agent:  Agent,
    pub brain:  Box<dyn Behavior>,
    pub reason: RejectReason,
}

impl fmt::Debug for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("agent", &self.agent.name())
            .field("brain", &self.brain.label())
            .field("reason", &self.reason)
            .finish()
    }
}

// ── Display status ────────────────────────────────────────────────────────────

/// What a renderer should show for a live agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DisplayStatus {
    Sick,
    Stuck,
    Recovered,
    Susceptible,
    Infected,
}

// ── Grid ──────────────────────────────────────────────────────────────────────

pub struct Grid {
    width:  u32,
    height: u32,
    seed:   u64,
    cells:  Vec<Cell>,
    walls:  u32,

    pub(crate) agents: Vec<Agent>,
    pub(crate) rngs:   Vec<AgentRng>,
    brains:            Vec<Option<Box<dyn Behavior>>>,

    cursor:            usize,
    pub(crate) stats:  RunStats,
    removed:           Vec<AgentId>,
}

impl Grid {
    /// An all-empty `width × height` grid.  `seed` seeds every agent's RNG
    /// stream at registration.
    pub fn new(width: u32, height: u32, seed: u64) -> EpiResult<Self> {
        if width == 0 || height == 0 {
            return Err(EpiError::InvalidParameter(format!(
                "grid must be at least 1×1, got {width}×{height}"
            )));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(EpiError::InvalidParameter(format!(
                "grid dimensions {width}×{height} exceed the coordinate range"
            )));
        }
        let cells = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| EpiError::InvalidParameter("grid too large".to_owned()))?;

        Ok(Self {
            width,
            height,
            seed,
            cells: vec![Cell::Empty; cells],
            walls: 0,
            agents: Vec::new(),
            rngs: Vec::new(),
            brains: Vec::new(),
            cursor: 0,
            stats: RunStats::default(),
            removed: Vec::new(),
        })
    }

    // ── Read views ────────────────────────────────────────────────────────

    #[inline] pub fn width(&self)  -> u32 { self.width }
    #[inline] pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn contains(&self, c: Coordinates) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as u32) < self.width && (c.y as u32) < self.height
    }

    #[inline]
    fn cell_index(&self, c: Coordinates) -> Option<usize> {
        self.contains(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    /// The cell at `c`.  Any address outside the grid reads as a wall.
    #[inline]
    pub fn cell_at(&self, c: Coordinates) -> Cell {
        match self.cell_index(c) {
            Some(i) => self.cells[i],
            None    => Cell::Wall,
        }
    }

    /// The agent occupying `c`, if any.
    pub fn occupant(&self, c: Coordinates) -> Option<AgentId> {
        self.cell_at(c).agent()
    }

    pub fn agent_at(&self, c: Coordinates) -> Option<&Agent> {
        self.occupant(c).map(|id| &self.agents[id.index()])
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Every registered agent in turn order, dead ones included.
    pub fn agents(&self) -> impl ExactSizeIterator<Item = (AgentId, &Agent)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// The agent whose turn is next; `None` on an empty roster.
    pub fn next_agent(&self) -> Option<AgentId> {
        (!self.agents.is_empty()).then(|| AgentId(self.cursor as u32))
    }

    /// Role label of the agent's strategy.
    pub fn behavior_label(&self, id: AgentId) -> Option<&'static str> {
        self.brains.get(id.index())?.as_ref().map(|b| b.label())
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn wall_count(&self) -> u32 {
        self.walls
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for agent in &self.agents {
            census.count(agent.compartment);
        }
        census
    }

    /// Renderer status of a live agent; `None` for dead or unknown agents.
    ///
    /// Checked in the order sick, stuck, recovered, susceptible, infected.
    pub fn display_status(&self, id: AgentId) -> Option<DisplayStatus> {
        let agent = self.agent(id)?;
        let status = match agent.compartment {
            Compartment::Dead        => return None,
            Compartment::Sick        => DisplayStatus::Sick,
            _ if self.is_stuck(id)   => DisplayStatus::Stuck,
            Compartment::Recovered   => DisplayStatus::Recovered,
            Compartment::Susceptible => DisplayStatus::Susceptible,
            Compartment::Infected    => DisplayStatus::Infected,
        };
        Some(status)
    }

    /// No world binding (detached or dead), or walls on all four sides.
    pub fn is_stuck(&self, id: AgentId) -> bool {
        let Some(here) = self.agent(id).and_then(Agent::location) else {
            return true;
        };
        Direction::ALL
            .iter()
            .all(|&d| self.cell_at(here.neighbor(d)).is_wall())
    }

    // ── Construction-time mutation ────────────────────────────────────────

    /// Bind `agent` to `location` facing `facing` and register it at the end
    /// of the turn order.
    ///
    /// Fails, handing both values back, when the cell is not empty or the
    /// agent already has a location.
    pub fn place(
        &mut self,
        mut agent: Agent,
        brain:     Box<dyn Behavior>,
        location:  Coordinates,
        facing:    Direction,
    ) -> Result<AgentId, Rejected> {
        if agent.location.is_some() {
            return Err(Rejected { agent, brain, reason: RejectReason::AlreadyPlaced });
        }
        let cell = self.cell_at(location);
        let Some(index) = self.cell_index(location).filter(|_| cell.is_empty()) else {
            return Err(Rejected { agent, brain, reason: RejectReason::CellNotEmpty(cell) });
        };
        let Some(id) = AgentId::try_from(self.agents.len())
            .ok()
            .filter(|id| *id != AgentId::INVALID)
        else {
            return Err(Rejected { agent, brain, reason: RejectReason::RosterFull });
        };

        agent.location = Some(location);
        agent.facing = facing;
        self.cells[index] = Cell::Occupied(id);
        self.stats.record_registration(agent.risk());
        trace!(%id, name = agent.name(), %location, role = brain.label(), "agent placed");

        self.agents.push(agent);
        self.rngs.push(AgentRng::new(self.seed, id));
        self.brains.push(Some(brain));
        Ok(id)
    }

    /// Turn an empty cell into a permanent wall.
    pub fn add_wall(&mut self, location: Coordinates) -> bool {
        match self.cell_index(location) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = Cell::Wall;
                self.walls += 1;
                debug!(%location, "wall placed");
                true
            }
            _ => false,
        }
    }

    // ── Forced transitions ────────────────────────────────────────────────

    /// Seed an initial case: Susceptible or Infected becomes Sick with both
    /// counters reset.  Changes no tally.
    pub fn make_sick(&mut self, id: AgentId) -> bool {
        let Some(agent) = self.agents.get_mut(id.index()) else {
            return false;
        };
        if !matches!(agent.compartment, Compartment::Susceptible | Compartment::Infected) {
            return false;
        }
        agent.compartment = Compartment::Sick;
        agent.incubation = 0;
        agent.recovery = 0;
        true
    }

    /// Sick becomes Recovered without a death roll.  Counts as a cure, not a
    /// recovery.
    pub fn cure(&mut self, id: AgentId) -> bool {
        let Some(agent) = self.agents.get_mut(id.index()) else {
            return false;
        };
        if agent.compartment != Compartment::Sick {
            return false;
        }
        agent.compartment = Compartment::Recovered;
        agent.recovery = 0;
        self.stats.cured += 1;
        debug!(%id, "cured");
        true
    }

    /// Set the vaccinated flag on a live agent.  Counted once per agent.
    pub fn vaccinate(&mut self, id: AgentId) -> bool {
        let Some(agent) = self.agents.get_mut(id.index()) else {
            return false;
        };
        if agent.vaccinated || agent.is_dead() {
            return false;
        }
        agent.vaccinated = true;
        self.stats.vaccinated += 1;
        debug!(%id, "vaccinated");
        true
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Face `direction` unconditionally, then step into the neighboring cell
    /// only if it is empty.
    pub(crate) fn move_agent(&mut self, id: AgentId, direction: Direction) -> bool {
        let Some(agent) = self.agents.get_mut(id.index()) else {
            return false;
        };
        agent.facing = direction;
        let Some(from) = agent.location else {
            return false;
        };
        let to = from.neighbor(direction);
        let (Some(from_i), Some(to_i)) = (self.cell_index(from), self.cell_index(to)) else {
            return false;
        };
        if !self.cells[to_i].is_empty() {
            return false;
        }
        self.cells[from_i] = Cell::Empty;
        self.cells[to_i] = Cell::Occupied(id);
        self.agents[id.index()].location = Some(to);
        true
    }

    pub(crate) fn spin(&mut self, id: AgentId, facing: Direction) {
        if let Some(agent) = self.agents.get_mut(id.index()) {
            agent.facing = facing;
        }
    }

    /// Sick becomes Dead: vacate the cell, drop the location, count it, and
    /// queue the ID for [`take_removed`][Self::take_removed].
    pub(crate) fn kill(&mut self, id: AgentId) {
        let agent = &mut self.agents[id.index()];
        agent.compartment = Compartment::Dead;
        if let Some(at) = agent.location.take() {
            if let Some(i) = self.cell_index(at) {
                self.cells[i] = Cell::Empty;
            }
        }
        self.stats.dead += 1;
        self.removed.push(id);
        debug!(%id, "died");
    }

    /// IDs of agents that died since the last call, in order of death.
    pub fn take_removed(&mut self) -> Vec<AgentId> {
        std::mem::take(&mut self.removed)
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// One agent's full turn: its strategy (unless stuck), then its disease
    /// update.
    pub fn take_turn(&mut self, id: AgentId) {
        if id.index() >= self.agents.len() {
            return;
        }
        if !self.is_stuck(id) {
            if let Some(mut brain) = self.brains[id.index()].take() {
                brain.decide_and_act(&mut Body::new(id, self));
                self.brains[id.index()] = Some(brain);
            }
        }
        self.update_disease(id);
    }

    /// Run the current turn-holder's turn, then pass the turn on.
    pub fn advance_one_agent(&mut self) {
        if self.agents.is_empty() {
            return;
        }
        let id = AgentId(self.cursor as u32);
        trace!(%id, "turn");
        self.take_turn(id);
        self.cursor = (self.cursor + 1) % self.agents.len();
    }

    /// One turn for every agent registered when the round starts.
    pub fn advance_full_round(&mut self) {
        let count = self.agents.len();
        for _ in 0..count {
            self.advance_one_agent();
        }
    }
}
