//! Population placement: turns a [`SimConfig`] into a ready-to-run [`Sim`].

use epi_behavior::BehaviorKind;
use epi_core::{Coordinates, Direction, SimRng};
use epi_world::{Agent, Grid, RiskProfile};
use tracing::{debug, info};

use crate::{Sim, SimConfig, SimError, SimResult};

/// One placement group: how many agents, which strategy, whether they start
/// sick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub name:  &'static str,
    pub kind:  BehaviorKind,
    pub sick:  bool,
    pub count: u32,
}

/// Builds a [`Sim`] from a validated config.
///
/// Groups are placed in a fixed order: baseline healthy, baseline sick,
/// avoider healthy, avoider sick, curers, immunizers, partitioners.  Each
/// agent draws random cells until it finds an empty one and starts facing
/// east.
///
/// ```rust,ignore
/// let config = SimConfig::from_path("outbreak.toml")?;
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Placement groups in placement order.
    pub fn groups(&self) -> [Group; 7] {
        let p = &self.config.population;
        let g = |name, kind, sick, count| Group { name, kind, sick, count };
        [
            g("baseline-healthy", BehaviorKind::Baseline,    false, p.baseline_healthy),
            g("baseline-sick",    BehaviorKind::Baseline,    true,  p.baseline_sick),
            g("avoider-healthy",  BehaviorKind::Avoider,     false, p.avoider_healthy),
            g("avoider-sick",     BehaviorKind::Avoider,     true,  p.avoider_sick),
            g("curer",            BehaviorKind::Curer,       false, p.curers),
            g("immunizer",        BehaviorKind::Immunizer,   false, p.immunizers),
            g("partitioner",      BehaviorKind::Partitioner, false, p.partitioners),
        ]
    }

    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let params = self.config.disease_params()?;
        let world = &self.config.world;
        let mut grid = Grid::new(world.width, world.height, world.seed)?;
        let mut rng = SimRng::new(world.seed);
        let row = self.config.partition_row();
        let requested = self.config.population.total() as usize;

        for group in self.groups() {
            for n in 0..group.count {
                if grid.empty_cell_count() == 0 {
                    return Err(SimError::GridFull { placed: grid.agent_count(), requested });
                }
                let location = random_empty_cell(&grid, &mut rng);
                let agent = Agent::new(format!("{}-{n}", group.name), RiskProfile::random(&mut rng), params);
                let id = grid
                    .place(agent, group.kind.build(world.width, row), location, Direction::East)
                    .map_err(|_| SimError::GridFull { placed: grid.agent_count(), requested })?;
                if group.sick {
                    grid.make_sick(id);
                }
            }
            debug!(group = group.name, count = group.count, "group placed");
        }

        info!(
            width = world.width,
            height = world.height,
            agents = grid.agent_count(),
            seed = world.seed,
            "population placed"
        );
        Ok(Sim::new(grid, self.config))
    }
}

/// Rejection-sample a uniformly random empty cell.  The caller guarantees at
/// least one exists.
fn random_empty_cell(grid: &Grid, rng: &mut SimRng) -> Coordinates {
    loop {
        let c = Coordinates::new(
            rng.gen_range(0..grid.width() as i32),
            rng.gen_range(0..grid.height() as i32),
        );
        if grid.cell_at(c).is_empty() {
            return c;
        }
    }
}
