//! Plain data row types written by output backends.

use epi_core::Round;
use epi_world::{Grid, RunStats};

/// Column names of the run log, in order.
pub const RUN_RECORD_HEADER: [&str; 21] = [
    "turn", "dead", "infected", "recovered", "vaccinated", "cured", "total_population",
    "mortality_rate", "infection_rate", "recovery_rate", "vaccination_rate", "cured_rate",
    "male", "female", "smoker", "non_smoker", "pre_existing", "none",
    "active", "sedentary", "moderate",
];

/// Column names of `round_summaries.csv`, in order.
pub const ROUND_SUMMARY_HEADER: [&str; 7] =
    ["round", "susceptible", "infected", "sick", "recovered", "dead", "walls"];

/// One completed run: the final tallies, rates over the starting population,
/// and the attribute histograms.
///
/// `turn` numbers runs within one log, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRecordRow {
    pub turn:             u64,
    pub dead:             u32,
    pub infected:         u32,
    pub recovered:        u32,
    pub vaccinated:       u32,
    pub cured:            u32,
    pub total_population: u32,

    pub mortality_rate:   f64,
    pub infection_rate:   f64,
    pub recovery_rate:    f64,
    pub vaccination_rate: f64,
    pub cured_rate:       f64,

    pub male:             u32,
    pub female:           u32,
    pub smoker:           u32,
    pub non_smoker:       u32,
    pub pre_existing:     u32,
    pub no_pre_existing:  u32,
    pub active:           u32,
    pub sedentary:        u32,
    pub moderate:         u32,
}

impl RunRecordRow {
    /// All five rates are `count / total_population`, or `0.0` when the
    /// population is empty.
    pub fn from_stats(turn: u64, stats: &RunStats, total_population: u32) -> Self {
        let rate = |count: u32| {
            if total_population == 0 { 0.0 } else { f64::from(count) / f64::from(total_population) }
        };
        Self {
            turn,
            dead:             stats.dead,
            infected:         stats.infected,
            recovered:        stats.recovered,
            vaccinated:       stats.vaccinated,
            cured:            stats.cured,
            total_population,
            mortality_rate:   rate(stats.dead),
            infection_rate:   rate(stats.infected),
            recovery_rate:    rate(stats.recovered),
            vaccination_rate: rate(stats.vaccinated),
            cured_rate:       rate(stats.cured),
            male:             stats.male,
            female:           stats.female,
            smoker:           stats.smoker,
            non_smoker:       stats.non_smoker,
            pre_existing:     stats.pre_existing,
            no_pre_existing:  stats.no_pre_existing,
            active:           stats.active,
            sedentary:        stats.sedentary,
            moderate:         stats.moderate,
        }
    }

    pub(crate) fn to_record(&self) -> [String; 21] {
        [
            self.turn.to_string(),
            self.dead.to_string(),
            self.infected.to_string(),
            self.recovered.to_string(),
            self.vaccinated.to_string(),
            self.cured.to_string(),
            self.total_population.to_string(),
            self.mortality_rate.to_string(),
            self.infection_rate.to_string(),
            self.recovery_rate.to_string(),
            self.vaccination_rate.to_string(),
            self.cured_rate.to_string(),
            self.male.to_string(),
            self.female.to_string(),
            self.smoker.to_string(),
            self.non_smoker.to_string(),
            self.pre_existing.to_string(),
            self.no_pre_existing.to_string(),
            self.active.to_string(),
            self.sedentary.to_string(),
            self.moderate.to_string(),
        ]
    }
}

/// Compartment counts and wall count at the end of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub round:       u64,
    pub susceptible: u32,
    pub infected:    u32,
    pub sick:        u32,
    pub recovered:   u32,
    pub dead:        u32,
    pub walls:       u32,
}

impl RoundSummaryRow {
    pub fn from_grid(round: Round, grid: &Grid) -> Self {
        let census = grid.census();
        Self {
            round:       round.0,
            susceptible: census.susceptible,
            infected:    census.infected,
            sick:        census.sick,
            recovered:   census.recovered,
            dead:        census.dead,
            walls:       grid.wall_count(),
        }
    }

    pub(crate) fn to_record(&self) -> [String; 7] {
        [
            self.round.to_string(),
            self.susceptible.to_string(),
            self.infected.to_string(),
            self.sick.to_string(),
            self.recovered.to_string(),
            self.dead.to_string(),
            self.walls.to_string(),
        ]
    }
}
