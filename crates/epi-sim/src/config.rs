//! `SimConfig`: every run parameter, loaded from TOML.
//!
//! ```toml
//! [world]
//! width = 30
//! height = 30
//! seed = 7
//! max_rounds = 2000
//!
//! [population]
//! baseline_healthy = 40
//! baseline_sick = 3
//! curers = 2
//!
//! [disease]
//! mode = 1            # 0 = contact, 1 = extended range
//! infection_pct = 25
//!
//! [output]
//! directory = "runs"
//! round_summaries = true
//! ```
//!
//! Every section and field is optional; missing values take the defaults
//! below.  Parameters are fixed once a [`Sim`][crate::Sim] is built.

use std::path::{Path, PathBuf};

use epi_core::{DiseaseParams, TransmissionMode};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub world:      WorldConfig,
    pub population: PopulationConfig,
    pub disease:    DiseaseConfig,
    pub output:     OutputConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    pub width:  u32,
    pub height: u32,
    pub seed:   u64,
    /// Upper bound for [`Sim::run`][crate::Sim::run].
    pub max_rounds: u64,
    /// Row the partitioner walls off.  Defaults to `height / 2`.
    pub partition_row: Option<u32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 30, height: 30, seed: 42, max_rounds: 1_000, partition_row: None }
    }
}

/// Agent counts per strategy group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopulationConfig {
    pub baseline_healthy: u32,
    pub avoider_healthy:  u32,
    pub baseline_sick:    u32,
    pub avoider_sick:     u32,
    pub curers:           u32,
    pub immunizers:       u32,
    pub partitioners:     u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            baseline_healthy: 40,
            avoider_healthy:  20,
            baseline_sick:    3,
            avoider_sick:     2,
            curers:           2,
            immunizers:       2,
            partitioners:     1,
        }
    }
}

impl PopulationConfig {
    pub fn total(&self) -> u64 {
        [
            self.baseline_healthy,
            self.avoider_healthy,
            self.baseline_sick,
            self.avoider_sick,
            self.curers,
            self.immunizers,
            self.partitioners,
        ]
        .iter()
        .map(|&n| u64::from(n))
        .sum()
    }
}

/// Disease parameters in the percentage form accepted from users.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiseaseConfig {
    /// 0 = contact (8 neighbors), 1 = extended range (5×5 block).
    pub mode:                 u8,
    pub infection_pct:        u32,
    pub death_pct:            u32,
    pub incubation_turns:     u32,
    pub recovery_turns:       u32,
    pub vaccine_efficacy_pct: u32,
}

impl Default for DiseaseConfig {
    fn default() -> Self {
        Self {
            mode:                 0,
            infection_pct:        30,
            death_pct:            10,
            incubation_turns:     3,
            recovery_turns:       7,
            vaccine_efficacy_pct: 80,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// File name of the append-only run log inside `directory`.
    pub run_log: String,
    /// Also write one summary row per round.
    pub round_summaries: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory:       PathBuf::from("output"),
            run_log:         "simulation_data.csv".to_owned(),
            round_summaries: false,
        }
    }
}

impl SimConfig {
    /// Parse and validate.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> ConfigResult<()> {
        let w = &self.world;
        check("world.width", w.width, 1, i32::MAX as u32)?;
        check("world.height", w.height, 1, i32::MAX as u32)?;
        if let Some(row) = w.partition_row {
            check("world.partition_row", row, 0, w.height - 1)?;
        }

        let p = &self.population;
        check("population.baseline_healthy", p.baseline_healthy, 0, 50)?;
        check("population.avoider_healthy", p.avoider_healthy, 0, 50)?;
        check("population.baseline_sick", p.baseline_sick, 0, 50)?;
        check("population.avoider_sick", p.avoider_sick, 0, 50)?;
        check("population.curers", p.curers, 0, 10)?;
        check("population.immunizers", p.immunizers, 0, 10)?;
        check("population.partitioners", p.partitioners, 0, 1)?;

        let d = &self.disease;
        check("disease.mode", u32::from(d.mode), 0, 1)?;
        check("disease.infection_pct", d.infection_pct, 0, 100)?;
        check("disease.death_pct", d.death_pct, 0, 100)?;
        check("disease.incubation_turns", d.incubation_turns, 0, 100)?;
        check("disease.recovery_turns", d.recovery_turns, 1, 100)?;
        check("disease.vaccine_efficacy_pct", d.vaccine_efficacy_pct, 0, 100)?;

        if self.output.run_log.is_empty() {
            return Err(ConfigError::Invalid {
                field:  "output.run_log",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    pub fn partition_row(&self) -> u32 {
        self.world.partition_row.unwrap_or(self.world.height / 2)
    }

    pub fn transmission_mode(&self) -> ConfigResult<TransmissionMode> {
        TransmissionMode::from_code(self.disease.mode).ok_or_else(|| ConfigError::Invalid {
            field:  "disease.mode",
            reason: format!("{} is not 0 or 1", self.disease.mode),
        })
    }

    /// Percentages converted to probabilities.
    pub fn disease_params(&self) -> ConfigResult<DiseaseParams> {
        let d = &self.disease;
        Ok(DiseaseParams::from_percentages(
            self.transmission_mode()?,
            d.infection_pct,
            d.death_pct,
            d.incubation_turns,
            d.recovery_turns,
            d.vaccine_efficacy_pct,
        ))
    }

    pub fn run_log_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.run_log)
    }
}

fn check(field: &'static str, value: u32, min: u32, max: u32) -> ConfigResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is outside {min}..={max}"),
        })
    }
}
