//! Run-scoped population counters.
//!
//! A [`RunStats`] lives inside its [`Grid`][crate::Grid] and is created with
//! it, so starting a fresh run is the only reset.  Each compartment change
//! bumps exactly one tally:
//!
//! | Transition                        | Tally        |
//! |-----------------------------------|--------------|
//! | Susceptible → Infected (contact)  | `infected`   |
//! | Sick → Recovered (recovery roll)  | `recovered`  |
//! | Sick → Dead (death roll)          | `dead`       |
//! | Sick → Recovered (cured)          | `cured`      |
//! | vaccination (flag set)            | `vaccinated` |
//!
//! Infected → Sick onset and the initial seeding of sick agents change no
//! tally.

use crate::agent::{Gender, Lifestyle, RiskProfile};
use crate::Compartment;

/// Aggregate counters plus the attribute histograms of every registered
/// agent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    pub dead:       u32,
    pub infected:   u32,
    pub recovered:  u32,
    pub vaccinated: u32,
    pub cured:      u32,

    pub male:   u32,
    pub female: u32,

    pub smoker:     u32,
    pub non_smoker: u32,

    pub pre_existing:    u32,
    pub no_pre_existing: u32,

    pub active:    u32,
    pub sedentary: u32,
    pub moderate:  u32,
}

impl RunStats {
    /// Add one agent to the attribute histograms.
    pub(crate) fn record_registration(&mut self, risk: &RiskProfile) {
        match risk.gender {
            Gender::Male   => self.male += 1,
            Gender::Female => self.female += 1,
        }
        if risk.smoker { self.smoker += 1 } else { self.non_smoker += 1 }
        if risk.pre_existing { self.pre_existing += 1 } else { self.no_pre_existing += 1 }
        match risk.lifestyle {
            Lifestyle::Active    => self.active += 1,
            Lifestyle::Sedentary => self.sedentary += 1,
            Lifestyle::Moderate  => self.moderate += 1,
        }
    }
}

/// Point-in-time count of agents per compartment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Census {
    pub susceptible: u32,
    pub infected:    u32,
    pub sick:        u32,
    pub recovered:   u32,
    pub dead:        u32,
}

impl Census {
    pub(crate) fn count(&mut self, compartment: Compartment) {
        match compartment {
            Compartment::Susceptible => self.susceptible += 1,
            Compartment::Infected    => self.infected += 1,
            Compartment::Sick        => self.sick += 1,
            Compartment::Recovered   => self.recovered += 1,
            Compartment::Dead        => self.dead += 1,
        }
    }

    /// No agent is incubating or contagious.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.infected == 0 && self.sick == 0
    }

    pub fn total(&self) -> u32 {
        self.susceptible + self.infected + self.sick + self.recovered + self.dead
    }
}
