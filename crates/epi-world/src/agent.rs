//! The simulated body: identity, risk attributes, disease compartment, and
//! spatial state.
//!
//! An `Agent` is constructed detached (no location).  [`Grid::place`]
//! takes ownership and binds it; from then on every mutation goes through the
//! grid so cell occupancy and agent position never disagree.
//!
//! [`Grid::place`]: crate::Grid::place

use epi_core::{Coordinates, DiseaseParams, Direction, SimRng};

// ── Risk attributes ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifestyle {
    Active,
    Sedentary,
    Moderate,
}

/// Individual attributes drawn once at creation.  They never change and
/// determine the agent's susceptibility multiplier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskProfile {
    /// Years, `0..=100`.
    pub age:          u8,
    pub gender:       Gender,
    pub smoker:       bool,
    pub pre_existing: bool,
    pub lifestyle:    Lifestyle,
}

impl RiskProfile {
    pub fn new(
        age:          u8,
        gender:       Gender,
        smoker:       bool,
        pre_existing: bool,
        lifestyle:    Lifestyle,
    ) -> Self {
        Self { age: age.min(100), gender, smoker, pre_existing, lifestyle }
    }

    /// Uniform draw of every attribute.
    pub fn random(rng: &mut SimRng) -> Self {
        let age = rng.gen_range(0..=100u8);
        let gender = if rng.coin() { Gender::Male } else { Gender::Female };
        let smoker = rng.coin();
        let pre_existing = rng.coin();
        let lifestyle = match rng.gen_range(0..3u8) {
            0 => Lifestyle::Active,
            1 => Lifestyle::Sedentary,
            _ => Lifestyle::Moderate,
        };
        Self { age, gender, smoker, pre_existing, lifestyle }
    }

    /// Product of the per-attribute factors.
    pub fn susceptibility(&self) -> f64 {
        let age = match self.age {
            a if a < 18 => 0.8,
            a if a > 65 => 1.3,
            _           => 1.0,
        };
        let gender = match self.gender {
            Gender::Male   => 1.1,
            Gender::Female => 0.9,
        };
        let smoker = if self.smoker { 1.5 } else { 0.8 };
        let condition = if self.pre_existing { 2.0 } else { 1.0 };
        let lifestyle = match self.lifestyle {
            Lifestyle::Active    => 0.7,
            Lifestyle::Sedentary => 1.4,
            Lifestyle::Moderate  => 1.0,
        };
        age * gender * smoker * condition * lifestyle
    }
}

// ── Compartment ───────────────────────────────────────────────────────────────

/// Mutually exclusive disease status.
///
/// ```text
/// Susceptible ──▶ Infected ──▶ Sick ──┬──▶ Recovered
///                                      └──▶ Dead
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compartment {
    #[default]
    Susceptible,
    /// Incubating; not yet contagious.
    Infected,
    /// Contagious.
    Sick,
    Recovered,
    Dead,
}

impl Compartment {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Compartment::Recovered | Compartment::Dead)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compartment::Susceptible => "susceptible",
            Compartment::Infected    => "infected",
            Compartment::Sick        => "sick",
            Compartment::Recovered   => "recovered",
            Compartment::Dead        => "dead",
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One simulated individual.
#[derive(Clone, Debug)]
pub struct Agent {
    name:           String,
    risk:           RiskProfile,
    susceptibility: f64,
    disease:        DiseaseParams,

    pub(crate) compartment: Compartment,
    pub(crate) incubation:  u32,
    pub(crate) recovery:    u32,
    pub(crate) vaccinated:  bool,

    pub(crate) location: Option<Coordinates>,
    pub(crate) facing:   Direction,
}

impl Agent {
    /// A detached, susceptible agent.  An empty `name` becomes `"Incognito"`.
    pub fn new(name: impl Into<String>, risk: RiskProfile, disease: DiseaseParams) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = "Incognito".to_owned();
        }
        Self {
            name,
            susceptibility: risk.susceptibility(),
            risk,
            disease,
            compartment: Compartment::Susceptible,
            incubation:  0,
            recovery:    0,
            vaccinated:  false,
            location:    None,
            facing:      Direction::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn risk(&self) -> &RiskProfile {
        &self.risk
    }

    #[inline]
    pub fn susceptibility(&self) -> f64 {
        self.susceptibility
    }

    pub fn disease(&self) -> &DiseaseParams {
        &self.disease
    }

    #[inline]
    pub fn compartment(&self) -> Compartment {
        self.compartment
    }

    #[inline] pub fn is_susceptible(&self) -> bool { self.compartment == Compartment::Susceptible }
    #[inline] pub fn is_infected(&self)    -> bool { self.compartment == Compartment::Infected }
    #[inline] pub fn is_sick(&self)        -> bool { self.compartment == Compartment::Sick }
    #[inline] pub fn is_recovered(&self)   -> bool { self.compartment == Compartment::Recovered }
    #[inline] pub fn is_dead(&self)        -> bool { self.compartment == Compartment::Dead }

    #[inline]
    pub fn is_vaccinated(&self) -> bool {
        self.vaccinated
    }

    /// Turns spent Infected so far.
    pub fn incubation_counter(&self) -> u32 {
        self.incubation
    }

    /// Turns spent Sick so far.
    pub fn recovery_counter(&self) -> u32 {
        self.recovery
    }

    /// `None` while detached and after death.
    #[inline]
    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    #[inline]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Infection probability against one contagious neighbor.
    pub fn contact_probability(&self) -> f64 {
        let p = self.disease.infection_probability * self.susceptibility;
        if self.vaccinated { p * self.disease.vaccine_efficacy_factor } else { p }
    }
}
