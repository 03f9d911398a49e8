//! Disease parameters shared by every agent of a run.

/// How far a sick agent can reach when infecting others.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransmissionMode {
    /// Mode 0: the 8 cells immediately around the agent.
    #[default]
    Contact,
    /// Mode 1: the 5×5 block around the agent (Chebyshev radius 2).
    ExtendedRange,
}

impl TransmissionMode {
    /// Chebyshev radius of the contact neighborhood.
    #[inline]
    pub fn radius(self) -> i32 {
        match self {
            TransmissionMode::Contact       => 1,
            TransmissionMode::ExtendedRange => 2,
        }
    }

    /// Map the numeric mode used by configuration files (0 or 1).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TransmissionMode::Contact),
            1 => Some(TransmissionMode::ExtendedRange),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            TransmissionMode::Contact       => 0,
            TransmissionMode::ExtendedRange => 1,
        }
    }
}

/// Per-run disease parameters, fixed at agent construction.
///
/// Probabilities are in `[0, 1]`.  `vaccine_efficacy_factor` multiplies the
/// infection probability of a vaccinated agent: `0.0` is full protection,
/// `1.0` is none.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseParams {
    pub mode:                    TransmissionMode,
    pub infection_probability:   f64,
    pub death_probability:       f64,
    /// Turns spent Infected before becoming Sick; onset happens once the
    /// incubation counter *exceeds* this value.
    pub incubation_turns:        u32,
    /// Turns spent Sick before the outcome roll; the roll happens once the
    /// recovery counter *exceeds* this value.
    pub recovery_turns:          u32,
    pub vaccine_efficacy_factor: f64,
}

impl DiseaseParams {
    /// Build from the percentage form used by configuration input.
    ///
    /// `vaccine_efficacy_pct` is how effective the vaccine is, so 100 %
    /// yields a factor of `0.0`.
    pub fn from_percentages(
        mode:                 TransmissionMode,
        infection_pct:        u32,
        death_pct:            u32,
        incubation_turns:     u32,
        recovery_turns:       u32,
        vaccine_efficacy_pct: u32,
    ) -> Self {
        Self {
            mode,
            infection_probability:   f64::from(infection_pct) * 0.01,
            death_probability:       f64::from(death_pct) * 0.01,
            incubation_turns,
            recovery_turns,
            vaccine_efficacy_factor: 1.0 - f64::from(vaccine_efficacy_pct) * 0.01,
        }
    }
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self::from_percentages(TransmissionMode::Contact, 30, 10, 3, 7, 80)
    }
}
