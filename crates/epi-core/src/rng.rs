//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each registered agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Every behavior decision and disease roll an agent makes draws from its own
//! stream, so adding an agent at the end of the roster does not disturb the
//! draws of the agents registered before it.  Run-level draws (placement,
//! risk attributes) use a single [`SimRng`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// One uniform draw in `[0, 1)` compared against `p`.  Probabilities
    /// above 1 always hit, probabilities at or below 0 never do.
    #[inline]
    pub fn roll(&mut self, p: f64) -> bool {
        self.0.r#gen::<f64>() < p
    }

    /// Choose a random element from a slice, `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for population setup: placement and risk attributes.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Fair coin.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.0.r#gen::<bool>()
    }
}
