//! Random problem instances.
//!
//! Produces reproducible job sets for benchmarking and testing. Start
//! times are uniform over the horizon, durations uniform in
//! `1..=max_duration`, payoffs uniform over the configured range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Job;

/// Random job generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobGenerator {
    /// Number of jobs to generate.
    pub count: usize,
    /// Start times fall in `0..horizon`.
    pub horizon: i64,
    /// Longest job duration (at least 1).
    pub max_duration: i64,
    /// Smallest payoff (inclusive).
    pub min_payoff: i64,
    /// Largest payoff (inclusive).
    pub max_payoff: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for JobGenerator {
    fn default() -> Self {
        Self {
            count: 10,
            horizon: 100,
            max_duration: 20,
            min_payoff: 1,
            max_payoff: 100,
            seed: 0,
        }
    }
}

impl JobGenerator {
    /// Creates a generator for `count` jobs with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the start-time horizon.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the longest duration.
    pub fn with_max_duration(mut self, max_duration: i64) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Sets the payoff range (inclusive on both ends).
    pub fn with_payoff_range(mut self, min_payoff: i64, max_payoff: i64) -> Self {
        self.min_payoff = min_payoff;
        self.max_payoff = max_payoff;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the jobs, in generation (unsorted) order.
    ///
    /// Degenerate ranges are clamped: a non-positive horizon starts every
    /// job at 0, and an inverted payoff range uses `min_payoff` only.
    pub fn generate(&self) -> Vec<Job> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let horizon = self.horizon.max(1);
        let max_duration = self.max_duration.max(1);
        let max_payoff = self.max_payoff.max(self.min_payoff);

        (0..self.count)
            .map(|_| {
                let start = rng.random_range(0..horizon);
                let duration = rng.random_range(1..=max_duration);
                let payoff = rng.random_range(self.min_payoff..=max_payoff);
                Job::new(start, start.saturating_add(duration), payoff)
            })
            .collect()
    }
}
