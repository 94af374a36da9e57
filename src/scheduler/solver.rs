//! Configurable end-to-end solver.
//!
//! Takes raw jobs, builds the finish-ordered job set, and runs either the
//! dynamic-programming selector or the brute-force oracle.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{brute_force_payoff, last_compatible_jobs, solve_with, TieBreak};
use crate::error::Result;
use crate::models::{Job, JobSet, Selection};

/// Which algorithm computes the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// Compatibility index plus dynamic programming. O(n log n).
    #[default]
    Dynamic,
    /// Exhaustive recursion. Payoff only; exponential time.
    BruteForce,
}

/// Solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Algorithm to run.
    pub mode: SolveMode,
    /// Rule for take/skip ties.
    pub tie_break: TieBreak,
    /// Treat input as already sorted by finish time and fail on disorder
    /// instead of sorting.
    pub require_sorted: bool,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the algorithm.
    pub fn with_mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Requires pre-sorted input.
    pub fn with_require_sorted(mut self, require_sorted: bool) -> Self {
        self.require_sorted = require_sorted;
        self
    }
}

/// Weighted job scheduling solver.
///
/// # Example
///
/// ```
/// use payoff_sched::models::Job;
/// use payoff_sched::scheduler::Solver;
///
/// let jobs = vec![Job::new(1, 2, 50), Job::new(3, 4, 10), Job::new(0, 6, 100)];
/// let selection = Solver::default().solve(jobs).unwrap();
/// assert_eq!(selection.total_payoff, 100);
/// assert_eq!(selection.jobs, vec![Job::new(0, 6, 100)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Builds the job set according to the configuration.
    pub fn prepare(&self, jobs: Vec<Job>) -> Result<JobSet> {
        if self.config.require_sorted {
            JobSet::from_sorted(jobs)
        } else {
            Ok(JobSet::new(jobs))
        }
    }

    /// Solves from raw jobs.
    pub fn solve(&self, jobs: Vec<Job>) -> Result<Selection> {
        let jobs = self.prepare(jobs)?;
        self.solve_set(&jobs)
    }

    /// Solves an already-built job set.
    pub fn solve_set(&self, jobs: &JobSet) -> Result<Selection> {
        debug!(jobs = jobs.len(), mode = ?self.config.mode, "solving");
        match self.config.mode {
            SolveMode::Dynamic => {
                let compatibility = last_compatible_jobs(jobs);
                solve_with(jobs, &compatibility, self.config.tie_break)
            }
            SolveMode::BruteForce => {
                if jobs.len() > 30 {
                    warn!(jobs = jobs.len(), "brute force on a large input; this may not finish");
                }
                Ok(Selection::new(brute_force_payoff(jobs)?, Vec::new()))
            }
        }
    }
}
