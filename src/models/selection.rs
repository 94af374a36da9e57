//! Selection (solution) model.
//!
//! A selection is the answer to a weighted job scheduling problem: the
//! best achievable total payoff and the jobs that realize it.

use serde::{Deserialize, Serialize};

use super::Job;

/// An optimal (or oracle-computed) selection of jobs.
///
/// `jobs` is in chronological order (ascending finish time). When the
/// selection comes from the brute-force oracle, only `total_payoff` is
/// populated and `jobs` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Maximum achievable total payoff.
    pub total_payoff: i64,
    /// Selected jobs, ordered by finish time.
    pub jobs: Vec<Job>,
}

impl Selection {
    /// Creates a selection.
    pub fn new(total_payoff: i64, jobs: Vec<Job>) -> Self {
        Self { total_payoff, jobs }
    }

    /// The empty selection (payoff 0, no jobs).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of selected jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sum of the selected jobs' payoffs, saturating at the `i64` bounds.
    pub fn payoff_sum(&self) -> i64 {
        self.jobs.iter().map(|j| j.payoff).fold(0, i64::saturating_add)
    }

    /// Total time covered by the selected jobs, saturating at `i64::MAX`.
    pub fn busy_time(&self) -> i64 {
        self.jobs.iter().map(Job::duration).fold(0, i64::saturating_add)
    }

    /// Whether the selected jobs are pairwise non-overlapping.
    ///
    /// Jobs are expected in finish order, so checking neighbours suffices.
    pub fn is_non_overlapping(&self) -> bool {
        self.jobs.windows(2).all(|w| w[0].precedes(&w[1]))
    }

    /// Whether the jobs are in ascending finish order.
    pub fn is_chronological(&self) -> bool {
        self.jobs.windows(2).all(|w| w[0].finish <= w[1].finish)
    }

    /// Whether the selection is internally consistent: chronological,
    /// non-overlapping, and its payoffs sum to `total_payoff`.
    pub fn is_consistent(&self) -> bool {
        self.is_chronological() && self.is_non_overlapping() && self.payoff_sum() == self.total_payoff
    }
}
