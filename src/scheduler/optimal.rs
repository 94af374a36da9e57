//! Optimal job selection by dynamic programming.
//!
//! # Algorithm
//!
//! Over jobs sorted by finish time, with `slot(i)` the solution-table index
//! just past job `i`'s compatible predecessor (`0` if none):
//!
//! ```text
//! table[0]   = 0
//! table[i+1] = max(table[i], payoff(i) + table[slot(i)])
//! ```
//!
//! The take/skip decision for every job is recorded in the forward pass
//! under a single [`TieBreak`] rule; reconstruction walks backward from `n`
//! following those decisions, so both passes agree on ties.
//!
//! # Complexity
//! O(n) for the table and O(n) for reconstruction, after the O(n log n)
//! compatibility index.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompatibilityTable;
use crate::error::{Error, Result};
use crate::models::{Job, JobSet, Selection};

/// Rule applied when taking a job is exactly as good as skipping it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// Take a job only when strictly better. Zero-payoff jobs are never
    /// selected.
    #[default]
    PreferSkip,
    /// Take a job whenever it is at least as good.
    PreferTake,
}

impl TieBreak {
    /// Whether a job with value `take` should be selected over `skip`.
    #[inline]
    pub fn takes(self, take: i64, skip: i64) -> bool {
        match self {
            TieBreak::PreferSkip => take > skip,
            TieBreak::PreferTake => take >= skip,
        }
    }
}

/// Best payoff for every prefix of a job set, plus the per-job decisions.
///
/// `payoffs()[i]` is the best payoff using only the first `i` jobs;
/// `payoffs()[0] == 0`. Built strictly left to right and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionTable {
    payoffs: Vec<i64>,
    taken: Vec<bool>,
}

impl SolutionTable {
    /// Runs the forward pass.
    ///
    /// `compatibility` must have one entry per job with every predecessor
    /// strictly before its job, as produced by [`CompatibilityTable::build`].
    ///
    /// # Errors
    /// [`Error::PreconditionViolation`] if the best payoff does not fit in
    /// an `i64`.
    pub fn build(
        jobs: &JobSet,
        compatibility: &CompatibilityTable,
        tie_break: TieBreak,
    ) -> Result<Self> {
        let mut payoffs = Vec::with_capacity(jobs.len() + 1);
        let mut taken = Vec::with_capacity(jobs.len());
        payoffs.push(0i64);

        for (i, job) in jobs.iter().enumerate() {
            let skip = payoffs[i];
            // Table entries are non-negative; only positive overflow occurs.
            let take = job
                .payoff
                .checked_add(payoffs[compatibility.slot(i)])
                .ok_or_else(|| payoff_overflow(i))?;
            let take_it = tie_break.takes(take, skip);
            taken.push(take_it);
            payoffs.push(if take_it { take } else { skip });
        }

        Ok(Self { payoffs, taken })
    }

    /// Best payoff over the whole job set.
    pub fn best(&self) -> i64 {
        self.payoffs.last().copied().unwrap_or(0)
    }

    /// Best payoff for every prefix (length `n + 1`).
    pub fn payoffs(&self) -> &[i64] {
        &self.payoffs
    }

    /// Whether the forward pass chose to take job `index`.
    pub fn is_taken(&self, index: usize) -> bool {
        self.taken[index]
    }

    /// Walks the recorded decisions backward from the full prefix and
    /// returns the selected jobs in chronological order.
    pub fn reconstruct(&self, jobs: &JobSet, compatibility: &CompatibilityTable) -> Vec<Job> {
        let mut selected = Vec::new();
        let mut i = jobs.len();

        while i > 0 {
            let index = i - 1;
            if self.taken[index] {
                selected.push(jobs[index]);
                i = compatibility.slot(index);
            } else {
                i = index;
            }
        }

        selected.reverse();
        selected
    }
}

pub(crate) fn payoff_overflow(index: usize) -> Error {
    Error::precondition(format!("payoff overflow: total exceeds i64 at job {index}"))
}

/// Computes the maximum total payoff and the jobs realizing it.
///
/// Ties are broken with [`TieBreak::PreferSkip`].
///
/// # Errors
/// [`Error::PreconditionViolation`] if `compatibility` is not parallel to
/// `jobs`, or if the best total payoff overflows `i64`.
pub fn solve(jobs: &JobSet, compatibility: &CompatibilityTable) -> Result<Selection> {
    solve_with(jobs, compatibility, TieBreak::default())
}

/// Like [`solve`], with an explicit tie-break rule.
pub fn solve_with(
    jobs: &JobSet,
    compatibility: &CompatibilityTable,
    tie_break: TieBreak,
) -> Result<Selection> {
    if compatibility.len() != jobs.len() {
        return Err(Error::precondition(format!(
            "compatibility table has {} entries for {} jobs",
            compatibility.len(),
            jobs.len()
        )));
    }
    if let Some(i) = (0..compatibility.len())
        .find(|&i| compatibility.predecessor(i).is_some_and(|k| k >= i))
    {
        return Err(Error::precondition(format!(
            "job {i} has a predecessor that is not ordered before it"
        )));
    }

    let table = SolutionTable::build(jobs, compatibility, tie_break)?;
    let selected = table.reconstruct(jobs, compatibility);

    debug!(
        jobs = jobs.len(),
        selected = selected.len(),
        total_payoff = table.best(),
        "solved"
    );

    Ok(Selection::new(table.best(), selected))
}
