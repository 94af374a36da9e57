//! Brute-force verification oracle.
//!
//! Plain take-or-skip tree recursion without memoization. Exponential in
//! the number of jobs; exists only to cross-check the dynamic-programming
//! selector on small inputs. Computes the payoff, never the subset.
//!
//! Applications should reach it through
//! [`SolveMode::BruteForce`](super::SolveMode::BruteForce) rather than
//! calling it directly.

use super::optimal::payoff_overflow;
use super::CompatibilityTable;
use crate::error::Result;
use crate::models::JobSet;

/// Best total payoff, computed by exhaustive recursion.
///
/// # Errors
/// [`Error::PreconditionViolation`](crate::Error::PreconditionViolation)
/// if the best payoff does not fit in an `i64`.
pub fn brute_force_payoff(jobs: &JobSet) -> Result<i64> {
    let compatibility = CompatibilityTable::build(jobs);
    best_prefix(jobs, &compatibility, jobs.len())
}

/// Best payoff using only the first `prefix` jobs.
fn best_prefix(jobs: &JobSet, compatibility: &CompatibilityTable, prefix: usize) -> Result<i64> {
    if prefix == 0 {
        return Ok(0);
    }
    let index = prefix - 1;
    let take = jobs[index]
        .payoff
        .checked_add(best_prefix(jobs, compatibility, compatibility.slot(index))?)
        .ok_or_else(|| payoff_overflow(index))?;
    let skip = best_prefix(jobs, compatibility, index)?;
    Ok(take.max(skip))
}
