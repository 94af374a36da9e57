//! Weighted job scheduling algorithms.
//!
//! # Algorithm
//!
//! 1. Sort jobs by finish time ([`JobSet`](crate::models::JobSet)).
//! 2. For each job, binary-search its latest compatible predecessor
//!    ([`CompatibilityTable`]).
//! 3. Fill the prefix-optimal payoff table left to right and walk it back
//!    to recover the chosen jobs ([`SolutionTable`]).
//!
//! [`Solver`] wraps the pipeline behind a [`SolverConfig`]; the
//! brute-force oracle is available for cross-checking small inputs.
//!
//! # KPI
//!
//! [`SelectionKpi`] reports counts, payoff share and utilization.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16.4

mod brute_force;
mod compatibility;
mod kpi;
mod optimal;
mod solver;

/// Exhaustive oracle; prefer [`SolveMode::BruteForce`] through [`Solver`].
pub use brute_force::brute_force_payoff;
pub use compatibility::{find_last_compatible, last_compatible_jobs, CompatibilityTable, Predecessor};
pub use kpi::SelectionKpi;
pub use optimal::{solve, solve_with, SolutionTable, TieBreak};
pub use solver::{SolveMode, Solver, SolverConfig};

use crate::models::JobSet;

/// Computes the compatibility table for a finish-ordered job set.
///
/// Alias of [`last_compatible_jobs`].
pub fn compute_compatibility(jobs: &JobSet) -> CompatibilityTable {
    last_compatible_jobs(jobs)
}
