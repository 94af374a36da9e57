//! Property-based checks of the dynamic-programming selector against the
//! brute-force oracle and an exhaustive subset search.

use payoff_sched::generator::JobGenerator;
use payoff_sched::models::{Job, JobSet};
use payoff_sched::scheduler::{
    brute_force_payoff, compute_compatibility, solve, solve_with, SolveMode, Solver,
    SolverConfig, TieBreak,
};
use proptest::prelude::*;

fn job_strategy() -> impl Strategy<Value = Job> {
    (0i64..20, 0i64..8, -5i64..30).prop_map(|(start, len, payoff)| Job::new(start, start + len, payoff))
}

fn jobs_strategy(max: usize) -> impl Strategy<Value = Vec<Job>> {
    prop::collection::vec(job_strategy(), 0..=max)
}

/// Best payoff over every subset of pairwise-compatible jobs.
fn exhaustive_payoff(jobs: &[Job]) -> i64 {
    let n = jobs.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let chosen: Vec<&Job> = (0..n).filter(|i| mask & (1 << i) != 0).map(|i| &jobs[i]).collect();
        let compatible = chosen
            .iter()
            .enumerate()
            .all(|(a, x)| chosen[a + 1..].iter().all(|y| x.is_compatible_with(y)));
        if compatible {
            best = best.max(chosen.iter().map(|j| j.payoff).sum());
        }
    }
    best
}

proptest! {
    #[test]
    fn prop_matches_brute_force(jobs in jobs_strategy(12)) {
        let set = JobSet::new(jobs);
        let compat = compute_compatibility(&set);
        let selection = solve(&set, &compat).unwrap();
        prop_assert_eq!(selection.total_payoff, brute_force_payoff(&set).unwrap());
    }

    #[test]
    fn prop_matches_exhaustive_search(jobs in jobs_strategy(10)) {
        let expected = exhaustive_payoff(&jobs);
        let selection = Solver::default().solve(jobs).unwrap();
        prop_assert_eq!(selection.total_payoff, expected);
    }

    #[test]
    fn prop_selection_is_valid(jobs in jobs_strategy(40)) {
        let selection = Solver::default().solve(jobs).unwrap();
        prop_assert!(selection.is_chronological());
        prop_assert!(selection.is_non_overlapping());
        prop_assert_eq!(selection.payoff_sum(), selection.total_payoff);
        prop_assert!(selection.total_payoff >= 0);
    }

    #[test]
    fn prop_selected_jobs_come_from_input(jobs in jobs_strategy(40)) {
        let selection = Solver::default().solve(jobs.clone()).unwrap();
        let mut pool = jobs;
        for job in &selection.jobs {
            let pos = pool.iter().position(|j| j == job);
            prop_assert!(pos.is_some());
            pool.swap_remove(pos.unwrap());
        }
    }

    #[test]
    fn prop_tie_breaks_agree_on_payoff(jobs in jobs_strategy(30)) {
        let set = JobSet::new(jobs);
        let compat = compute_compatibility(&set);
        let skip = solve_with(&set, &compat, TieBreak::PreferSkip).unwrap();
        let take = solve_with(&set, &compat, TieBreak::PreferTake).unwrap();
        prop_assert_eq!(skip.total_payoff, take.total_payoff);
        prop_assert!(skip.is_consistent());
        prop_assert!(take.is_consistent());
    }

    #[test]
    fn prop_prefer_skip_excludes_non_positive(jobs in jobs_strategy(30)) {
        let selection = Solver::default().solve(jobs).unwrap();
        prop_assert!(selection.jobs.iter().all(|j| j.payoff > 0));
    }

    #[test]
    fn prop_deterministic(jobs in jobs_strategy(30)) {
        let set = JobSet::new(jobs);
        let compat = compute_compatibility(&set);
        prop_assert_eq!(solve(&set, &compat).unwrap(), solve(&set, &compat).unwrap());
    }

    #[test]
    fn prop_input_order_irrelevant(jobs in jobs_strategy(20)) {
        let mut reversed = jobs.clone();
        reversed.reverse();
        let a = Solver::default().solve(jobs).unwrap();
        let b = Solver::default().solve(reversed).unwrap();
        prop_assert_eq!(a.total_payoff, b.total_payoff);
    }
}

#[test]
fn brute_force_mode_agrees_on_generated_instances() {
    let dynamic = Solver::default();
    let brute = Solver::new(SolverConfig::new().with_mode(SolveMode::BruteForce));

    for seed in 0..20 {
        let jobs = JobGenerator::new(14)
            .with_horizon(30)
            .with_max_duration(8)
            .with_payoff_range(-10, 50)
            .with_seed(seed)
            .generate();
        let a = dynamic.solve(jobs.clone()).unwrap();
        let b = brute.solve(jobs).unwrap();
        assert_eq!(a.total_payoff, b.total_payoff, "seed {seed}");
    }
}

#[test]
fn large_instance_is_consistent() {
    let jobs = JobGenerator::new(5_000).with_horizon(10_000).with_seed(3).generate();
    let selection = Solver::default().solve(jobs).unwrap();
    assert!(selection.is_consistent());
    assert!(selection.total_payoff > 0);
}
