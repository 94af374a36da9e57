//! Weighted job scheduling.
//!
//! Given jobs with a start time, finish time and payoff, selects a subset
//! of mutually non-overlapping jobs with maximum total payoff.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `JobSet`, `Selection`
//! - **`scheduler`**: Compatibility index, DP selector, brute-force oracle,
//!   configurable `Solver`, `SelectionKpi`
//! - **`validation`**: Input integrity checks (ordering, inverted windows)
//! - **`io`**: Plain-text loader and text/JSON renderers
//! - **`generator`**: Seeded random instances
//!
//! # Example
//!
//! ```
//! use payoff_sched::models::{Job, JobSet};
//! use payoff_sched::scheduler::{compute_compatibility, solve};
//!
//! let jobs = JobSet::new(vec![
//!     Job::new(1, 3, 5),
//!     Job::new(2, 5, 6),
//!     Job::new(4, 6, 5),
//!     Job::new(6, 7, 4),
//!     Job::new(5, 8, 11),
//!     Job::new(7, 9, 2),
//! ]);
//! let compatibility = compute_compatibility(&jobs);
//! let selection = solve(&jobs, &compatibility).unwrap();
//! assert_eq!(selection.total_payoff, 17);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16.4

pub mod error;
pub mod generator;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
