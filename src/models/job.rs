//! Job model.
//!
//! A job is a schedulable unit with a fixed time window and a payoff
//! earned if it is selected.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use serde::{Deserialize, Serialize};
use std::fmt;

/// A job to be scheduled: `(start, finish, payoff)`.
///
/// Jobs carry no identity beyond their values; duplicates are legal and
/// independent. `start <= finish` is assumed but not enforced.
///
/// # Time Representation
/// Times are plain integers on a shared axis. The consumer defines the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Start time.
    pub start: i64,
    /// Finish time.
    pub finish: i64,
    /// Value earned when the job is selected.
    pub payoff: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(start: i64, finish: i64, payoff: i64) -> Self {
        Self {
            start,
            finish,
            payoff,
        }
    }

    /// Length of the time window (`finish - start`), saturating at the
    /// `i64` bounds.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish.saturating_sub(self.start)
    }

    /// Whether `self` can run immediately before `next` without overlap.
    #[inline]
    pub fn precedes(&self, next: &Job) -> bool {
        self.finish <= next.start
    }

    /// Whether the two jobs can both be scheduled.
    pub fn is_compatible_with(&self, other: &Job) -> bool {
        self.precedes(other) || other.precedes(self)
    }

    /// Whether the window is well-formed (`start <= finish`).
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.finish
    }
}

impl From<(i64, i64, i64)> for Job {
    fn from((start, finish, payoff): (i64, i64, i64)) -> Self {
        Self::new(start, finish, payoff)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.finish, self.payoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_from_tuple() {
        let job: Job = (1, 3, 5).into();
        assert_eq!(job, Job::new(1, 3, 5));
        assert_eq!(job.duration(), 2);
    }

    #[test]
    fn test_touching_jobs_are_compatible() {
        let a = Job::new(1, 3, 5);
        let b = Job::new(3, 4, 1);
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
        assert!(a.is_compatible_with(&b));
        assert!(b.is_compatible_with(&a));
    }

    #[test]
    fn test_overlapping_jobs() {
        let a = Job::new(1, 4, 5);
        let b = Job::new(3, 6, 1);
        assert!(!a.is_compatible_with(&b));
    }

    #[test]
    fn test_duration_saturates() {
        assert_eq!(Job::new(i64::MIN, i64::MAX, 0).duration(), i64::MAX);
        assert_eq!(Job::new(i64::MAX, i64::MIN, 0).duration(), i64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Job::new(0, 6, 100).to_string(), "0 6 100");
    }

    #[test]
    fn test_well_formed() {
        assert!(Job::new(2, 2, 0).is_well_formed());
        assert!(!Job::new(5, 2, 0).is_well_formed());
    }
}
