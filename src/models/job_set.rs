//! Finish-ordered job collection.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::Job;
use crate::error::{Error, Result};

/// Jobs sorted ascending by finish time.
///
/// This is the only representation the scheduling core operates on. Equal
/// finish times are ordered by ascending start (stable otherwise), which
/// places zero-length jobs after the longer jobs ending at the same instant.
///
/// Immutable once built; derefs to `[Job]` for read access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Job>", into = "Vec<Job>")]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Builds a job set, sorting the jobs by finish time.
    pub fn new(mut jobs: Vec<Job>) -> Self {
        jobs.sort_by_key(|job| (job.finish, job.start));
        Self { jobs }
    }

    /// Builds a job set from jobs the caller has already sorted.
    ///
    /// Fails fast with [`Error::PreconditionViolation`] if finish times are
    /// not non-decreasing. The order is kept as given.
    pub fn from_sorted(jobs: Vec<Job>) -> Result<Self> {
        if let Some(i) = jobs.windows(2).position(|w| w[0].finish > w[1].finish) {
            return Err(Error::precondition(format!(
                "jobs must be sorted by finish time: job {} finishes at {} but job {} finishes at {}",
                i,
                jobs[i].finish,
                i + 1,
                jobs[i + 1].finish
            )));
        }
        Ok(Self { jobs })
    }

    /// An empty job set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Finish times, in order.
    pub fn finish_times(&self) -> Vec<i64> {
        self.jobs.iter().map(|j| j.finish).collect()
    }

    /// Consumes the set, returning the ordered jobs.
    pub fn into_jobs(self) -> Vec<Job> {
        self.jobs
    }

    /// Earliest start across all jobs. `None` when empty.
    pub fn earliest_start(&self) -> Option<i64> {
        self.jobs.iter().map(|j| j.start).min()
    }

    /// Latest finish across all jobs. `None` when empty.
    pub fn latest_finish(&self) -> Option<i64> {
        self.jobs.last().map(|j| j.finish)
    }
}

impl Deref for JobSet {
    type Target = [Job];

    fn deref(&self) -> &[Job] {
        &self.jobs
    }
}

impl From<Vec<Job>> for JobSet {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

impl From<JobSet> for Vec<Job> {
    fn from(set: JobSet) -> Self {
        set.jobs
    }
}

impl FromIterator<Job> for JobSet {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
