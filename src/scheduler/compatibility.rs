//! Compatible-predecessor index.
//!
//! For each job in a finish-ordered [`JobSet`], finds the latest-finishing
//! job that ends no later than the job starts.
//!
//! # Algorithm
//! Upper-bound binary search over the finish times preceding each job,
//! stepping back one position.
//!
//! # Complexity
//! O(log n) per query, O(n log n) for the whole table.

use tracing::trace;

use crate::models::JobSet;

/// Index of a compatible predecessor, or `None` if no earlier job fits.
pub type Predecessor = Option<usize>;

/// Returns the largest index `i` with `finish_times[i] <= start`.
///
/// `finish_times` must be sorted ascending; this is assumed, not checked.
/// Returns `None` when `start` is earlier than every finish time.
pub fn find_last_compatible(finish_times: &[i64], start: i64) -> Predecessor {
    finish_times
        .partition_point(|&finish| finish <= start)
        .checked_sub(1)
}

/// Per-job compatible predecessors, parallel to a [`JobSet`].
///
/// Entry `i` is always `None` or `Some(k)` with `k < i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityTable {
    entries: Vec<Predecessor>,
}

impl CompatibilityTable {
    /// Builds the table for a job set.
    ///
    /// Each job is searched only against the jobs ordered before it, so a
    /// zero-length job never names itself or a later job.
    pub fn build(jobs: &JobSet) -> Self {
        let finish_times = jobs.finish_times();
        let entries: Vec<Predecessor> = jobs
            .iter()
            .enumerate()
            .map(|(i, job)| find_last_compatible(&finish_times[..i], job.start))
            .collect();

        trace!(jobs = jobs.len(), "built compatibility table");
        Self { entries }
    }

    /// Predecessor of job `index`.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    #[inline]
    pub fn predecessor(&self, index: usize) -> Predecessor {
        self.entries[index]
    }

    /// Solution-table slot holding the best payoff available before job
    /// `index` starts: `0` for no predecessor, `k + 1` for predecessor `k`.
    #[inline]
    pub fn slot(&self, index: usize) -> usize {
        self.entries[index].map_or(0, |k| k + 1)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in job order.
    pub fn as_slice(&self) -> &[Predecessor] {
        &self.entries
    }
}

impl From<Vec<Predecessor>> for CompatibilityTable {
    fn from(entries: Vec<Predecessor>) -> Self {
        Self { entries }
    }
}

/// Computes the compatibility table for a finish-ordered job set.
pub fn last_compatible_jobs(jobs: &JobSet) -> CompatibilityTable {
    CompatibilityTable::build(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn textbook() -> JobSet {
        JobSet::new(vec![
            Job::new(1, 3, 5),
            Job::new(2, 5, 6),
            Job::new(4, 6, 5),
            Job::new(6, 7, 4),
            Job::new(5, 8, 11),
            Job::new(7, 9, 2),
        ])
    }

    #[test]
    fn test_find_before_all() {
        assert_eq!(find_last_compatible(&[3, 5, 6], 2), None);
    }

    #[test]
    fn test_find_exact_match_is_compatible() {
        assert_eq!(find_last_compatible(&[3, 5, 6], 5), Some(1));
    }

    #[test]
    fn test_find_after_all() {
        assert_eq!(find_last_compatible(&[3, 5, 6], 100), Some(2));
    }

    #[test]
    fn test_find_rightmost_among_duplicates() {
        assert_eq!(find_last_compatible(&[1, 4, 4, 4, 7], 4), Some(3));
        assert_eq!(find_last_compatible(&[1, 4, 4, 4, 7], 3), Some(0));
    }

    #[test]
    fn test_find_empty() {
        assert_eq!(find_last_compatible(&[], 10), None);
    }

    #[test]
    fn test_textbook_table() {
        let table = last_compatible_jobs(&textbook());
        assert_eq!(
            table.as_slice(),
            &[None, None, Some(0), Some(2), Some(1), Some(3)]
        );
    }

    #[test]
    fn test_slot_mapping() {
        let table = last_compatible_jobs(&textbook());
        assert_eq!(table.slot(0), 0);
        assert_eq!(table.slot(2), 1);
        assert_eq!(table.slot(5), 4);
    }

    #[test]
    fn test_first_job_predecessor_is_distinct_from_none() {
        // Predecessor at index 0 must not look like "no predecessor".
        let jobs = JobSet::new(vec![Job::new(0, 1, 1), Job::new(1, 2, 1), Job::new(0, 3, 1)]);
        let table = last_compatible_jobs(&jobs);
        assert_eq!(table.predecessor(1), Some(0));
        assert_eq!(table.predecessor(2), None);
        assert_ne!(table.slot(1), table.slot(2));
    }

    #[test]
    fn test_zero_length_jobs_point_backwards() {
        let jobs = JobSet::new(vec![Job::new(5, 5, 1), Job::new(5, 5, 2), Job::new(3, 5, 4)]);
        let table = last_compatible_jobs(&jobs);
        for i in 0..table.len() {
            if let Some(k) = table.predecessor(i) {
                assert!(k < i);
            }
        }
        // (3,5) sorts first; both zero-length jobs can follow it.
        assert_eq!(table.as_slice(), &[None, Some(0), Some(1)]);
    }

    #[test]
    fn test_empty_job_set() {
        let table = last_compatible_jobs(&JobSet::empty());
        assert!(table.is_empty());
    }
}
