//! Input validation for job scheduling problems.
//!
//! The scheduling core assumes its preconditions rather than checking them.
//! These checks let a caller detect bad input up front:
//! - Finish times out of order (input not sorted for the core)
//! - Inverted windows (`start > finish`)

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Index of the offending job.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job finishes before the job ordered ahead of it.
    UnsortedFinishTimes,
    /// A job starts after it finishes.
    InvertedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates jobs intended for the scheduling core.
///
/// Run it on the jobs in the order the core will see them (a built
/// [`JobSet`](crate::models::JobSet) or input meant for
/// [`JobSet::from_sorted`](crate::models::JobSet::from_sorted)); raw loader
/// output is unsorted by nature.
///
/// Checks:
/// 1. Every job has `start <= finish`
/// 2. Finish times are non-decreasing in the given order
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, job) in jobs.iter().enumerate() {
        if !job.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                i,
                format!("Job {i} starts at {} after finishing at {}", job.start, job.finish),
            ));
        }
    }

    for (i, pair) in jobs.windows(2).enumerate() {
        if pair[0].finish > pair[1].finish {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsortedFinishTimes,
                i + 1,
                format!(
                    "Job {} finishes at {} before job {} at {}",
                    i + 1,
                    pair[1].finish,
                    i,
                    pair[0].finish
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
