//! Error types for payoff-sched.

use thiserror::Error;

/// Result type for payoff-sched operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the scheduling core and its loaders.
///
/// The algorithms themselves are total over their input domain; the only
/// failures are caller mistakes (broken preconditions) and I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Input did not satisfy a documented precondition
    /// (e.g. jobs not sorted by finish time).
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Error::PreconditionViolation(message.into())
    }
}
