//! Scheduling domain models.
//!
//! Provides the data types for weighted job scheduling problems and their
//! solutions.
//!
//! # Domain Mappings
//!
//! | payoff-sched | Ad placement | Resource rental | Batch jobs |
//! |--------------|--------------|-----------------|------------|
//! | Job | Ad slot bid | Booking request | Task run |
//! | Payoff | Bid value | Rental fee | Priority weight |
//! | Selection | Accepted bids | Accepted bookings | Executed runs |

mod job;
mod job_set;
mod selection;

pub use job::Job;
pub use job_set::JobSet;
pub use selection::Selection;
