//! Selection quality metrics (KPIs).
//!
//! Summarizes a selection against the job set it was drawn from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Selected / Rejected | Job counts in and out of the selection |
//! | Payoff Share | Selected payoff / sum of positive payoffs offered |
//! | Busy Time | Sum of selected durations |
//! | Span | Earliest start to latest finish over all jobs |
//! | Utilization | Busy time / span |

use serde::{Deserialize, Serialize};

use crate::models::{JobSet, Selection};

/// Selection performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionKpi {
    /// Number of selected jobs.
    pub selected: usize,
    /// Number of jobs left out.
    pub rejected: usize,
    /// Total payoff of the selection.
    pub total_payoff: i64,
    /// Fraction of the available positive payoff captured (0.0..1.0).
    pub payoff_share: f64,
    /// Time covered by selected jobs.
    pub busy_time: i64,
    /// Earliest start to latest finish across all offered jobs.
    pub span: i64,
    /// Busy time over span (0.0..1.0).
    pub utilization: f64,
}

impl SelectionKpi {
    /// Computes KPIs for a selection drawn from `jobs`.
    pub fn calculate(selection: &Selection, jobs: &JobSet) -> Self {
        let selected = selection.job_count();
        let rejected = jobs.len().saturating_sub(selected);

        let available = jobs
            .iter()
            .map(|j| j.payoff.max(0))
            .fold(0i64, i64::saturating_add);
        let payoff_share = if available == 0 {
            1.0
        } else {
            selection.total_payoff as f64 / available as f64
        };

        let busy_time = selection.busy_time();
        let span = match (jobs.earliest_start(), jobs.latest_finish()) {
            (Some(start), Some(finish)) => finish.saturating_sub(start).max(0),
            _ => 0,
        };
        let utilization = if span == 0 {
            0.0
        } else {
            busy_time as f64 / span as f64
        };

        Self {
            selected,
            rejected,
            total_payoff: selection.total_payoff,
            payoff_share,
            busy_time,
            span,
            utilization,
        }
    }
}
