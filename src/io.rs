//! Plain-text job loading and result rendering.
//!
//! # Input Format
//! One job per line as three whitespace-separated integers:
//! `start finish payoff`. Lines that do not parse to exactly three integers
//! are skipped.
//!
//! # Output Format
//! ```text
//! Maximum Payoff: 17
//! 2 5 6
//! 5 8 11
//! ```

use std::fmt::Write as _;
use std::io::BufRead;

use tracing::debug;

use crate::error::Result;
use crate::models::{Job, Selection};
use crate::scheduler::SelectionKpi;

/// Parses one input line. `None` if it is not exactly three integers.
pub fn parse_job_line(line: &str) -> Option<Job> {
    let mut fields = line.split_whitespace().map(str::parse::<i64>);
    let start = fields.next()?.ok()?;
    let finish = fields.next()?.ok()?;
    let payoff = fields.next()?.ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Job::new(start, finish, payoff))
}

/// Reads jobs from a line-oriented reader, in input order.
///
/// Malformed lines are skipped; I/O errors are returned.
pub fn load_jobs<R: BufRead>(reader: R) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_job_line(&line) {
            Some(job) => jobs.push(job),
            None => {
                skipped += 1;
                debug!(line = line_no + 1, "skipping malformed job line");
            }
        }
    }

    debug!(loaded = jobs.len(), skipped, "loaded jobs");
    Ok(jobs)
}

/// Renders a selection in the plain-text output format.
pub fn render_text(selection: &Selection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Maximum Payoff: {}", selection.total_payoff);
    for job in &selection.jobs {
        let _ = writeln!(out, "{job}");
    }
    out
}

/// Renders selection statistics as plain text.
pub fn render_kpi_text(kpi: &SelectionKpi) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Selected: {} (rejected {})", kpi.selected, kpi.rejected);
    let _ = writeln!(out, "Payoff Share: {:.1}%", kpi.payoff_share * 100.0);
    let _ = writeln!(out, "Busy Time: {} of {}", kpi.busy_time, kpi.span);
    let _ = writeln!(out, "Utilization: {:.1}%", kpi.utilization * 100.0);
    out
}

/// Renders a selection (and optional statistics) as pretty JSON.
pub fn render_json(selection: &Selection, kpi: Option<&SelectionKpi>) -> serde_json::Result<String> {
    let value = match kpi {
        Some(kpi) => serde_json::json!({ "selection": selection, "stats": kpi }),
        None => serde_json::to_value(selection)?,
    };
    serde_json::to_string_pretty(&value)
}

/// Renders jobs in the plain-text input format.
pub fn render_jobs(jobs: &[Job]) -> String {
    let mut out = String::new();
    for job in jobs {
        let _ = writeln!(out, "{job}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_valid_line() {
        assert_eq!(parse_job_line("1 3 5"), Some(Job::new(1, 3, 5)));
        assert_eq!(parse_job_line("  -2\t4   7 "), Some(Job::new(-2, 4, 7)));
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(parse_job_line(""), None);
        assert_eq!(parse_job_line("1 2"), None);
        assert_eq!(parse_job_line("1 2 3 4"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_job_line("1 two 3"), None);
        assert_eq!(parse_job_line("1 2 3.5"), None);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let input = "1 2 50\n# comment\n\n3 4 10\n0 6\n0 6 100\n";
        let jobs = load_jobs(Cursor::new(input)).unwrap();
        assert_eq!(
            jobs,
            vec![Job::new(1, 2, 50), Job::new(3, 4, 10), Job::new(0, 6, 100)]
        );
    }

    #[test]
    fn test_render_text() {
        let s = Selection::new(17, vec![Job::new(2, 5, 6), Job::new(5, 8, 11)]);
        assert_eq!(render_text(&s), "Maximum Payoff: 17\n2 5 6\n5 8 11\n");
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&Selection::empty()), "Maximum Payoff: 0\n");
    }

    #[test]
    fn test_render_json_round_trips() {
        let s = Selection::new(100, vec![Job::new(0, 6, 100)]);
        let json = render_json(&s, None).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_render_jobs_reloads() {
        let jobs = vec![Job::new(1, 3, 5), Job::new(2, 5, 6)];
        let text = render_jobs(&jobs);
        assert_eq!(load_jobs(Cursor::new(text)).unwrap(), jobs);
    }
}
