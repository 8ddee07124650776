//! Job aggregation - count outcomes for a completed run

use crate::types::{CiOutcome, CiStatus, Job, JobConclusion, RunConclusion};

/// Marker prefixing each failing job in the rendered detail
const FAILED_JOB_MARKER: char = '\u{274c}'; // ❌

/// Aggregate the jobs of a completed run into a CI outcome (PURE)
///
/// The run's own conclusion decides pass/fail; job counts only feed the
/// detail string. A run with zero jobs and conclusion `success` is still a
/// pass - counts default to zero, not an error.
#[must_use]
pub fn aggregate_jobs(conclusion: &RunConclusion, jobs: &[Job]) -> CiOutcome {
    let total = jobs.len();
    let passed = jobs
        .iter()
        .filter(|j| j.conclusion == Some(JobConclusion::Success))
        .count();
    let failed_jobs: Vec<String> = jobs
        .iter()
        .filter(|j| j.conclusion == Some(JobConclusion::Failure))
        .map(|j| j.name.clone())
        .collect();

    if *conclusion == RunConclusion::Success {
        return CiOutcome {
            status: CiStatus::Pass,
            detail: format!("{passed}/{total} jobs green"),
            failed_jobs: Vec::new(),
        };
    }

    let mut detail = format!("{passed}/{total} jobs green, {} failed", failed_jobs.len());
    for name in &failed_jobs {
        detail.push_str(&format!("\n  {FAILED_JOB_MARKER} {name}"));
    }

    CiOutcome {
        status: CiStatus::Fail,
        detail,
        failed_jobs,
    }
}
