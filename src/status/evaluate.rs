//! Verdict evaluation - the effectful orchestration
//!
//! Fetches the data the pure stages need (PR details, latest run, jobs,
//! comments) via the platform service and feeds it through resolve ->
//! aggregate -> scan -> compose. Strictly sequential; the report is only
//! composed after both halves have fully resolved, so no partial view can
//! ever be rendered.

use super::{RunResolution, aggregate_jobs, compose, resolve_run, scan_review};
use crate::error::Result;
use crate::platform::PlatformService;
use crate::types::{AggregateStatus, PullRequestDetails};

/// A PR's evaluated merge readiness, plus the metadata used to compute it
#[derive(Debug, Clone)]
pub struct PrEvaluation {
    /// PR metadata (title, head branch)
    pub details: PullRequestDetails,
    /// The composed verdict
    pub status: AggregateStatus,
}

/// Evaluate a PR's merge readiness (EFFECTFUL)
///
/// One call processes exactly one PR against a point-in-time snapshot of
/// remote state: the most recent run for the PR's head branch and the
/// given workflow, that run's jobs if it completed, and the full comment
/// history. Fetch failures propagate as errors; absence of data does not.
pub async fn evaluate_pr(
    platform: &dyn PlatformService,
    pr_number: u64,
    workflow: &str,
) -> Result<PrEvaluation> {
    let details = platform.get_pr_details(pr_number).await?;

    let run = platform
        .latest_workflow_run(&details.head_ref, workflow)
        .await?;

    let ci = match resolve_run(run.as_ref(), &details.head_ref, workflow) {
        RunResolution::NoRuns(outcome) | RunResolution::InProgress(outcome) => outcome,
        RunResolution::Completed { run_id, conclusion } => {
            let jobs = platform.list_run_jobs(run_id).await?;
            aggregate_jobs(&conclusion, &jobs)
        }
    };

    let comments = platform.list_pr_comments(pr_number).await?;
    let review = scan_review(&comments);

    Ok(PrEvaluation {
        details,
        status: compose(ci, review),
    })
}
