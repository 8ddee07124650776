//! Run resolution - classify the latest workflow run for a branch

use crate::types::{CiOutcome, CiStatus, RunConclusion, WorkflowRun};

/// Classification of the most recent run for a branch+workflow pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResolution {
    /// No run exists; nothing to evaluate yet (not a fetch failure)
    NoRuns(CiOutcome),
    /// A run exists but has not completed
    InProgress(CiOutcome),
    /// A run exists and completed; hand off to the job aggregator
    Completed {
        /// Run identifier, for the jobs fetch
        run_id: u64,
        /// The run's conclusion ("unknown" stands in if the API omits it)
        conclusion: RunConclusion,
    },
}

/// Resolve the latest run into a CI classification (PURE)
///
/// Only the single most recent run is ever consulted; older runs are never
/// merged or averaged. `None` means the platform reported no matching run
/// at all, which is an explicit state distinct from a fetch failure.
#[must_use]
pub fn resolve_run(
    run: Option<&WorkflowRun>,
    branch: &str,
    workflow: &str,
) -> RunResolution {
    match run {
        None => RunResolution::NoRuns(CiOutcome {
            status: CiStatus::NoRuns,
            detail: format!("no runs found for {workflow} on {branch}"),
            failed_jobs: Vec::new(),
        }),
        Some(run) if !run.is_completed() => RunResolution::InProgress(CiOutcome {
            status: CiStatus::InProgress,
            detail: format!("run {} is {}", run.id, run.status),
            failed_jobs: Vec::new(),
        }),
        Some(run) => RunResolution::Completed {
            run_id: run.id,
            conclusion: run
                .conclusion
                .clone()
                .unwrap_or_else(|| RunConclusion::Other("unknown".to_string())),
        },
    }
}
