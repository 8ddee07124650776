//! Core types for pr-verdict

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a workflow run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    /// Run is queued, waiting for a runner
    Queued,
    /// Run is currently executing
    InProgress,
    /// Run finished (see the run's conclusion for the outcome)
    Completed,
    /// Any other status string the API may return (e.g. "waiting")
    Other(String),
}

impl From<String> for RunStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Other(s),
        }
    }
}

impl From<RunStatus> for String {
    fn from(status: RunStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Outcome of a completed workflow run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunConclusion {
    /// All jobs passed
    Success,
    /// At least one job failed
    Failure,
    /// Any other conclusion string (cancelled, timed_out, ...)
    Other(String),
}

impl From<String> for RunConclusion {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            _ => Self::Other(s),
        }
    }
}

impl From<RunConclusion> for String {
    fn from(conclusion: RunConclusion) -> Self {
        conclusion.to_string()
    }
}

impl std::fmt::Display for RunConclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// A single CI workflow run
///
/// Immutable snapshot fetched once per invocation. Exactly one run is "the"
/// run for a branch+workflow pair at query time: the most recently created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Run identifier
    pub id: u64,
    /// Branch the run executed against
    pub branch: String,
    /// Workflow name (e.g. "CI")
    pub workflow_name: String,
    /// Current lifecycle status
    pub status: RunStatus,
    /// Outcome; absent while the run is incomplete
    pub conclusion: Option<RunConclusion>,
    /// When the run was created
    pub created_at: DateTime<Utc>,
}

impl WorkflowRun {
    /// Whether the run has finished executing
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Outcome of a single job within a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobConclusion {
    /// Job passed
    Success,
    /// Job failed
    Failure,
    /// Job was skipped
    Skipped,
    /// Any other conclusion string
    Other(String),
}

impl From<String> for JobConclusion {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "skipped" => Self::Skipped,
            _ => Self::Other(s),
        }
    }
}

impl From<JobConclusion> for String {
    fn from(conclusion: JobConclusion) -> Self {
        match conclusion {
            JobConclusion::Success => "success".to_string(),
            JobConclusion::Failure => "failure".to_string(),
            JobConclusion::Skipped => "skipped".to_string(),
            JobConclusion::Other(s) => s,
        }
    }
}

/// One unit of work within a workflow run
///
/// Jobs belong to exactly one run; ownership is by containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job name (e.g. "build", "lint")
    pub name: String,
    /// Job outcome; absent while the job is incomplete
    pub conclusion: Option<JobConclusion>,
}

/// A comment on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrComment {
    /// Comment ID
    pub id: u64,
    /// Comment body text
    pub body: String,
}

/// PR metadata needed to compute a verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Head (source) branch name
    pub head_ref: String,
}

/// CI half of the aggregate status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiStatus {
    /// No run exists for the branch+workflow pair
    NoRuns,
    /// The latest run has not completed yet
    InProgress,
    /// The latest run completed with conclusion `success`
    Pass,
    /// The latest run completed with any other conclusion
    Fail,
}

impl std::fmt::Display for CiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuns => write!(f, "NO RUNS"),
            Self::InProgress => write!(f, "IN PROGRESS"),
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Resolved CI outcome: status plus human-readable detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiOutcome {
    /// Classified status
    pub status: CiStatus,
    /// Human-readable detail (e.g. "4/4 jobs green")
    pub detail: String,
    /// Names of failing jobs (empty unless status is `Fail`)
    pub failed_jobs: Vec<String>,
}

impl CiOutcome {
    /// Whether the CI half allows the PR to merge
    #[must_use]
    pub const fn is_green(&self) -> bool {
        matches!(self.status, CiStatus::Pass)
    }
}

/// Review verdict derived from the PR's comment history
///
/// Recomputed from the comment sequence every call; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewVerdict {
    /// Reviewer approved
    Lgtm,
    /// Reviewer requested changes
    ChangesRequested {
        /// Itemized issues, if the comment carried a recognizable section
        issues: Option<String>,
    },
    /// Reviewer left non-blocking comments
    Comments,
    /// No comment in the history carried a verdict marker
    NoReview,
}

impl ReviewVerdict {
    /// Whether this verdict allows the PR to merge
    ///
    /// `Comments` is non-blocking: the reviewer had remarks but did not
    /// withhold approval.
    #[must_use]
    pub const fn is_approving(&self) -> bool {
        matches!(self, Self::Lgtm | Self::Comments)
    }

    /// Extracted issue text, present only for `ChangesRequested`
    #[must_use]
    pub fn issues(&self) -> Option<&str> {
        match self {
            Self::ChangesRequested { issues } => issues.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReviewVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lgtm => write!(f, "LGTM"),
            Self::ChangesRequested { .. } => write!(f, "CHANGES REQUESTED"),
            Self::Comments => write!(f, "COMMENTS"),
            Self::NoReview => write!(f, "NO REVIEW"),
        }
    }
}

/// Final merge-readiness decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overall {
    /// CI passed and review is approving
    Ready,
    /// Anything else
    NotReady,
}

impl std::fmt::Display for Overall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "READY TO MERGE"),
            Self::NotReady => write!(f, "NOT READY TO MERGE"),
        }
    }
}

/// The composed CI + review result for one PR at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateStatus {
    /// CI half
    pub ci: CiOutcome,
    /// Review half
    pub review: ReviewVerdict,
    /// Final decision
    pub overall: Overall,
}

/// Platform configuration (which repository to talk to)
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom API host (None for github.com)
    pub host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_status_wire_mapping() {
        assert_eq!(
            serde_json::from_str::<RunStatus>("\"queued\"").unwrap(),
            RunStatus::Queued
        );
        assert_eq!(
            serde_json::from_str::<RunStatus>("\"in_progress\"").unwrap(),
            RunStatus::InProgress
        );
        assert_eq!(
            serde_json::from_str::<RunStatus>("\"completed\"").unwrap(),
            RunStatus::Completed
        );
        // Unknown strings are preserved, never a deserialization error
        assert_eq!(
            serde_json::from_str::<RunStatus>("\"waiting\"").unwrap(),
            RunStatus::Other("waiting".to_string())
        );
    }

    #[test]
    fn test_conclusion_wire_mapping() {
        assert_eq!(
            serde_json::from_str::<RunConclusion>("\"success\"").unwrap(),
            RunConclusion::Success
        );
        assert_eq!(
            serde_json::from_str::<RunConclusion>("\"cancelled\"").unwrap(),
            RunConclusion::Other("cancelled".to_string())
        );
        assert_eq!(
            serde_json::from_str::<JobConclusion>("\"skipped\"").unwrap(),
            JobConclusion::Skipped
        );
    }

    #[test]
    fn test_job_with_null_conclusion() {
        let job: Job = serde_json::from_str(r#"{"name": "build", "conclusion": null}"#).unwrap();
        assert_eq!(job.name, "build");
        assert!(job.conclusion.is_none());
    }
}
