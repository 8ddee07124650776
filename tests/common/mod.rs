//! Shared test fixtures

mod mock_platform;

pub use mock_platform::MockPlatformService;

use chrono::Utc;
use pr_verdict::types::{
    Job, JobConclusion, PlatformConfig, PrComment, PullRequestDetails, RunConclusion, RunStatus,
    WorkflowRun,
};

/// Platform config pointing at a test repository
pub fn repo_config() -> PlatformConfig {
    PlatformConfig {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        host: None,
    }
}

/// A workflow run fixture
pub fn make_run(
    id: u64,
    branch: &str,
    status: RunStatus,
    conclusion: Option<RunConclusion>,
) -> WorkflowRun {
    WorkflowRun {
        id,
        branch: branch.to_string(),
        workflow_name: "CI".to_string(),
        status,
        conclusion,
        created_at: Utc::now(),
    }
}

/// A job fixture
pub fn make_job(name: &str, conclusion: JobConclusion) -> Job {
    Job {
        name: name.to_string(),
        conclusion: Some(conclusion),
    }
}

/// A comment fixture
pub fn make_comment(id: u64, body: &str) -> PrComment {
    PrComment {
        id,
        body: body.to_string(),
    }
}

/// PR details fixture
pub fn make_details(number: u64, branch: &str) -> PullRequestDetails {
    PullRequestDetails {
        number,
        title: format!("Change for {branch}"),
        head_ref: branch.to_string(),
    }
}
