//! Platform services for GitHub
//!
//! Provides the remote-data interface the verdict logic consumes. The core
//! never talks to the network itself; it accepts typed data fetched
//! through this trait.

mod github;

pub use github::GitHubService;

use crate::auth::get_github_auth;
use crate::error::{Error, Result};
use crate::types::{Job, PlatformConfig, PrComment, PullRequestDetails, WorkflowRun};
use async_trait::async_trait;

/// Platform service trait for the remote reads a verdict needs
///
/// This trait abstracts the collaboration platform so the same resolution
/// logic can run against the live API or a test double. Every operation is
/// a read; implementations must surface transport failures as errors, never
/// as empty results.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Most recent workflow run for a branch+workflow pair, if any
    ///
    /// Returns `None` when the platform reports no matching run. That is
    /// an explicit "nothing to evaluate yet" state; an unreachable API is
    /// an error instead.
    async fn latest_workflow_run(
        &self,
        branch: &str,
        workflow: &str,
    ) -> Result<Option<WorkflowRun>>;

    /// Job list for a run, each with name and conclusion
    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<Job>>;

    /// PR metadata: title and head branch
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails>;

    /// Full ordered (oldest-first) comment history for a PR
    async fn list_pr_comments(&self, pr_number: u64) -> Result<Vec<PrComment>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}

/// Parse an `owner/repo` spec into a platform configuration
pub fn parse_repo_spec(spec: &str) -> Result<PlatformConfig> {
    let mut parts = spec.splitn(2, '/');
    let owner = parts.next().unwrap_or_default();
    let repo = parts.next().unwrap_or_default();

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::RepoSpec(format!(
            "expected OWNER/REPO, got '{spec}'"
        )));
    }

    Ok(PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: None,
    })
}

/// Create a platform service for the given configuration
///
/// Resolves authentication (env var, then the gh CLI) and builds the
/// GitHub service.
pub fn create_platform_service(config: &PlatformConfig) -> Result<Box<dyn PlatformService>> {
    let auth = get_github_auth()?;
    let service = GitHubService::new(
        &auth.token,
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?;
    Ok(Box::new(service))
}
