//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    Job, JobConclusion, PlatformConfig, PrComment, PullRequestDetails, RunConclusion, RunStatus,
    WorkflowRun,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

// Wire types for the Actions endpoints. octocrab's workflow coverage is
// thin, so runs and jobs go through raw HTTP with local Deserialize
// structs, the same split used for PR data vs. CI data elsewhere.

#[derive(Deserialize)]
struct RunsResponse {
    workflow_runs: Vec<ApiRun>,
}

#[derive(Deserialize)]
struct ApiRun {
    id: u64,
    name: Option<String>,
    head_branch: Option<String>,
    status: RunStatus,
    conclusion: Option<RunConclusion>,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct JobsResponse {
    jobs: Vec<ApiJob>,
}

#[derive(Deserialize)]
struct ApiJob {
    name: String,
    conclusion: Option<JobConclusion>,
}

/// GitHub service using octocrab for PR data and raw HTTP for Actions
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
    /// Token for raw HTTP requests (Actions endpoints)
    token: String,
    /// HTTP client for raw requests (Actions endpoints)
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("pr-verdict")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: PlatformConfig { owner, repo, host },
            token: token.to_string(),
            http_client,
            api_host,
        })
    }

    /// Issue an authenticated GET against the raw REST API
    ///
    /// Non-success responses are transport failures, never "nothing found";
    /// conflating the two would silently degrade a dead API into NO_RUNS.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch {what}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {what}: HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse {what}: {e}")))
    }

    /// URL for the latest run of a workflow on a branch
    ///
    /// Branch names may legally contain `&`, `#`, or `/`; both path and
    /// query values are percent-encoded so such refs query the API
    /// verbatim instead of silently altering the request.
    fn runs_url(&self, branch: &str, workflow: &str) -> String {
        format!(
            "https://{}/repos/{}/{}/actions/workflows/{}/runs?branch={}&per_page=1",
            self.api_host,
            self.config.owner,
            self.config.repo,
            urlencoding::encode(workflow),
            urlencoding::encode(branch)
        )
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn latest_workflow_run(
        &self,
        branch: &str,
        workflow: &str,
    ) -> Result<Option<WorkflowRun>> {
        debug!(branch, workflow, "fetching latest workflow run");

        let url = self.runs_url(branch, workflow);
        let runs: RunsResponse = self.get_json(&url, "workflow runs").await?;

        let result = runs.workflow_runs.into_iter().next().map(|run| WorkflowRun {
            id: run.id,
            branch: run.head_branch.unwrap_or_else(|| branch.to_string()),
            workflow_name: run.name.unwrap_or_else(|| workflow.to_string()),
            status: run.status,
            conclusion: run.conclusion,
            created_at: run.created_at,
        });

        if let Some(ref run) = result {
            debug!(run_id = run.id, status = %run.status, "found workflow run");
        } else {
            debug!("no workflow runs found");
        }
        Ok(result)
    }

    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        debug!(run_id, "listing run jobs");

        let url = format!(
            "https://{}/repos/{}/{}/actions/runs/{run_id}/jobs?per_page=100",
            self.api_host, self.config.owner, self.config.repo
        );

        let jobs: JobsResponse = self.get_json(&url, "run jobs").await?;

        let result: Vec<Job> = jobs
            .jobs
            .into_iter()
            .map(|j| Job {
                name: j.name,
                conclusion: j.conclusion,
            })
            .collect();
        debug!(run_id, count = result.len(), "listed run jobs");
        Ok(result)
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        debug!(pr_number, "getting PR details");

        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await?;

        let details = PullRequestDetails {
            number: pr.number,
            title: pr.title.clone().unwrap_or_default(),
            head_ref: pr.head.ref_field.clone(),
        };

        debug!(pr_number, head_ref = %details.head_ref, "got PR details");
        Ok(details)
    }

    /// Fetch the full comment history, not just the first page
    ///
    /// The verdict scanner keys off the newest comment, which lives on the
    /// last page; a first-page-only fetch would evaluate an outdated
    /// verdict on any PR with more comments than one page holds.
    async fn list_pr_comments(&self, pr_number: u64) -> Result<Vec<PrComment>> {
        debug!(pr_number, "listing PR comments");
        let page = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .list_comments(pr_number)
            .per_page(100)
            .send()
            .await?;

        let comments = self.client.all_pages(page).await?;

        let result: Vec<PrComment> = comments
            .into_iter()
            .map(|c| PrComment {
                id: c.id.0,
                body: c.body.unwrap_or_default(),
            })
            .collect();
        debug!(pr_number, count = result.len(), "listed PR comments");
        Ok(result)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
