//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_verdict::error::{Error, Result};
use pr_verdict::platform::PlatformService;
use pr_verdict::types::{Job, PlatformConfig, PrComment, PullRequestDetails, WorkflowRun};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `latest_workflow_run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunQueryCall {
    pub branch: String,
    pub workflow: String,
}

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// because mockall has issues with methods returning references.
///
/// Features:
/// - Configurable responses per branch/run/PR
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    run_responses: Mutex<HashMap<(String, String), WorkflowRun>>,
    jobs_responses: Mutex<HashMap<u64, Vec<Job>>>,
    details_responses: Mutex<HashMap<u64, PullRequestDetails>>,
    comments_responses: Mutex<HashMap<u64, Vec<PrComment>>>,
    // Call tracking
    run_query_calls: Mutex<Vec<RunQueryCall>>,
    jobs_calls: Mutex<Vec<u64>>,
    details_calls: Mutex<Vec<u64>>,
    comments_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_runs: Mutex<Option<String>>,
    error_on_jobs: Mutex<Option<String>>,
    error_on_details: Mutex<Option<String>>,
    error_on_comments: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            run_responses: Mutex::new(HashMap::new()),
            jobs_responses: Mutex::new(HashMap::new()),
            details_responses: Mutex::new(HashMap::new()),
            comments_responses: Mutex::new(HashMap::new()),
            run_query_calls: Mutex::new(Vec::new()),
            jobs_calls: Mutex::new(Vec::new()),
            details_calls: Mutex::new(Vec::new()),
            comments_calls: Mutex::new(Vec::new()),
            error_on_runs: Mutex::new(None),
            error_on_jobs: Mutex::new(None),
            error_on_details: Mutex::new(None),
            error_on_comments: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Set the latest run for a branch+workflow pair
    pub fn set_run_response(&self, branch: &str, workflow: &str, run: WorkflowRun) {
        self.run_responses
            .lock()
            .unwrap()
            .insert((branch.to_string(), workflow.to_string()), run);
    }

    /// Set the job list for a run
    pub fn set_jobs_response(&self, run_id: u64, jobs: Vec<Job>) {
        self.jobs_responses.lock().unwrap().insert(run_id, jobs);
    }

    /// Set the details for a PR
    pub fn set_details_response(&self, pr_number: u64, details: PullRequestDetails) {
        self.details_responses
            .lock()
            .unwrap()
            .insert(pr_number, details);
    }

    /// Set the comment history for a PR
    pub fn set_comments_response(&self, pr_number: u64, comments: Vec<PrComment>) {
        self.comments_responses
            .lock()
            .unwrap()
            .insert(pr_number, comments);
    }

    // === Error injection ===

    /// Make `latest_workflow_run` return an error
    pub fn fail_runs(&self, msg: &str) {
        *self.error_on_runs.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_run_jobs` return an error
    pub fn fail_jobs(&self, msg: &str) {
        *self.error_on_jobs.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_pr_details` return an error
    pub fn fail_details(&self, msg: &str) {
        *self.error_on_details.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_pr_comments` return an error
    pub fn fail_comments(&self, msg: &str) {
        *self.error_on_comments.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    /// Get all branch+workflow pairs `latest_workflow_run` was queried with
    pub fn get_run_query_calls(&self) -> Vec<RunQueryCall> {
        self.run_query_calls.lock().unwrap().clone()
    }

    /// Get all run IDs `list_run_jobs` was called with
    pub fn get_jobs_calls(&self) -> Vec<u64> {
        self.jobs_calls.lock().unwrap().clone()
    }

    /// Get all PR numbers `get_pr_details` was called with
    pub fn get_details_calls(&self) -> Vec<u64> {
        self.details_calls.lock().unwrap().clone()
    }

    /// Get all PR numbers `list_pr_comments` was called with
    pub fn get_comments_calls(&self) -> Vec<u64> {
        self.comments_calls.lock().unwrap().clone()
    }

    /// Assert that `latest_workflow_run` was queried for a branch+workflow
    pub fn assert_run_queried(&self, branch: &str, workflow: &str) {
        let calls = self.get_run_query_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.branch == branch && c.workflow == workflow),
            "Expected latest_workflow_run({branch}, {workflow}) but got: {calls:?}"
        );
    }

    /// Assert that `list_run_jobs` was never called
    pub fn assert_jobs_not_fetched(&self) {
        let calls = self.get_jobs_calls();
        assert!(
            calls.is_empty(),
            "Expected list_run_jobs not to be called but it was: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn latest_workflow_run(
        &self,
        branch: &str,
        workflow: &str,
    ) -> Result<Option<WorkflowRun>> {
        self.run_query_calls.lock().unwrap().push(RunQueryCall {
            branch: branch.to_string(),
            workflow: workflow.to_string(),
        });

        if let Some(msg) = self.error_on_runs.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.run_responses.lock().unwrap();
        Ok(responses
            .get(&(branch.to_string(), workflow.to_string()))
            .cloned())
    }

    async fn list_run_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        self.jobs_calls.lock().unwrap().push(run_id);

        if let Some(msg) = self.error_on_jobs.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.jobs_responses.lock().unwrap();
        Ok(responses.get(&run_id).cloned().unwrap_or_default())
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        self.details_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_details.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.details_responses.lock().unwrap();
        responses.get(&pr_number).cloned().ok_or_else(|| {
            Error::Platform(format!(
                "get_pr_details: no response configured for PR #{pr_number}"
            ))
        })
    }

    async fn list_pr_comments(&self, pr_number: u64) -> Result<Vec<PrComment>> {
        self.comments_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_comments.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let responses = self.comments_responses.lock().unwrap();
        Ok(responses.get(&pr_number).cloned().unwrap_or_default())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
