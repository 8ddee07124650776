//! Shared command context for CLI commands
//!
//! Extracts the setup every platform-touching command needs: loading the
//! config file, resolving which repository to query, discovering a token,
//! and building the platform service.

use pr_verdict::config::load_config;
use pr_verdict::error::{Error, Result};
use pr_verdict::platform::{PlatformService, create_platform_service, parse_repo_spec};

/// Environment variable naming the repository (as in GitHub Actions)
const REPO_ENV_VAR: &str = "GITHUB_REPOSITORY";

/// Shared context for CLI commands that interact with the platform
pub struct CommandContext {
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// Workflow filename to evaluate
    pub workflow: String,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// The repository resolves flag -> `GITHUB_REPOSITORY` env -> config
    /// file; the workflow resolves flag -> config file -> `ci.yml`. All of
    /// this fails fast, before any remote call.
    pub fn new(repo: Option<&str>, workflow: Option<&str>) -> Result<Self> {
        let config = load_config()?;

        let repo_spec = repo
            .map(ToString::to_string)
            .or_else(|| std::env::var(REPO_ENV_VAR).ok())
            .or_else(|| config.default_repo.clone())
            .ok_or_else(|| {
                Error::RepoSpec(format!(
                    "no repository specified; pass --repo, set {REPO_ENV_VAR}, \
                     or configure default_repo"
                ))
            })?;

        let platform_config = parse_repo_spec(&repo_spec)?;
        let platform = create_platform_service(&platform_config)?;

        let workflow = workflow.map_or_else(|| config.workflow().to_string(), ToString::to_string);

        Ok(Self { platform, workflow })
    }
}
