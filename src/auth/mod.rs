//! Authentication for GitHub
//!
//! Supports environment variables and CLI-based auth (gh).

use crate::error::{Error, Result};
use std::process::Command;
use tracing::debug;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token from the gh CLI
    Cli,
}

/// Resolved GitHub authentication
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// The personal access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Resolve a GitHub token: `GITHUB_TOKEN` / `GH_TOKEN` env vars first,
/// then `gh auth token`
pub fn get_github_auth() -> Result<GitHubAuthConfig> {
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = std::env::var(var) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                debug!(var, "using token from environment");
                return Ok(GitHubAuthConfig {
                    token,
                    source: AuthSource::EnvVar,
                });
            }
        }
    }

    if let Some(token) = gh_cli_token() {
        debug!("using token from gh CLI");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "no GitHub token found; set GITHUB_TOKEN or run 'gh auth login'".to_string(),
    ))
}

/// Ask the gh CLI for its stored token, if gh is installed and logged in
fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}
