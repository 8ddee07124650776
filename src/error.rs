//! Error types for pr-verdict

use thiserror::Error;

/// Result alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a verdict
///
/// Absence-of-data conditions (no matching run, no review comment) are not
/// errors; they are explicit states in [`crate::types::CiStatus`] and
/// [`crate::types::ReviewVerdict`]. This enum covers everything that should
/// abort the invocation: transport failures, bad configuration, missing
/// credentials.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication failure (no token found, or token rejected)
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Repository could not be determined or the spec was malformed
    #[error("repository error: {0}")]
    RepoSpec(String),

    /// GitHub API error from raw HTTP requests
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitHub API error from octocrab
    #[error("GitHub API error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Platform service error (used by test doubles and wrappers)
    #[error("platform error: {0}")]
    Platform(String),
}
