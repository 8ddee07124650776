//! pr-verdict - merge-readiness verdicts for GitHub pull requests
//!
//! Combines two independently-evolving signals - the latest CI workflow
//! run for a PR's head branch and the most recent review-verdict marker in
//! its comment thread - into one authoritative pass/fail answer to "is
//! this PR ready to merge?".

pub mod auth;
pub mod config;
pub mod error;
pub mod platform;
pub mod status;
pub mod types;
