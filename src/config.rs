//! User configuration loaded from `~/.config/prv/config.toml`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workflow file consulted when neither flag nor config names one
pub const DEFAULT_WORKFLOW: &str = "ci.yml";

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "prv";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// User configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default repository spec (OWNER/REPO) when no flag or env is given
    #[serde(default)]
    pub default_repo: Option<String>,
    /// Default workflow filename (falls back to `ci.yml`)
    #[serde(default)]
    pub default_workflow: Option<String>,
}

impl Config {
    /// The workflow to use when the CLI did not name one
    #[must_use]
    pub fn workflow(&self) -> &str {
        self.default_workflow.as_deref().unwrap_or(DEFAULT_WORKFLOW)
    }
}

/// Path to the config file, if a config directory exists on this platform
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from disk
///
/// Returns the default (empty) config if the file doesn't exist. A file
/// that exists but cannot be read or parsed is an error - silently
/// ignoring a broken config would mask the user's intent.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from a specific path (split out for tests)
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}
