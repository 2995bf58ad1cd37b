//! Client configuration.
//!
//! Settings come from, in increasing precedence: built-in defaults, a JSON
//! config file (`$XDG_CONFIG_HOME/ladle/config.json` unless a path is given),
//! and whatever the caller overrides afterwards (CLI flags, environment).
//!
//! ```json
//! { "endpoint": "http://localhost:8080/graphql", "timeout_secs": 30, "phase_ordering": "sequential" }
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{LadleError, Result, ResultExt},
    pipeline::PhaseOrdering,
};

/// GraphQL endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/graphql";

/// Per-call timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Upper bound for each remote call, in seconds
    pub timeout_secs: u64,
    /// How ingredient and instruction attachment are scheduled
    pub phase_ordering: PhaseOrdering,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            phase_ordering: PhaseOrdering::default(),
        }
    }
}

impl Config {
    /// Loads settings from `path`, or from the default XDG location when
    /// `path` is `None`.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| LadleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Existing config file under the XDG config directory, if any.
    fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("ladle").find_config_file("config.json")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_phase_ordering(mut self, ordering: PhaseOrdering) -> Self {
        self.phase_ordering = ordering;
        self
    }

    /// Rejects settings that cannot work at all.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(LadleError::invalid_input("endpoint").with_reason("must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(LadleError::invalid_input("timeout_secs").with_reason("must be at least 1"));
        }
        Ok(())
    }
}
