//! Environment-driven configuration
//!
//! Read once at startup; nothing here changes while the server runs.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ConfigError;

/// Workspace URL used for constructed permalinks when none is configured
pub const DEFAULT_WORKSPACE_URL: &str = "https://your-workspace.slack.com";

/// Slack Web API base URL
pub const DEFAULT_API_URL: &str = "https://slack.com/api";

const TOKEN_VARS: [&str; 2] = ["SLACK_USER_TOKEN", "SLACK_BOT_TOKEN"];
const CA_BUNDLE_VARS: [&str; 2] = ["SSL_CERT_FILE", "REQUESTS_CA_BUNDLE"];

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-obtained user or bot access token
    pub token: String,
    /// Base URL of the workspace, without a trailing slash
    pub workspace_url: String,
    /// Web API base URL, without a trailing slash
    pub api_url: String,
    /// Extra PEM trust roots for TLS-intercepting proxies
    pub ca_bundle: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = first_set(&lookup, &TOKEN_VARS).ok_or(ConfigError::MissingToken)?;

        let workspace_url = first_set(&lookup, &["SLACK_WORKSPACE_URL"])
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_WORKSPACE_URL.to_string());

        let api_url = first_set(&lookup, &["SLACK_API_URL"])
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let ca_bundle = first_set(&lookup, &CA_BUNDLE_VARS).and_then(|path| {
            let path = PathBuf::from(path);
            if path.exists() {
                info!("Using custom CA bundle: {}", path.display());
                Some(path)
            } else {
                warn!("CA bundle {} not found, using default roots", path.display());
                None
            }
        });

        Ok(Self {
            token: token.trim().to_string(),
            workspace_url,
            api_url,
            ca_bundle,
        })
    }

    pub fn ca_bundle(&self) -> Option<&Path> {
        self.ca_bundle.as_deref()
    }
}

/// First non-blank value among `keys`, in order
fn first_set<F>(lookup: &F, keys: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|&k| lookup(k))
        .find(|v| !v.trim().is_empty())
}
