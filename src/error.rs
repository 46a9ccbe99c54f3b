//! Error types
//!
//! Tool failures come in two kinds. A Slack error keeps only the error code
//! the API reported; everything else (bad arguments, transport failures,
//! unexpected payloads) is carried as a message.

use thiserror::Error;

/// Failure of a single tool call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The Web API answered with `ok: false`
    #[error("Slack API error: {0}")]
    SlackApi(String),

    #[error("Error: {0}")]
    Other(String),
}

impl ToolError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Startup configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SLACK_USER_TOKEN or SLACK_BOT_TOKEN environment variable is required")]
    MissingToken,

    #[error("Failed to read CA bundle {path}: {source}")]
    CaBundle {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CA bundle {path}: {message}")]
    InvalidCertificate { path: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
