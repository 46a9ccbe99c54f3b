//! HTTP client for the Slack Web API

use std::fs;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Certificate, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::SlackApi;
use crate::config::Config;
use crate::error::{ConfigError, ToolError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Token-authenticated Web API client, shared read-only across calls
#[derive(Clone)]
pub struct SlackClient {
    http: Client,
    token: String,
    api_url: String,
}

impl SlackClient {
    /// Build a client from validated configuration
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("slack-reader/", env!("CARGO_PKG_VERSION")));

        if let Some(path) = config.ca_bundle() {
            let path_str = path.display().to_string();
            let pem = fs::read(path).map_err(|source| ConfigError::CaBundle {
                path: path_str.clone(),
                source,
            })?;
            let certs = Certificate::from_pem_bundle(&pem).map_err(|e| {
                ConfigError::InvalidCertificate {
                    path: path_str.clone(),
                    message: e.to_string(),
                }
            })?;
            debug!("Loaded {} certificates from {}", certs.len(), path_str);
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            token: config.token.clone(),
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn call(&self, method: &str, params: &[(&str, String)]) -> Result<Value, ToolError> {
        let url = format!("{}/{}", self.api_url, method);
        debug!("Calling {}", method);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Rate limits and auth failures still carry an `ok: false` envelope
            let body = response.json::<Value>().await.ok();
            return Err(http_error(method, status, body));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Error for a non-2xx response, preferring the Slack error code in the body
fn http_error(method: &str, status: StatusCode, body: Option<Value>) -> ToolError {
    let code = body.as_ref().and_then(|b| {
        let ok = b.get("ok").and_then(Value::as_bool);
        let error = b.get("error").and_then(Value::as_str);
        match (ok, error) {
            (Some(false), Some(code)) => Some(code.to_string()),
            _ => None,
        }
    });

    match code {
        Some(code) => {
            warn!("{} failed with HTTP {}: {}", method, status, code);
            ToolError::SlackApi(code)
        }
        None => ToolError::other(format!("Slack returned HTTP {} for {}", status, method)),
    }
}
