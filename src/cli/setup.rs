//! Startup configuration and logging

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

/// Install a stderr subscriber; `RUST_LOG` overrides the default level.
///
/// Stdout is left alone since the stdio transport owns it.
pub fn setup_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Load configuration from the environment, failing fast without a token
pub fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Invalid configuration")?;
    info!("Workspace URL: {}", config.workspace_url);
    Ok(config)
}
