//! Command implementations for CLI operations

use anyhow::{bail, Context, Result};
use rmcp::model::JsonObject;
use serde_json::Value;

use crate::build_handler;
use crate::mcp::tools::TOOL_DESCRIPTIONS;

use super::setup::load_config;

/// Print the tool names and descriptions
pub fn tools_command() -> Result<()> {
    println!("Available tools:\n");
    for (name, description) in TOOL_DESCRIPTIONS {
        println!("  {:<26} {}", name, description);
    }
    Ok(())
}

/// Run a single tool through the dispatcher and print the result blocks
#[tokio::main]
pub async fn call_command(name: &str, raw_args: Option<&str>) -> Result<()> {
    let arguments = parse_arguments(raw_args)?;
    let config = load_config()?;
    let handler = build_handler(&config)?;

    let result = handler.dispatcher().dispatch(name, arguments).await;
    for block in result.blocks {
        println!("{}", block);
    }

    Ok(())
}

/// Show who the configured token belongs to
#[tokio::main]
pub async fn whoami_command() -> Result<()> {
    let config = load_config()?;
    let handler = build_handler(&config)?;

    let identity = handler
        .dispatcher()
        .api()
        .auth_test()
        .await
        .context("auth.test failed")?;

    println!("User ID: {}", identity.user_id);
    if let Some(user) = identity.user {
        println!("User: {}", user);
    }
    if let Some(team) = identity.team {
        println!("Team: {}", team);
    }
    if let Some(url) = identity.url {
        println!("Workspace: {}", url);
    }

    Ok(())
}

/// Parse a JSON object of tool arguments; absent means empty
pub fn parse_arguments(raw: Option<&str>) -> Result<JsonObject> {
    let Some(raw) = raw else {
        return Ok(JsonObject::new());
    };

    match serde_json::from_str::<Value>(raw).context("Arguments must be valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("Arguments must be a JSON object, got {}", other),
    }
}
