//! slack-reader: Read-only Slack MCP server
//!
//! A Rust MCP server that lets AI assistants read the Slack conversations
//! you are part of. Every tool is a single read against the Slack Web API,
//! rendered as markdown.
//!
//! ## MCP Tools
//!
//! - `read_channel_messages` - Recent messages in a channel
//! - `read_thread_messages` - A thread's parent and replies
//! - `get_channel_info` - Channel metadata
//! - `get_user_info` - User profile
//! - `list_my_channels` - Channels you are a member of
//! - `search_my_conversations` - Messages that mention you
//! - `get_message_permalink` - Permanent link to a message

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod slack;
pub mod types;

use std::sync::Arc;

pub use config::Config;
pub use error::{ConfigError, ToolError};
pub use mcp::{Dispatcher, SlackHandler, ToolCall, ToolResult};
pub use slack::{SlackApi, SlackClient};

/// Build the MCP handler from validated configuration
pub fn build_handler(config: &Config) -> Result<SlackHandler, ConfigError> {
    let client = SlackClient::new(config)?;
    Ok(SlackHandler::new(
        Arc::new(client),
        config.workspace_url.clone(),
    ))
}
