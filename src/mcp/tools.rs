//! Tool listing
//!
//! Input schemas are generated from the request types so the advertised
//! contract cannot drift from what the dispatcher parses.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde_json::Value;

use crate::error::ToolError;
use crate::mcp::constants::*;
use crate::mcp::types::{
    ChannelInfoRequest, ListChannelsRequest, PermalinkRequest, ReadChannelMessagesRequest,
    ReadThreadMessagesRequest, SearchRequest, UserInfoRequest,
};

const READ_CHANNEL_MESSAGES_DESC: &str =
    "Read messages from a Slack channel. Supports filtering by time range.";
const READ_THREAD_MESSAGES_DESC: &str = "Read all messages in a specific thread.";
const GET_CHANNEL_INFO_DESC: &str = "Get information about a Slack channel.";
const GET_USER_INFO_DESC: &str = "Get information about a Slack user.";
const LIST_MY_CHANNELS_DESC: &str = "List all channels you're a member of.";
const SEARCH_MY_CONVERSATIONS_DESC: &str =
    "Search for messages where you're mentioned or involved in conversations.";
const GET_MESSAGE_PERMALINK_DESC: &str = "Get a permanent link to a specific message.";

/// Name and description of every tool, in listing order
pub const TOOL_DESCRIPTIONS: [(&str, &str); 7] = [
    (READ_CHANNEL_MESSAGES, READ_CHANNEL_MESSAGES_DESC),
    (READ_THREAD_MESSAGES, READ_THREAD_MESSAGES_DESC),
    (GET_CHANNEL_INFO, GET_CHANNEL_INFO_DESC),
    (GET_USER_INFO, GET_USER_INFO_DESC),
    (LIST_MY_CHANNELS, LIST_MY_CHANNELS_DESC),
    (SEARCH_MY_CONVERSATIONS, SEARCH_MY_CONVERSATIONS_DESC),
    (GET_MESSAGE_PERMALINK, GET_MESSAGE_PERMALINK_DESC),
];

/// Definitions of all seven tools, in the same order as [`TOOL_DESCRIPTIONS`]
pub fn tool_definitions() -> Result<Vec<Tool>, ToolError> {
    Ok(vec![
        tool::<ReadChannelMessagesRequest>(READ_CHANNEL_MESSAGES, READ_CHANNEL_MESSAGES_DESC)?,
        tool::<ReadThreadMessagesRequest>(READ_THREAD_MESSAGES, READ_THREAD_MESSAGES_DESC)?,
        tool::<ChannelInfoRequest>(GET_CHANNEL_INFO, GET_CHANNEL_INFO_DESC)?,
        tool::<UserInfoRequest>(GET_USER_INFO, GET_USER_INFO_DESC)?,
        tool::<ListChannelsRequest>(LIST_MY_CHANNELS, LIST_MY_CHANNELS_DESC)?,
        tool::<SearchRequest>(SEARCH_MY_CONVERSATIONS, SEARCH_MY_CONVERSATIONS_DESC)?,
        tool::<PermalinkRequest>(GET_MESSAGE_PERMALINK, GET_MESSAGE_PERMALINK_DESC)?,
    ])
}

fn tool<T: JsonSchema>(name: &'static str, description: &'static str) -> Result<Tool, ToolError> {
    Ok(Tool::new(name, description, input_schema::<T>(name)?))
}

fn input_schema<T: JsonSchema>(name: &str) -> Result<Arc<JsonObject>, ToolError> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(schema)? {
        Value::Object(map) => Ok(Arc::new(map)),
        other => Err(ToolError::other(format!(
            "Input schema for {} is not an object: {}",
            name, other
        ))),
    }
}
