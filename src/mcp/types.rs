//! Request types for MCP tools
//!
//! Each tool has a typed request; [`ToolCall`] is the closed set of calls the
//! dispatcher can execute.

use rmcp::{model::JsonObject, schemars};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ToolError;
use crate::mcp::constants::*;

/// Request for read_channel_messages
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ReadChannelMessagesRequest {
    #[schemars(description = "Slack channel ID (e.g., C1234567890)")]
    pub channel_id: String,
    #[schemars(description = "Hours to look back (default: 24)", extend("default" = 24))]
    pub lookback_hours: Option<f64>,
    #[schemars(
        description = "Maximum messages to retrieve (default: 100, max: 1000)",
        extend("default" = DEFAULT_HISTORY_LIMIT)
    )]
    pub limit: Option<f64>,
}

impl ReadChannelMessagesRequest {
    /// Requested window; negative or non-finite values fall back to sane bounds
    pub fn lookback_hours(&self) -> f64 {
        self.lookback_hours
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_LOOKBACK_HOURS)
            .max(0.0)
    }

    pub fn limit(&self) -> u32 {
        clamp_count(self.limit, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT)
    }
}

/// Request for read_thread_messages
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ReadThreadMessagesRequest {
    #[schemars(description = "Slack channel ID where the thread exists")]
    pub channel_id: String,
    #[schemars(description = "Thread timestamp (ts of the parent message)")]
    pub thread_ts: String,
}

/// Request for get_channel_info
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ChannelInfoRequest {
    #[schemars(description = "Slack channel ID")]
    pub channel_id: String,
}

/// Request for get_user_info
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct UserInfoRequest {
    #[schemars(description = "Slack user ID")]
    pub user_id: String,
}

/// Request for list_my_channels
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListChannelsRequest {
    #[schemars(
        description = "Channel types (comma-separated: public_channel, private_channel, mpim, im)",
        extend("default" = DEFAULT_CHANNEL_TYPES)
    )]
    pub types: Option<String>,
}

impl ListChannelsRequest {
    pub fn types(&self) -> &str {
        self.types
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_CHANNEL_TYPES)
    }
}

/// Request for search_my_conversations
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    #[schemars(description = "Search query (automatically includes your mentions)")]
    pub query: String,
    #[schemars(
        description = "Number of results (default: 20, max: 100)",
        extend("default" = DEFAULT_SEARCH_COUNT)
    )]
    pub count: Option<f64>,
}

impl SearchRequest {
    pub fn count(&self) -> u32 {
        clamp_count(self.count, DEFAULT_SEARCH_COUNT, MAX_SEARCH_COUNT)
    }
}

/// Request for get_message_permalink
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct PermalinkRequest {
    #[schemars(description = "Slack channel ID")]
    pub channel_id: String,
    #[schemars(description = "Message timestamp")]
    pub message_ts: String,
}

/// Clamp a caller-supplied count into `1..=max`, truncating fractions
fn clamp_count(value: Option<f64>, default: u32, max: u32) -> u32 {
    match value {
        Some(v) if v.is_finite() => v.trunc().clamp(1.0, f64::from(max)) as u32,
        _ => default,
    }
}

/// A validated tool invocation
#[derive(Debug, Clone)]
pub enum ToolCall {
    ReadChannelMessages(ReadChannelMessagesRequest),
    ReadThreadMessages(ReadThreadMessagesRequest),
    GetChannelInfo(ChannelInfoRequest),
    GetUserInfo(UserInfoRequest),
    ListMyChannels(ListChannelsRequest),
    SearchMyConversations(SearchRequest),
    GetMessagePermalink(PermalinkRequest),
}

impl ToolCall {
    /// Build a call from a tool name and its raw arguments.
    ///
    /// Returns `Ok(None)` for a name that is not one of ours; a known name
    /// with missing or mistyped arguments is an error.
    pub fn parse(name: &str, arguments: JsonObject) -> Result<Option<Self>, ToolError> {
        let args = Value::Object(arguments);
        let call = match name {
            READ_CHANNEL_MESSAGES => Self::ReadChannelMessages(serde_json::from_value(args)?),
            READ_THREAD_MESSAGES => Self::ReadThreadMessages(serde_json::from_value(args)?),
            GET_CHANNEL_INFO => Self::GetChannelInfo(serde_json::from_value(args)?),
            GET_USER_INFO => Self::GetUserInfo(serde_json::from_value(args)?),
            LIST_MY_CHANNELS => Self::ListMyChannels(serde_json::from_value(args)?),
            SEARCH_MY_CONVERSATIONS => Self::SearchMyConversations(serde_json::from_value(args)?),
            GET_MESSAGE_PERMALINK => Self::GetMessagePermalink(serde_json::from_value(args)?),
            _ => return Ok(None),
        };
        Ok(Some(call))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadChannelMessages(_) => READ_CHANNEL_MESSAGES,
            Self::ReadThreadMessages(_) => READ_THREAD_MESSAGES,
            Self::GetChannelInfo(_) => GET_CHANNEL_INFO,
            Self::GetUserInfo(_) => GET_USER_INFO,
            Self::ListMyChannels(_) => LIST_MY_CHANNELS,
            Self::SearchMyConversations(_) => SEARCH_MY_CONVERSATIONS,
            Self::GetMessagePermalink(_) => GET_MESSAGE_PERMALINK,
        }
    }
}
