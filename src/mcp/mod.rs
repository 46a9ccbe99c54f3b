//! MCP (Model Context Protocol) server implementation
//!
//! Exposes read-only Slack access as MCP tools:
//! - read_channel_messages: Recent history of a channel
//! - read_thread_messages: A parent message and its replies
//! - get_channel_info: Channel metadata
//! - get_user_info: User profile
//! - list_my_channels: Channels the token owner belongs to
//! - search_my_conversations: Search messages mentioning the token owner
//! - get_message_permalink: Permanent link to a message

pub mod constants;
pub mod dispatch;
pub mod format;
pub mod handlers;
pub mod tools;
pub mod types;

use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    ErrorData, RoleServer, ServerHandler,
};
use tracing::{error, info};

pub use dispatch::{Dispatcher, ToolResult};
pub use types::ToolCall;

use crate::slack::SlackApi;

/// MCP server handler for Slack
#[derive(Clone)]
pub struct SlackHandler {
    dispatcher: Dispatcher,
}

impl SlackHandler {
    pub fn new(api: Arc<dyn SlackApi>, workspace_url: impl Into<String>) -> Self {
        Self {
            dispatcher: Dispatcher::new(api, workspace_url),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for SlackHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "slack-reader gives read-only access to Slack. \
                Use list_my_channels to find channel ids, read_channel_messages and \
                read_thread_messages to read conversations, and search_my_conversations \
                to find messages that mention you."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = tools::tool_definitions().map_err(|e| {
            error!("Failed to build tool list: {}", e);
            ErrorData::internal_error(e.to_string(), None)
        })?;
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        info!("Tool call: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        let result = self.dispatcher.dispatch(&request.name, arguments).await;
        Ok(result.into())
    }
}
