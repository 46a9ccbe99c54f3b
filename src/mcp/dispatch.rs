//! Tool dispatch
//!
//! Routes a tool name and its arguments to exactly one handler. Failures
//! never escape [`Dispatcher::dispatch`]: they come back as a single text
//! block.

use std::sync::Arc;

use chrono::Utc;
use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{debug, error};

use crate::error::ToolError;
use crate::mcp::handlers::{channel, history, permalink, search, thread, user};
use crate::mcp::types::ToolCall;
use crate::slack::SlackApi;

/// Ordered text blocks returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    pub blocks: Vec<String>,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![text.into()],
        }
    }

    /// The first block, if any
    pub fn first(&self) -> Option<&str> {
        self.blocks.first().map(String::as_str)
    }
}

impl From<ToolError> for ToolResult {
    fn from(err: ToolError) -> Self {
        Self::text(err.to_string())
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        CallToolResult::success(result.blocks.into_iter().map(Content::text).collect())
    }
}

/// Executes tool calls against a shared Slack client
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn SlackApi>,
    workspace_url: String,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn SlackApi>, workspace_url: impl Into<String>) -> Self {
        Self {
            api,
            workspace_url: workspace_url.into(),
        }
    }

    pub fn api(&self) -> &dyn SlackApi {
        self.api.as_ref()
    }

    /// Run a named tool. Unknown names and failures become text blocks.
    pub async fn dispatch(&self, name: &str, arguments: JsonObject) -> ToolResult {
        let call = match ToolCall::parse(name, arguments) {
            Ok(Some(call)) => call,
            Ok(None) => {
                debug!("Unknown tool requested: {}", name);
                return ToolResult::text(format!("Unknown tool: {}", name));
            }
            Err(e) => {
                error!("{}", e);
                return e.into();
            }
        };

        match self.execute(call).await {
            Ok(result) => result,
            Err(e) => {
                error!("{}", e);
                e.into()
            }
        }
    }

    /// Run a validated call, keeping the failure kind
    pub async fn execute(&self, call: ToolCall) -> Result<ToolResult, ToolError> {
        debug!("Executing {}", call.name());
        let api = self.api.as_ref();
        let workspace_url = self.workspace_url.as_str();

        let text = match &call {
            ToolCall::ReadChannelMessages(req) => {
                history::handle_read_channel_messages(api, workspace_url, req, Utc::now()).await?
            }
            ToolCall::ReadThreadMessages(req) => {
                thread::handle_read_thread_messages(api, workspace_url, req).await?
            }
            ToolCall::GetChannelInfo(req) => channel::handle_channel_info(api, req).await?,
            ToolCall::GetUserInfo(req) => user::handle_user_info(api, req).await?,
            ToolCall::ListMyChannels(req) => channel::handle_list_channels(api, req).await?,
            ToolCall::SearchMyConversations(req) => search::handle_search(api, req).await?,
            ToolCall::GetMessagePermalink(req) => permalink::handle_permalink(api, req).await?,
        };

        Ok(ToolResult::text(text))
    }
}
