//! Slack Web API access
//!
//! [`SlackApi`] is the seam between the tools and the network: implementors
//! only provide the raw `call`, and the typed methods on top decode the
//! response envelope. [`SlackClient`] is the HTTP implementation.

mod client;

pub use client::SlackClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ToolError;
use crate::types::{
    AuthTestResponse, Channel, ChannelInfoResponse, ChannelListResponse, HistoryResponse,
    Message, PermalinkResponse, SearchResponse, SearchResults, User, UserInfoResponse,
};

// Web API method names
pub const CONVERSATIONS_INFO: &str = "conversations.info";
pub const CONVERSATIONS_HISTORY: &str = "conversations.history";
pub const CONVERSATIONS_REPLIES: &str = "conversations.replies";
pub const CONVERSATIONS_LIST: &str = "conversations.list";
pub const USERS_INFO: &str = "users.info";
pub const AUTH_TEST: &str = "auth.test";
pub const SEARCH_MESSAGES: &str = "search.messages";
pub const CHAT_GET_PERMALINK: &str = "chat.getPermalink";

/// Read-only access to the Slack Web API
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Invoke a Web API method and return the raw JSON body
    async fn call(&self, method: &str, params: &[(&str, String)]) -> Result<Value, ToolError>;

    async fn conversations_info(&self, channel: &str) -> Result<Channel, ToolError> {
        let body = self
            .call(CONVERSATIONS_INFO, &[("channel", channel.to_string())])
            .await?;
        decode::<ChannelInfoResponse>(CONVERSATIONS_INFO, body).map(|r| r.channel)
    }

    async fn conversations_history(
        &self,
        channel: &str,
        oldest: &str,
        limit: u32,
    ) -> Result<Vec<Message>, ToolError> {
        let params = [
            ("channel", channel.to_string()),
            ("oldest", oldest.to_string()),
            ("limit", limit.to_string()),
        ];
        let body = self.call(CONVERSATIONS_HISTORY, &params).await?;
        decode::<HistoryResponse>(CONVERSATIONS_HISTORY, body).map(|r| r.messages)
    }

    async fn conversations_replies(
        &self,
        channel: &str,
        ts: &str,
    ) -> Result<Vec<Message>, ToolError> {
        let params = [("channel", channel.to_string()), ("ts", ts.to_string())];
        let body = self.call(CONVERSATIONS_REPLIES, &params).await?;
        decode::<HistoryResponse>(CONVERSATIONS_REPLIES, body).map(|r| r.messages)
    }

    async fn conversations_list(&self, types: &str, limit: u32) -> Result<Vec<Channel>, ToolError> {
        let params = [
            ("types", types.to_string()),
            ("exclude_archived", "true".to_string()),
            ("limit", limit.to_string()),
        ];
        let body = self.call(CONVERSATIONS_LIST, &params).await?;
        decode::<ChannelListResponse>(CONVERSATIONS_LIST, body).map(|r| r.channels)
    }

    async fn users_info(&self, user: &str) -> Result<User, ToolError> {
        let body = self.call(USERS_INFO, &[("user", user.to_string())]).await?;
        decode::<UserInfoResponse>(USERS_INFO, body).map(|r| r.user)
    }

    /// Identity behind the configured token
    async fn auth_test(&self) -> Result<AuthTestResponse, ToolError> {
        let body = self.call(AUTH_TEST, &[]).await?;
        decode(AUTH_TEST, body)
    }

    async fn search_messages(&self, query: &str, count: u32) -> Result<SearchResults, ToolError> {
        let params = [("query", query.to_string()), ("count", count.to_string())];
        let body = self.call(SEARCH_MESSAGES, &params).await?;
        decode::<SearchResponse>(SEARCH_MESSAGES, body).map(|r| r.messages)
    }

    async fn chat_get_permalink(&self, channel: &str, message_ts: &str) -> Result<String, ToolError> {
        let params = [
            ("channel", channel.to_string()),
            ("message_ts", message_ts.to_string()),
        ];
        let body = self.call(CHAT_GET_PERMALINK, &params).await?;
        decode::<PermalinkResponse>(CHAT_GET_PERMALINK, body).map(|r| r.permalink)
    }
}

/// Check the `ok` flag of a Web API response and decode its payload
pub fn decode<T: DeserializeOwned>(method: &str, body: Value) -> Result<T, ToolError> {
    if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        let code = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error");
        return Err(ToolError::SlackApi(code.to_string()));
    }

    serde_json::from_value(body)
        .map_err(|e| ToolError::other(format!("Unexpected {} response: {}", method, e)))
}
