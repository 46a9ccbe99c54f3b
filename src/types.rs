//! Core type definitions for slack-reader
//!
//! Mirrors the subset of Slack Web API payloads the tools read:
//! - Messages: channel history, thread replies and search matches
//! - Channels: conversation metadata and listings
//! - Users: account and profile fields
//!
//! Every field the API may omit carries a serde default so that a sparse
//! payload still decodes.

use serde::Deserialize;

/// Message subtypes that never show up in channel history output
pub const HIDDEN_SUBTYPES: [&str; 3] = ["bot_message", "channel_join", "channel_leave"];

/// A single emoji reaction on a message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reaction {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// A message from channel history or a thread
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub thread_ts: Option<String>,
    #[serde(default)]
    pub reply_count: u32,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub subtype: Option<String>,
}

impl Message {
    /// Author id, or `unknown` for messages without one
    pub fn author(&self) -> &str {
        self.user.as_deref().unwrap_or("unknown")
    }

    /// Whether this message is a bot post or a join/leave notice
    pub fn is_hidden(&self) -> bool {
        self.subtype
            .as_deref()
            .is_some_and(|s| HIDDEN_SUBTYPES.contains(&s))
    }
}

/// Topic or purpose text attached to a channel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelText {
    #[serde(default)]
    pub value: String,
}

/// Conversation metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub num_members: Option<u64>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub topic: Option<ChannelText>,
    #[serde(default)]
    pub purpose: Option<ChannelText>,
}

impl Channel {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }

    pub fn topic(&self) -> Option<&str> {
        non_empty(self.topic.as_ref())
    }

    pub fn purpose(&self) -> Option<&str> {
        non_empty(self.purpose.as_ref())
    }
}

fn non_empty(text: Option<&ChannelText>) -> Option<&str> {
    text.map(|t| t.value.as_str()).filter(|v| !v.is_empty())
}

/// Profile fields of a user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status_text: Option<String>,
}

/// A workspace member
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub tz_label: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub profile: Profile,
}

impl User {
    /// Real name when set, otherwise the short handle
    pub fn display_name(&self) -> &str {
        self.real_name.as_deref().unwrap_or(&self.name)
    }
}

/// Channel reference embedded in a search match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchChannel {
    #[serde(default)]
    pub name: Option<String>,
}

/// A single search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub channel: MatchChannel,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub permalink: String,
}

impl SearchMatch {
    pub fn channel_name(&self) -> &str {
        self.channel.name.as_deref().unwrap_or("unknown")
    }

    pub fn author(&self) -> &str {
        self.user.as_deref().unwrap_or("unknown")
    }
}

/// The `messages` section of a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

// =========================================================================
// Response envelopes
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct ChannelInfoResponse {
    pub channel: Channel,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
pub struct AuthTestResponse {
    pub user_id: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub messages: SearchResults,
}

#[derive(Debug, Deserialize)]
pub struct PermalinkResponse {
    pub permalink: String,
}
