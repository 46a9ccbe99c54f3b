//! Configuration constants for MCP tools

/// Tool names exposed over MCP
pub const READ_CHANNEL_MESSAGES: &str = "read_channel_messages";
pub const READ_THREAD_MESSAGES: &str = "read_thread_messages";
pub const GET_CHANNEL_INFO: &str = "get_channel_info";
pub const GET_USER_INFO: &str = "get_user_info";
pub const LIST_MY_CHANNELS: &str = "list_my_channels";
pub const SEARCH_MY_CONVERSATIONS: &str = "search_my_conversations";
pub const GET_MESSAGE_PERMALINK: &str = "get_message_permalink";

/// Default history window in hours
pub const DEFAULT_LOOKBACK_HOURS: f64 = 24.0;

/// Default and maximum number of history messages per call
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;
pub const MAX_HISTORY_LIMIT: u32 = 1000;

/// Default and maximum number of search results per call
pub const DEFAULT_SEARCH_COUNT: u32 = 20;
pub const MAX_SEARCH_COUNT: u32 = 100;

/// Default conversation types for channel listing
pub const DEFAULT_CHANNEL_TYPES: &str = "public_channel,private_channel";

/// Page size for channel listing
pub const CHANNEL_LIST_LIMIT: u32 = 1000;

/// Placeholder for absent optional fields
pub const NOT_AVAILABLE: &str = "N/A";
