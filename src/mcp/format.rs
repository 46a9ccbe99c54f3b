//! Shared formatting utilities for MCP tool outputs

use chrono::DateTime;

use crate::mcp::constants::NOT_AVAILABLE;
use crate::types::{Message, Reaction};

/// Separator appended after every rendered message
pub const MESSAGE_SEPARATOR: &str = "\n---\n";

/// Render a Slack `ts` ("1700000000.123456") as a UTC date-time.
///
/// Fractional seconds are truncated.
pub fn format_timestamp(ts: &str) -> String {
    ts.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite())
        .and_then(|secs| DateTime::from_timestamp(secs.trunc() as i64, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render epoch seconds as a calendar date
pub fn format_date(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Construct a message permalink from the workspace URL
pub fn message_permalink(workspace_url: &str, channel_id: &str, ts: &str) -> String {
    format!(
        "{}/archives/{}/p{}",
        workspace_url,
        channel_id,
        ts.replace('.', "")
    )
}

/// `:emoji: (count)` pairs, comma separated
pub fn format_reactions(reactions: &[Reaction]) -> Option<String> {
    if reactions.is_empty() {
        return None;
    }
    let parts: Vec<String> = reactions
        .iter()
        .map(|r| format!(":{}: ({})", r.name, r.count))
        .collect();
    Some(parts.join(", "))
}

/// Time and author lines shared by every message rendering
pub fn format_message_header(msg: &Message) -> String {
    format!(
        "**Time:** {}\n**User:** <@{}>\n",
        format_timestamp(&msg.ts),
        msg.author()
    )
}

/// Body, reactions and separator shared by every message rendering
pub fn format_message_footer(msg: &Message) -> String {
    let mut output = format!("**Message:**\n{}\n", msg.text);
    if let Some(reactions) = format_reactions(&msg.reactions) {
        output.push_str(&format!("**Reactions:** {}\n", reactions));
    }
    output.push_str(MESSAGE_SEPARATOR);
    output
}
