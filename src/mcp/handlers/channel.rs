//! Channel metadata and listing handlers

use crate::error::ToolError;
use crate::mcp::constants::{CHANNEL_LIST_LIMIT, NOT_AVAILABLE};
use crate::mcp::format::format_date;
use crate::mcp::types::{ChannelInfoRequest, ListChannelsRequest};
use crate::slack::SlackApi;
use crate::types::Channel;

const PRIVATE_GLYPH: &str = "\u{1F512}";
const PUBLIC_GLYPH: &str = "\u{1F310}";

pub async fn handle_channel_info(
    api: &dyn SlackApi,
    req: &ChannelInfoRequest,
) -> Result<String, ToolError> {
    let channel = api.conversations_info(&req.channel_id).await?;

    let members = channel
        .num_members
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut output = String::from("# Channel Information\n\n");
    output.push_str(&format!("**Name:** #{}\n", channel.display_name()));
    output.push_str(&format!("**ID:** {}\n", channel.id));
    output.push_str(&format!("**Created:** {}\n", format_date(channel.created)));
    output.push_str(&format!("**Members:** {}\n", members));
    output.push_str(&format!("**Is Private:** {}\n", channel.is_private));
    output.push_str(&format!("**Is Archived:** {}\n", channel.is_archived));

    if let Some(topic) = channel.topic() {
        output.push_str(&format!("**Topic:** {}\n", topic));
    }
    if let Some(purpose) = channel.purpose() {
        output.push_str(&format!("**Purpose:** {}\n", purpose));
    }

    Ok(output)
}

pub async fn handle_list_channels(
    api: &dyn SlackApi,
    req: &ListChannelsRequest,
) -> Result<String, ToolError> {
    let channels = api
        .conversations_list(req.types(), CHANNEL_LIST_LIMIT)
        .await?;

    let lines: Vec<String> = channels
        .iter()
        .filter(|c| c.is_member)
        .map(format_channel_line)
        .collect();

    let mut output = String::from("# Your Channels\n");
    output.push_str(&format!(
        "Found {} channels you're a member of:\n\n",
        lines.len()
    ));
    output.push_str(&lines.join("\n"));

    Ok(output)
}

fn format_channel_line(channel: &Channel) -> String {
    let glyph = if channel.is_private {
        PRIVATE_GLYPH
    } else {
        PUBLIC_GLYPH
    };
    format!(
        "- {} **#{}** (`{}`) - {} members",
        glyph,
        channel.display_name(),
        channel.id,
        channel.num_members.unwrap_or(0)
    )
}
