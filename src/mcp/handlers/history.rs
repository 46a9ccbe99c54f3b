//! Channel history handler

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::ToolError;
use crate::mcp::format::{format_message_footer, format_message_header, message_permalink};
use crate::mcp::types::ReadChannelMessagesRequest;
use crate::slack::SlackApi;

pub async fn handle_read_channel_messages(
    api: &dyn SlackApi,
    workspace_url: &str,
    req: &ReadChannelMessagesRequest,
    now: DateTime<Utc>,
) -> Result<String, ToolError> {
    let lookback_hours = req.lookback_hours();
    let oldest = oldest_ts(now, lookback_hours);

    let channel = api.conversations_info(&req.channel_id).await?;
    let messages = api
        .conversations_history(&req.channel_id, &oldest, req.limit())
        .await?;

    let visible: Vec<_> = messages.iter().filter(|m| !m.is_hidden()).collect();
    debug!(
        "{} of {} messages in {} are visible",
        visible.len(),
        messages.len(),
        req.channel_id
    );

    let mut output = format!("# Messages from #{}\n", channel.display_name());
    output.push_str(&format!(
        "Found {} messages from the last {} hours\n\n",
        visible.len(),
        lookback_hours
    ));

    for msg in visible {
        output.push_str(&format_message_header(msg));
        output.push_str(&format!(
            "**Link:** {}\n",
            message_permalink(workspace_url, &req.channel_id, &msg.ts)
        ));
        if msg.thread_ts.is_some() {
            output.push_str(&format!(
                "**Thread:** Yes (replies: {})\n",
                msg.reply_count
            ));
        }
        output.push_str(&format_message_footer(msg));
    }

    Ok(output)
}

/// Lower history bound as a Slack `ts` string
fn oldest_ts(now: DateTime<Utc>, lookback_hours: f64) -> String {
    let now_secs = now.timestamp_millis() as f64 / 1000.0;
    format!("{:.6}", now_secs - lookback_hours * 3600.0)
}
