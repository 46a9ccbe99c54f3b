//! Thread handler

use crate::error::ToolError;
use crate::mcp::format::{format_message_footer, format_message_header, message_permalink};
use crate::mcp::types::ReadThreadMessagesRequest;
use crate::slack::SlackApi;

pub async fn handle_read_thread_messages(
    api: &dyn SlackApi,
    workspace_url: &str,
    req: &ReadThreadMessagesRequest,
) -> Result<String, ToolError> {
    let messages = api
        .conversations_replies(&req.channel_id, &req.thread_ts)
        .await?;

    let mut output = String::from("# Thread Messages\n");
    output.push_str(&format!(
        "**Link:** {}\n",
        message_permalink(workspace_url, &req.channel_id, &req.thread_ts)
    ));
    output.push_str(&format!("**Total messages:** {}\n\n", messages.len()));

    for (idx, msg) in messages.iter().enumerate() {
        if idx == 0 {
            output.push_str("**[PARENT]**\n");
        } else {
            output.push_str(&format!("**[REPLY {}]**\n", idx));
        }
        output.push_str(&format_message_header(msg));
        output.push_str(&format_message_footer(msg));
    }

    Ok(output)
}
