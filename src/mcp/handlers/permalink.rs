//! Permalink lookup handler

use crate::error::ToolError;
use crate::mcp::types::PermalinkRequest;
use crate::slack::SlackApi;

pub async fn handle_permalink(
    api: &dyn SlackApi,
    req: &PermalinkRequest,
) -> Result<String, ToolError> {
    let permalink = api
        .chat_get_permalink(&req.channel_id, &req.message_ts)
        .await?;

    Ok(format!("# Message Permalink\n\n**Link:** {}", permalink))
}
