//! Conversation search handler

use tracing::debug;

use crate::error::ToolError;
use crate::mcp::format::{format_timestamp, MESSAGE_SEPARATOR};
use crate::mcp::types::SearchRequest;
use crate::slack::SlackApi;
use crate::types::SearchMatch;

pub async fn handle_search(api: &dyn SlackApi, req: &SearchRequest) -> Result<String, ToolError> {
    let identity = api.auth_test().await?;
    let query = mention_query(&req.query, &identity.user_id);
    debug!("Searching for '{}'", query);

    let results = api.search_messages(&query, req.count()).await?;

    let mut output = String::from("# Search Results\n");
    output.push_str(&format!(
        "Query: '{}' (including mentions of you)\n",
        req.query
    ));
    output.push_str(&format!(
        "Found {} total matches, showing {} results:\n\n",
        results.total,
        results.matches.len()
    ));

    for hit in &results.matches {
        output.push_str(&format_match(hit));
    }

    Ok(output)
}

/// Narrow a query to messages mentioning `user_id`
fn mention_query(query: &str, user_id: &str) -> String {
    format!("{} <@{}>", query, user_id)
}

fn format_match(hit: &SearchMatch) -> String {
    let mut output = format!("**Channel:** #{}\n", hit.channel_name());
    output.push_str(&format!("**User:** <@{}>\n", hit.author()));
    output.push_str(&format!("**Time:** {}\n", format_timestamp(&hit.ts)));
    output.push_str(&format!("**Link:** {}\n", hit.permalink));
    output.push_str(&format!("**Message:**\n{}\n", hit.text));
    output.push_str(MESSAGE_SEPARATOR);
    output
}
