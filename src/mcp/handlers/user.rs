//! User profile handler

use crate::error::ToolError;
use crate::mcp::constants::NOT_AVAILABLE;
use crate::mcp::types::UserInfoRequest;
use crate::slack::SlackApi;

pub async fn handle_user_info(
    api: &dyn SlackApi,
    req: &UserInfoRequest,
) -> Result<String, ToolError> {
    let user = api.users_info(&req.user_id).await?;
    let profile = &user.profile;
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut output = String::from("# User Information\n\n");
    output.push_str(&format!("**Name:** {}\n", user.display_name()));
    output.push_str(&format!("**ID:** {}\n", user.id));
    output.push_str(&format!("**Display Name:** @{}\n", user.name));
    output.push_str(&format!("**Email:** {}\n", or_na(&profile.email)));
    output.push_str(&format!("**Title:** {}\n", or_na(&profile.title)));
    output.push_str(&format!("**Status:** {}\n", or_na(&profile.status_text)));
    output.push_str(&format!("**Timezone:** {}\n", or_na(&user.tz_label)));
    output.push_str(&format!("**Is Admin:** {}\n", user.is_admin));
    output.push_str(&format!("**Is Bot:** {}\n", user.is_bot));

    Ok(output)
}
