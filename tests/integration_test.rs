//! Integration tests for slack-reader
//!
//! These tests drive the dispatcher end to end against a fixture Slack API
//! that serves canned Web API payloads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use slack_reader::mcp::types::ToolCall;
use slack_reader::{Dispatcher, SlackApi, ToolError, ToolResult};

const WORKSPACE: &str = "https://acme.slack.com";

/// Serves canned responses keyed by Web API method and records every call
#[derive(Default)]
struct FixtureSlack {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<(String, HashMap<String, String>)>>,
}

impl FixtureSlack {
    fn new() -> Self {
        let mut fixture = Self::default();
        fixture.respond(
            "conversations.info",
            json!({
                "ok": true,
                "channel": {
                    "id": "C100",
                    "name": "engineering",
                    "created": 1600000000,
                    "num_members": 42,
                    "is_private": false,
                    "is_archived": false,
                    "topic": {"value": "Ship it"},
                    "purpose": {"value": ""}
                }
            }),
        );
        fixture.respond(
            "conversations.history",
            json!({
                "ok": true,
                "messages": [
                    {"user": "U1", "ts": "1700000000.000100", "text": "first ordinary",
                     "thread_ts": "1700000000.000100", "reply_count": 2,
                     "reactions": [{"name": "thumbsup", "count": 3}]},
                    {"subtype": "bot_message", "ts": "1700000001.000000", "text": "beep from bot"},
                    {"subtype": "channel_join", "user": "U7", "ts": "1700000002.000000", "text": "joined the channel"},
                    {"subtype": "channel_leave", "user": "U8", "ts": "1700000003.000000", "text": "left the channel"},
                    {"user": "U2", "ts": "1700000004.000000", "text": "second ordinary"}
                ]
            }),
        );
        fixture.respond(
            "conversations.replies",
            json!({
                "ok": true,
                "messages": [
                    {"user": "U1", "ts": "1700000000.000100", "text": "parent text"},
                    {"user": "U2", "ts": "1700000100.000000", "text": "reply one"},
                    {"user": "U3", "ts": "1700000200.000000", "text": "reply two",
                     "reactions": [{"name": "eyes", "count": 1}]}
                ]
            }),
        );
        fixture.respond(
            "users.info",
            json!({
                "ok": true,
                "user": {
                    "id": "U1",
                    "name": "jdoe",
                    "real_name": "Jane Doe",
                    "tz_label": "Pacific Standard Time",
                    "is_admin": true,
                    "is_bot": false,
                    "profile": {"title": "Staff Engineer", "status_text": "Heads down"}
                }
            }),
        );
        fixture.respond(
            "conversations.list",
            json!({
                "ok": true,
                "channels": [
                    {"id": "C100", "name": "engineering", "is_member": true, "num_members": 42},
                    {"id": "C200", "name": "secret-ops", "is_member": true, "is_private": true, "num_members": 3},
                    {"id": "C300", "name": "random", "is_member": false, "num_members": 900}
                ]
            }),
        );
        fixture.respond(
            "auth.test",
            json!({"ok": true, "user_id": "U999", "user": "me", "team": "Acme"}),
        );
        fixture.respond(
            "search.messages",
            json!({
                "ok": true,
                "messages": {
                    "total": 57,
                    "matches": [
                        {"channel": {"name": "engineering"}, "user": "U1", "ts": "1700000000.000100",
                         "text": "deploy at noon <@U999>", "permalink": "https://acme.slack.com/archives/C100/p1700000000000100"},
                        {"user": "U2", "ts": "1700000004.000000", "text": "deploy done"}
                    ]
                }
            }),
        );
        fixture.respond(
            "chat.getPermalink",
            json!({"ok": true, "channel": "C100", "permalink": "https://acme.slack.com/archives/C100/p1700000000000100"}),
        );
        fixture
    }

    /// Every method fails with the given Slack error code
    fn failing(code: &str) -> Self {
        let mut fixture = Self::default();
        for method in [
            "conversations.info",
            "conversations.history",
            "conversations.replies",
            "conversations.list",
            "users.info",
            "auth.test",
            "search.messages",
            "chat.getPermalink",
        ] {
            fixture.respond(method, json!({"ok": false, "error": code}));
        }
        fixture
    }

    fn respond(&mut self, method: &str, body: Value) {
        self.responses.insert(method.to_string(), body);
    }

    fn params_of(&self, method: &str) -> Option<HashMap<String, String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
    }
}

#[async_trait]
impl SlackApi for FixtureSlack {
    async fn call(&self, method: &str, params: &[(&str, String)]) -> Result<Value, ToolError> {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params.clone()));

        let mut body = self
            .responses
            .get(method)
            .cloned()
            .unwrap_or_else(|| json!({"ok": false, "error": "unknown_method"}));

        // Honour the history lower bound like the real API does
        if method == "conversations.history" {
            let oldest: f64 = params
                .get("oldest")
                .and_then(|o| o.parse().ok())
                .unwrap_or(0.0);
            if let Some(messages) = body.get_mut("messages").and_then(Value::as_array_mut) {
                messages.retain(|m| {
                    m.get("ts")
                        .and_then(Value::as_str)
                        .and_then(|ts| ts.parse::<f64>().ok())
                        .is_some_and(|ts| ts >= oldest)
                });
            }
        }

        Ok(body)
    }
}

fn dispatcher(fixture: FixtureSlack) -> (Dispatcher, Arc<FixtureSlack>) {
    let fixture = Arc::new(fixture);
    let api: Arc<dyn SlackApi> = fixture.clone();
    (Dispatcher::new(api, WORKSPACE), fixture)
}

fn args(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("arguments must be an object"),
    }
}

fn text(result: &ToolResult) -> &str {
    assert_eq!(result.blocks.len(), 1);
    result.first().unwrap()
}

/// Minimal valid arguments for every tool
fn minimal_calls() -> Vec<(&'static str, Value)> {
    vec![
        ("read_channel_messages", json!({"channel_id": "C100"})),
        (
            "read_thread_messages",
            json!({"channel_id": "C100", "thread_ts": "1700000000.000100"}),
        ),
        ("get_channel_info", json!({"channel_id": "C100"})),
        ("get_user_info", json!({"user_id": "U1"})),
        ("list_my_channels", json!({})),
        ("search_my_conversations", json!({"query": "deploy"})),
        (
            "get_message_permalink",
            json!({"channel_id": "C100", "message_ts": "1700000000.000100"}),
        ),
    ]
}

#[tokio::test]
async fn test_every_tool_answers_with_text() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    for (name, arguments) in minimal_calls() {
        let result = dispatcher.dispatch(name, args(arguments)).await;
        assert!(!result.blocks.is_empty(), "{} returned nothing", name);
        let output = result.first().unwrap();
        assert!(!output.starts_with("Error:"), "{} failed: {}", name, output);
        assert!(output.starts_with("# "), "{} is not markdown: {}", name, output);
    }
}

#[tokio::test]
async fn test_unknown_tool_is_informational() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch("post_message", args(json!({"channel_id": "C100"})))
        .await;

    assert_eq!(result, ToolResult::text("Unknown tool: post_message"));
    assert!(fixture.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_argument_is_text_error() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch("read_channel_messages", args(json!({"limit": 5})))
        .await;

    let output = text(&result);
    assert!(output.starts_with("Error: "), "{}", output);
    assert!(output.contains("channel_id"));
    assert!(fixture.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_lookback_yields_no_messages() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch(
            "read_channel_messages",
            args(json!({"channel_id": "C100", "lookback_hours": 0})),
        )
        .await;

    let output = text(&result);
    assert!(output.starts_with("# Messages from #engineering\n"));
    assert!(output.contains("Found 0 messages from the last 0 hours"));
    assert!(!output.contains("**Message:**"));
}

#[tokio::test]
async fn test_hidden_subtypes_are_filtered() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch(
            "read_channel_messages",
            args(json!({"channel_id": "C100", "lookback_hours": 1000000})),
        )
        .await;

    let output = text(&result);
    assert!(output.contains("Found 2 messages"));
    assert_eq!(output.matches("**Message:**").count(), 2);
    assert!(output.contains("first ordinary"));
    assert!(output.contains("second ordinary"));
    assert!(!output.contains("beep from bot"));
    assert!(!output.contains("joined the channel"));
    assert!(!output.contains("left the channel"));
}

#[tokio::test]
async fn test_channel_message_rendering() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch(
            "read_channel_messages",
            args(json!({"channel_id": "C100", "lookback_hours": 1000000})),
        )
        .await;

    let output = text(&result);
    assert!(output.contains("**Time:** 2023-11-14 22:13:20 UTC"));
    assert!(output.contains("**User:** <@U1>"));
    assert!(output.contains("**Link:** https://acme.slack.com/archives/C100/p1700000000000100"));
    assert!(output.contains("**Thread:** Yes (replies: 2)"));
    assert!(output.contains("**Reactions:** :thumbsup: (3)"));
    // Only the threaded message gets a thread line
    assert_eq!(output.matches("**Thread:**").count(), 1);
}

#[tokio::test]
async fn test_history_limit_is_clamped() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    dispatcher
        .dispatch(
            "read_channel_messages",
            args(json!({"channel_id": "C100", "limit": 5000})),
        )
        .await;

    let params = fixture.params_of("conversations.history").unwrap();
    assert_eq!(params["limit"], "1000");
    assert_eq!(params["channel"], "C100");
}

#[tokio::test]
async fn test_history_default_limit() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    dispatcher
        .dispatch("read_channel_messages", args(json!({"channel_id": "C100"})))
        .await;

    let params = fixture.params_of("conversations.history").unwrap();
    assert_eq!(params["limit"], "100");
}

#[tokio::test]
async fn test_thread_labels_in_order() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch(
            "read_thread_messages",
            args(json!({"channel_id": "C100", "thread_ts": "1700000000.000100"})),
        )
        .await;

    let output = text(&result);
    assert_eq!(output.matches("**[PARENT]**").count(), 1);
    assert_eq!(output.matches("**[REPLY ").count(), 2);

    let parent = output.find("**[PARENT]**").unwrap();
    let reply1 = output.find("**[REPLY 1]**").unwrap();
    let reply2 = output.find("**[REPLY 2]**").unwrap();
    assert!(parent < reply1 && reply1 < reply2);

    assert!(output.contains("**Total messages:** 3"));
    assert!(output.contains("**Link:** https://acme.slack.com/archives/C100/p1700000000000100"));
    assert!(output.contains("**Reactions:** :eyes: (1)"));
    assert!(output.find("parent text").unwrap() < output.find("reply one").unwrap());
}

#[tokio::test]
async fn test_channel_info() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch("get_channel_info", args(json!({"channel_id": "C100"})))
        .await;

    let output = text(&result);
    assert!(output.contains("**Name:** #engineering"));
    assert!(output.contains("**ID:** C100"));
    assert!(output.contains("**Created:** 2020-09-13"));
    assert!(output.contains("**Members:** 42"));
    assert!(output.contains("**Is Private:** false"));
    assert!(output.contains("**Is Archived:** false"));
    assert!(output.contains("**Topic:** Ship it"));
    // Empty purpose is omitted
    assert!(!output.contains("**Purpose:**"));
}

#[tokio::test]
async fn test_user_info_missing_email() {
    let (dispatcher, _) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch("get_user_info", args(json!({"user_id": "U1"})))
        .await;

    let output = text(&result);
    assert!(output.contains("**Name:** Jane Doe"));
    assert!(output.contains("**Display Name:** @jdoe"));
    assert!(output.contains("**Email:** N/A"));
    assert!(output.contains("**Title:** Staff Engineer"));
    assert!(output.contains("**Status:** Heads down"));
    assert!(output.contains("**Timezone:** Pacific Standard Time"));
    assert!(output.contains("**Is Admin:** true"));
    assert!(output.contains("**Is Bot:** false"));
}

#[tokio::test]
async fn test_list_my_channels_members_only() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    let result = dispatcher.dispatch("list_my_channels", args(json!({}))).await;

    let output = text(&result);
    assert!(output.contains("Found 2 channels you're a member of:"));
    assert!(output.contains("- \u{1F310} **#engineering** (`C100`) - 42 members"));
    assert!(output.contains("- \u{1F512} **#secret-ops** (`C200`) - 3 members"));
    assert!(!output.contains("random"));

    let params = fixture.params_of("conversations.list").unwrap();
    assert_eq!(params["types"], "public_channel,private_channel");
    assert_eq!(params["exclude_archived"], "true");
    assert_eq!(params["limit"], "1000");
}

#[tokio::test]
async fn test_list_my_channels_custom_types() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    dispatcher
        .dispatch("list_my_channels", args(json!({"types": "mpim,im"})))
        .await;

    let params = fixture.params_of("conversations.list").unwrap();
    assert_eq!(params["types"], "mpim,im");
}

#[tokio::test]
async fn test_search_adds_own_mention() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch(
            "search_my_conversations",
            args(json!({"query": "deploy", "count": 500})),
        )
        .await;

    let output = text(&result);
    assert!(output.contains("Query: 'deploy' (including mentions of you)"));
    assert!(output.contains("Found 57 total matches, showing 2 results:"));
    assert!(output.contains("**Channel:** #engineering"));
    assert!(output.contains("**Channel:** #unknown"));
    assert!(output.contains("**Time:** 2023-11-14 22:13:20 UTC"));

    let params = fixture.params_of("search.messages").unwrap();
    assert_eq!(params["query"], "deploy <@U999>");
    assert_eq!(params["count"], "100");
}

#[tokio::test]
async fn test_message_permalink() {
    let (dispatcher, fixture) = dispatcher(FixtureSlack::new());

    let result = dispatcher
        .dispatch(
            "get_message_permalink",
            args(json!({"channel_id": "C100", "message_ts": "1700000000.000100"})),
        )
        .await;

    assert_eq!(
        text(&result),
        "# Message Permalink\n\n**Link:** https://acme.slack.com/archives/C100/p1700000000000100"
    );
    let params = fixture.params_of("chat.getPermalink").unwrap();
    assert_eq!(params["message_ts"], "1700000000.000100");
}

#[tokio::test]
async fn test_slack_errors_become_text_for_every_tool() {
    let (dispatcher, _) = dispatcher(FixtureSlack::failing("channel_not_found"));

    for (name, arguments) in minimal_calls() {
        let result = dispatcher.dispatch(name, args(arguments)).await;
        let output = text(&result);
        assert!(output.starts_with("Slack API error:"), "{}: {}", name, output);
        assert!(output.contains("channel_not_found"));
    }
}

#[tokio::test]
async fn test_execute_keeps_error_kind() {
    let (dispatcher, _) = dispatcher(FixtureSlack::failing("user_not_found"));

    let call = ToolCall::parse("get_user_info", args(json!({"user_id": "U404"})))
        .unwrap()
        .unwrap();
    let err = dispatcher.execute(call).await.unwrap_err();

    assert_eq!(err, ToolError::SlackApi("user_not_found".to_string()));
}

#[tokio::test]
async fn test_unexpected_payload_is_generic_error() {
    let mut fixture = FixtureSlack::new();
    fixture.respond("chat.getPermalink", json!({"ok": true}));
    let (dispatcher, _) = dispatcher(fixture);

    let result = dispatcher
        .dispatch(
            "get_message_permalink",
            args(json!({"channel_id": "C100", "message_ts": "1.0"})),
        )
        .await;

    assert!(text(&result).starts_with("Error: "));
}
