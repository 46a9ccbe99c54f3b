//! slack-reader: Read-only Slack MCP server
//!
//! Usage:
//!   slack-reader serve               Start the MCP server (stdio transport)
//!   slack-reader serve --port 8080   Start the MCP server (HTTP transport)
//!   slack-reader tools               List available tools
//!   slack-reader call <tool> [json]  Run one tool and print its output
//!   slack-reader whoami              Show the identity behind the token

mod server;

use std::env;

use anyhow::Result;

use slack_reader::cli::{call_command, setup_logging, tools_command, whoami_command};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "serve" => {
            setup_logging("info");

            // Check for --port flag
            let port = args
                .iter()
                .position(|a| a == "--port")
                .and_then(|i| args.get(i + 1))
                .and_then(|p| p.parse::<u16>().ok());

            if let Some(port) = port {
                server::start_http(port)?;
            } else {
                server::start_stdio()?;
            }
        }
        "tools" => {
            tools_command()?;
        }
        "call" => {
            if args.len() < 3 {
                eprintln!("Usage: slack-reader call <tool> [json-arguments]");
                return Ok(());
            }
            setup_logging("warn");
            call_command(&args[2], args.get(3).map(|s| s.as_str()))?;
        }
        "whoami" => {
            setup_logging("warn");
            whoami_command()?;
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "--version" | "-V" | "version" => {
            print_version();
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"slack-reader: Read-only Slack MCP server

USAGE:
    slack-reader <COMMAND> [OPTIONS]

COMMANDS:
    serve                  Start the MCP server (stdio transport)
    serve --port <PORT>    Start the MCP server (HTTP transport)
    tools                  List available tools
    call <tool> [json]     Run one tool and print its output
    whoami                 Show the identity behind the configured token
    help                   Show this help message

ENVIRONMENT:
    SLACK_USER_TOKEN       User token (falls back to SLACK_BOT_TOKEN)
    SLACK_WORKSPACE_URL    Workspace URL for message links
    SSL_CERT_FILE          Extra CA bundle (falls back to REQUESTS_CA_BUNDLE)
    RUST_LOG               Log filter (logs go to stderr)

EXAMPLES:
    slack-reader serve
    slack-reader serve --port 8080
    slack-reader call list_my_channels
    slack-reader call read_channel_messages '{{"channel_id": "C0123456789", "lookback_hours": 4}}'
"#
    );
}

fn print_version() {
    println!("slack-reader {}", env!("CARGO_PKG_VERSION"));
}
