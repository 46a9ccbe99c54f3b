//! Transport entry points for `slack-reader serve`
//!
//! Both transports load configuration before accepting a connection, so a
//! missing token fails at startup rather than on the first tool call.

use anyhow::Result;
use rmcp::{
    transport::stdio,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    },
    ServiceExt,
};
use tracing::info;

use slack_reader::build_handler;
use slack_reader::cli::load_config;

/// Serve tools over stdin/stdout until the client disconnects
#[tokio::main]
pub async fn start_stdio() -> Result<()> {
    let config = load_config()?;
    let handler = build_handler(&config)?;
    info!("Slack tools ready on stdio");

    let service = handler.serve(stdio()).await?;
    service.waiting().await?;
    info!("stdio client disconnected");

    Ok(())
}

/// Serve tools over streamable HTTP at `/mcp` on the loopback interface
#[tokio::main]
pub async fn start_http(port: u16) -> Result<()> {
    let config = load_config()?;
    // Sessions share one Slack client
    let handler = build_handler(&config)?;

    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("Slack tools ready at http://{}/mcp", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Interrupt received, closing HTTP sessions");
        })
        .await?;

    Ok(())
}
