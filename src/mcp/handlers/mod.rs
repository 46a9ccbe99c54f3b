//! Handler modules for MCP tools

pub mod channel;
pub mod history;
pub mod permalink;
pub mod search;
pub mod thread;
pub mod user;
