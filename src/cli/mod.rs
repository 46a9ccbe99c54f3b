//! CLI command implementations
//!
//! Handles the command-line operations besides serving:
//! - tools: List the available tools
//! - call: Run a single tool and print its output
//! - whoami: Show the identity behind the configured token

mod commands;
mod setup;

pub use commands::*;
pub use setup::*;
