//! Mode routing
//!
//! - Server mode (HTTP server, the default)
//! - CLI mode (superuser and config management commands)

pub mod cli;
pub mod server;

pub use server::run_server;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    Server,
    Cli,
}

/// No subcommand or `serve` runs the server, everything else is a CLI command
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        None | Some(Commands::Serve) => Mode::Server,
        Some(_) => Mode::Cli,
    }
}
