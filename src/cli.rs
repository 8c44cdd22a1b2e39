//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// bookmarks-service - bookmark and short link web service
#[derive(Parser)]
#[command(name = "bookmarks-service")]
#[command(version)]
#[command(about = "Bookmark and short link web service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create the super user or reset its password
    Superuser {
        /// New password (if not provided, will prompt interactively)
        #[arg(long, conflicts_with = "stdin")]
        password: Option<String>,

        /// Read password from stdin (for scripting)
        #[arg(long)]
        stdin: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml, `-` for stdout)
        output_path: Option<String>,
    },
}
