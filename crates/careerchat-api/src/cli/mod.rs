//! CLI command definitions for the `careerchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Career guidance chat backed by Gemini.
#[derive(Parser)]
#[command(name = "careerchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat web server.
    Serve {
        /// Address to bind (overrides config and CAREERCHAT_HOST).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and CAREERCHAT_PORT).
        #[arg(long, short)]
        port: Option<u16>,

        /// Path to config.toml (defaults to the platform config directory).
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the career report.
    Report {
        /// Output machine-readable JSON instead of styled text.
        #[arg(long)]
        json: bool,
    },
}
